pub mod analyze;
pub mod repl;
