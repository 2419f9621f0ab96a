//! Infrastructure layer for Maeum.
//!
//! File system access: where configuration and logs live, reading
//! `config.toml`, and loading drawings from disk.

pub mod config_service;
pub mod drawing_loader;
pub mod paths;

pub use config_service::ConfigService;
pub use drawing_loader::{load_drawing, load_drawings};
pub use paths::MaeumPaths;
