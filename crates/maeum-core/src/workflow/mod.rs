//! Session workflow: the stage machine and everything the user has entered.

mod stage;
mod state;

pub use stage::{Stage, TransitionResult};
pub use state::WorkflowState;
