//! Application layer for Maeum.
//!
//! Coordinates the domain stage machine with an analysis backend and turns
//! analysis results into render-ready views.

pub mod analysis_workflow;
pub mod notifier;
pub mod render;

pub use analysis_workflow::{AnalysisWorkflow, SessionSnapshot};
pub use notifier::{ANALYSIS_FAILED_ALERT, AlertNotifier};
pub use render::{ResultRenderer, ResultView};
