//! Domain layer of the Maeum drawing-analysis client.
//!
//! Holds the session stage machine, the upload set, the persona catalog,
//! the analysis payload and the [`analysis::AnalysisClient`] seam. Nothing
//! here does I/O.

pub mod analysis;
pub mod config;
pub mod error;
pub mod persona;
pub mod upload;
pub mod workflow;

// Re-export common error type
pub use error::{MaeumError, Result};
