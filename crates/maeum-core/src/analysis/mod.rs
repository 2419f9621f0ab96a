//! Analysis domain module.
//!
//! - `model`: the payload the backend returns
//! - `client`: the request snapshot and the `AnalysisClient` seam

mod client;
mod model;

pub use client::{
    ANALYZE_PATH, AnalysisClient, AnalysisRequest, FILES_FIELD, FormField, PERSONA_FIELD,
};
pub use model::{AnalysisData, AnalysisResponse, CommentarySection, EnergyAxis, EnergyChart};
