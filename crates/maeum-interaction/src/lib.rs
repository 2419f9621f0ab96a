//! Talks to the analysis backend.
//!
//! - [`config`]: resolves the backend endpoint from flags, environment and
//!   `config.toml`
//! - [`HttpAnalysisClient`]: the reqwest implementation of
//!   [`maeum_core::analysis::AnalysisClient`]

pub mod config;
pub mod http_analysis_client;

pub use config::BackendConfig;
pub use http_analysis_client::HttpAnalysisClient;
