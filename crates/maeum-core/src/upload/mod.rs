//! Drawing upload domain module.
//!
//! - `model`: `UploadedDrawing`, one image file held in memory
//! - `preview`: revocable preview URLs and the registry that tracks them
//! - `collector`: the capped, ordered upload set

mod collector;
mod model;
mod preview;

pub use collector::{MAX_DRAWINGS, UploadCollector};
pub use model::UploadedDrawing;
pub use preview::{PreviewHandle, PreviewRegistry};
