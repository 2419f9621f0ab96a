//! The ordered, capped set of drawings for one session.

use super::model::UploadedDrawing;
use super::preview::{PreviewHandle, PreviewRegistry};
use crate::error::{MaeumError, Result};

/// Maximum number of drawings per analysis.
pub const MAX_DRAWINGS: usize = 4;

/// Holds up to [`MAX_DRAWINGS`] drawings together with one live preview per
/// drawing.
///
/// `drawings[i]` and `previews[i]` always describe the same file. Removing a
/// drawing drops its preview; clearing or dropping the collector drops all of
/// them.
#[derive(Debug)]
pub struct UploadCollector {
    drawings: Vec<UploadedDrawing>,
    previews: Vec<PreviewHandle>,
    registry: PreviewRegistry,
}

impl UploadCollector {
    pub fn new(registry: PreviewRegistry) -> Self {
        Self {
            drawings: Vec::new(),
            previews: Vec::new(),
            registry,
        }
    }

    /// Appends `new_drawings`, then caps the set at [`MAX_DRAWINGS`].
    ///
    /// Overflow is dropped silently. Returns the number of drawings that were
    /// actually kept.
    pub fn add(&mut self, new_drawings: impl IntoIterator<Item = UploadedDrawing>) -> usize {
        let mut accepted = 0;
        let mut dropped = 0;

        for drawing in new_drawings {
            if self.is_full() {
                dropped += 1;
                continue;
            }
            self.previews.push(self.registry.create(&drawing));
            self.drawings.push(drawing);
            accepted += 1;
        }

        if dropped > 0 {
            tracing::debug!(accepted, dropped, "upload cap reached, extra drawings ignored");
        }
        accepted
    }

    /// Removes the drawing at `index`; later drawings move down by one.
    pub fn remove(&mut self, index: usize) -> Result<UploadedDrawing> {
        if index >= self.drawings.len() {
            return Err(MaeumError::invalid_input(format!(
                "No drawing at position {} (have {})",
                index,
                self.drawings.len()
            )));
        }
        // Dropping the handle releases the preview.
        self.previews.remove(index);
        Ok(self.drawings.remove(index))
    }

    /// Removes every drawing and releases every preview.
    pub fn clear(&mut self) {
        self.previews.clear();
        self.drawings.clear();
    }

    pub fn drawings(&self) -> &[UploadedDrawing] {
        &self.drawings
    }

    pub fn previews(&self) -> &[PreviewHandle] {
        &self.previews
    }

    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.drawings.len() >= MAX_DRAWINGS
    }

    /// Whether the "next" action is enabled.
    pub fn can_proceed(&self) -> bool {
        !self.is_empty()
    }

    pub fn registry(&self) -> &PreviewRegistry {
        &self.registry
    }
}

impl Default for UploadCollector {
    fn default() -> Self {
        Self::new(PreviewRegistry::new())
    }
}
