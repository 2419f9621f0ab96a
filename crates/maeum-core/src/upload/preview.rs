//! Preview URLs for uploaded drawings.
//!
//! A preview is a `data:` URL built from the drawing bytes. Every handle is
//! registered while alive and unregistered when dropped, so the registry can
//! tell whether anything still holds on to a preview after the owning file
//! list changed.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use uuid::Uuid;

use super::model::UploadedDrawing;

type LiveSet = Arc<Mutex<HashSet<Uuid>>>;

fn lock(live: &LiveSet) -> MutexGuard<'_, HashSet<Uuid>> {
    live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Creates preview handles and tracks which of them are still alive.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    live: LiveSet,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a preview for `drawing`. The preview is released when the
    /// returned handle is dropped.
    pub fn create(&self, drawing: &UploadedDrawing) -> PreviewHandle {
        let id = Uuid::new_v4();
        let url = format!(
            "data:{};base64,{}",
            drawing.mime_type,
            STANDARD.encode(&drawing.bytes)
        );
        lock(&self.live).insert(id);
        tracing::trace!(preview_id = %id, file = %drawing.name, "preview created");

        PreviewHandle {
            id,
            url,
            live: Arc::clone(&self.live),
        }
    }

    /// Number of previews that have not been released yet.
    pub fn live_count(&self) -> usize {
        lock(&self.live).len()
    }

    pub fn is_live(&self, id: Uuid) -> bool {
        lock(&self.live).contains(&id)
    }
}

/// A live preview URL. Dropping the handle releases it.
pub struct PreviewHandle {
    id: Uuid,
    url: String,
    live: LiveSet,
}

impl PreviewHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The URL carries the whole image; keep it out of logs.
        f.debug_struct("PreviewHandle")
            .field("id", &self.id)
            .field("url_len", &self.url.len())
            .finish()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        lock(&self.live).remove(&self.id);
        tracing::trace!(preview_id = %self.id, "preview released");
    }
}
