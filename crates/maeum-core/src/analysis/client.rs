//! Analysis request contract.

use async_trait::async_trait;

use super::model::AnalysisResponse;
use crate::error::Result;
use crate::persona::PersonaId;
use crate::upload::UploadedDrawing;

/// Path of the analyze endpoint, appended to the backend base URL.
pub const ANALYZE_PATH: &str = "/api/analyze";
/// Repeated multipart field carrying one drawing each.
pub const FILES_FIELD: &str = "files";
/// Multipart text field carrying the persona display name.
pub const PERSONA_FIELD: &str = "persona";

/// Snapshot of the inputs taken when the user confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub drawings: Vec<UploadedDrawing>,
    pub persona: PersonaId,
}

/// One field of the multipart body, independent of any HTTP library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField<'a> {
    File {
        name: &'static str,
        drawing: &'a UploadedDrawing,
    },
    Text {
        name: &'static str,
        value: &'static str,
    },
}

impl AnalysisRequest {
    pub fn new(drawings: Vec<UploadedDrawing>, persona: PersonaId) -> Self {
        Self { drawings, persona }
    }

    /// Multipart fields in the order they are sent: every drawing under
    /// [`FILES_FIELD`], then the persona under [`PERSONA_FIELD`].
    pub fn form_fields(&self) -> Vec<FormField<'_>> {
        self.drawings
            .iter()
            .map(|drawing| FormField::File {
                name: FILES_FIELD,
                drawing,
            })
            .chain(std::iter::once(FormField::Text {
                name: PERSONA_FIELD,
                value: self.persona.display_name(),
            }))
            .collect()
    }
}

/// Sends drawings and a persona to the analysis backend.
///
/// One call is one attempt; implementations do not retry.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse>;
}
