//! The session state machine.
//!
//! ```text
//! Landing --start--> Upload --next--> PersonaSelect --confirm--> Loading
//!                                          ^                        |
//!                                          +------ error -----------+
//!                                                                   |
//! Landing <--reset-- (any stage)           Result <------ ok -------+
//! ```

use super::stage::{Stage, TransitionResult};
use crate::analysis::{AnalysisRequest, AnalysisResponse};
use crate::error::{MaeumError, Result};
use crate::persona::{PersonaId, PersonaSelection};
use crate::upload::{PreviewRegistry, UploadCollector, UploadedDrawing};

/// All state of one session. There is a single owner and every change goes
/// through the methods below.
#[derive(Debug, Default)]
pub struct WorkflowState {
    stage: Stage,
    uploads: UploadCollector,
    persona: PersonaSelection,
    result: Option<AnalysisResponse>,
    loading: bool,
}

impl WorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session whose previews are tracked by `registry`.
    pub fn with_registry(registry: PreviewRegistry) -> Self {
        Self {
            uploads: UploadCollector::new(registry),
            ..Self::default()
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn uploads(&self) -> &UploadCollector {
        &self.uploads
    }

    pub fn drawings(&self) -> &[UploadedDrawing] {
        self.uploads.drawings()
    }

    pub fn selected_persona(&self) -> Option<PersonaId> {
        self.persona.selected()
    }

    pub fn result(&self) -> Option<&AnalysisResponse> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the session looks exactly like a fresh one.
    pub fn is_initial(&self) -> bool {
        self.stage == Stage::Landing
            && self.uploads.is_empty()
            && self.persona.selected().is_none()
            && self.result.is_none()
            && !self.loading
    }

    // ============================================================================
    // Upload stage
    // ============================================================================

    /// Adds drawings to the upload set (capped at four).
    ///
    /// Returns how many were kept.
    pub fn add_drawings(
        &mut self,
        drawings: impl IntoIterator<Item = UploadedDrawing>,
    ) -> Result<usize> {
        self.require_stage(Stage::Upload, "add drawings")?;
        Ok(self.uploads.add(drawings))
    }

    /// Removes the drawing at `index`.
    pub fn remove_drawing(&mut self, index: usize) -> Result<UploadedDrawing> {
        self.require_stage(Stage::Upload, "remove drawings")?;
        self.uploads.remove(index)
    }

    // ============================================================================
    // Persona stage
    // ============================================================================

    /// Selects a persona. Returns `false` outside the persona stage.
    pub fn select_persona(&mut self, id: PersonaId) -> bool {
        if self.stage != Stage::PersonaSelect {
            tracing::debug!(stage = %self.stage, persona = %id, "persona selection ignored");
            return false;
        }
        self.persona.select(id);
        true
    }

    // ============================================================================
    // Transitions
    // ============================================================================

    /// `Landing --start--> Upload`
    pub fn start(&mut self) -> TransitionResult {
        if self.stage != Stage::Landing {
            return TransitionResult::NoOp;
        }
        self.move_to(Stage::Upload)
    }

    /// `Upload --next--> PersonaSelect`, only with at least one drawing.
    pub fn next(&mut self) -> TransitionResult {
        if self.stage != Stage::Upload || !self.uploads.can_proceed() {
            return TransitionResult::NoOp;
        }
        self.move_to(Stage::PersonaSelect)
    }

    /// `PersonaSelect --confirm--> Loading`, only with a persona selected.
    ///
    /// Returns the request the caller must submit. While a request is in
    /// flight the stage is `Loading`, so a second confirm yields nothing.
    pub fn confirm(&mut self) -> Option<AnalysisRequest> {
        if self.stage != Stage::PersonaSelect || self.loading {
            return None;
        }
        let persona = self.persona.selected()?;
        if !self.uploads.can_proceed() {
            return None;
        }

        let request = AnalysisRequest::new(self.uploads.drawings().to_vec(), persona);
        self.loading = true;
        self.move_to(Stage::Loading);
        Some(request)
    }

    /// Applies the outcome of the request started by [`confirm`](Self::confirm).
    ///
    /// Success moves to `Result`. Failure goes back to `PersonaSelect` with
    /// drawings and persona untouched. Outcomes arriving outside `Loading`
    /// (e.g. after a reset) are dropped.
    pub fn complete(&mut self, outcome: Result<AnalysisResponse>) -> TransitionResult {
        if self.stage != Stage::Loading {
            tracing::debug!(stage = %self.stage, "stale analysis outcome dropped");
            return TransitionResult::NoOp;
        }
        self.loading = false;

        match outcome {
            Ok(response) => {
                self.result = Some(response);
                self.move_to(Stage::Result)
            }
            Err(_) => self.move_to(Stage::PersonaSelect),
        }
    }

    /// Returns to `Landing` and forgets everything: drawings (and their
    /// previews), persona, result and the loading flag.
    pub fn reset(&mut self) -> TransitionResult {
        self.uploads.clear();
        self.persona.clear();
        self.result = None;
        self.loading = false;

        if self.stage == Stage::Landing {
            TransitionResult::NoOp
        } else {
            self.move_to(Stage::Landing)
        }
    }

    fn move_to(&mut self, to: Stage) -> TransitionResult {
        let from = self.stage;
        self.stage = to;
        tracing::debug!(%from, %to, "stage changed");
        TransitionResult::StageChanged { from, to }
    }

    fn require_stage(&self, expected: Stage, action: &str) -> Result<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(MaeumError::invalid_input(format!(
                "Cannot {} during the {} stage",
                action, self.stage
            )))
        }
    }
}
