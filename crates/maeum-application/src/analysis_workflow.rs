//! Analysis workflow use case.
//!
//! Wraps the [`WorkflowState`] stage machine and runs the analysis request
//! when the user confirms. The state lock is not held while the request is
//! in flight; the `Loading` stage is what keeps a second confirm out.

use std::sync::Arc;

use maeum_core::Result;
use maeum_core::analysis::AnalysisClient;
use maeum_core::persona::PersonaId;
use maeum_core::upload::{PreviewRegistry, UploadedDrawing};
use maeum_core::workflow::{Stage, TransitionResult, WorkflowState};
use rand::Rng;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::notifier::{ANALYSIS_FAILED_ALERT, AlertNotifier};
use crate::render::{ResultRenderer, ResultView};

/// Read-only summary of the session, for status displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub stage: Stage,
    pub drawing_names: Vec<String>,
    pub persona: Option<PersonaId>,
    pub has_result: bool,
    pub loading: bool,
}

/// One user session: stage machine, backend client and alert sink.
#[derive(Clone)]
pub struct AnalysisWorkflow {
    state: Arc<Mutex<WorkflowState>>,
    client: Arc<dyn AnalysisClient>,
    notifier: Arc<dyn AlertNotifier>,
    registry: PreviewRegistry,
}

impl AnalysisWorkflow {
    pub fn new(client: Arc<dyn AnalysisClient>, notifier: Arc<dyn AlertNotifier>) -> Self {
        Self::with_registry(client, notifier, PreviewRegistry::new())
    }

    /// Creates a session whose previews are tracked by `registry`.
    pub fn with_registry(
        client: Arc<dyn AnalysisClient>,
        notifier: Arc<dyn AlertNotifier>,
        registry: PreviewRegistry,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(WorkflowState::with_registry(registry.clone()))),
            client,
            notifier,
            registry,
        }
    }

    pub fn registry(&self) -> &PreviewRegistry {
        &self.registry
    }

    /// Runs `f` against the current state.
    pub async fn with_state<R>(&self, f: impl FnOnce(&WorkflowState) -> R) -> R {
        let state = self.state.lock().await;
        f(&state)
    }

    pub async fn stage(&self) -> Stage {
        self.state.lock().await.stage()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.lock().await;
        SessionSnapshot {
            stage: state.stage(),
            drawing_names: state.drawings().iter().map(|d| d.name.clone()).collect(),
            persona: state.selected_persona(),
            has_result: state.result().is_some(),
            loading: state.is_loading(),
        }
    }

    pub async fn start(&self) -> TransitionResult {
        self.state.lock().await.start()
    }

    pub async fn add_drawings(&self, drawings: Vec<UploadedDrawing>) -> Result<usize> {
        let offered = drawings.len();
        let accepted = self.state.lock().await.add_drawings(drawings)?;
        tracing::info!(offered, accepted, "Drawings added");
        Ok(accepted)
    }

    pub async fn remove_drawing(&self, index: usize) -> Result<UploadedDrawing> {
        let removed = self.state.lock().await.remove_drawing(index)?;
        tracing::info!(file = %removed.name, index, "Drawing removed");
        Ok(removed)
    }

    pub async fn next(&self) -> TransitionResult {
        self.state.lock().await.next()
    }

    pub async fn select_persona(&self, id: PersonaId) -> bool {
        self.state.lock().await.select_persona(id)
    }

    /// Confirms the persona and runs the analysis.
    ///
    /// Returns `NoOp` when confirm is not available (no persona, wrong stage,
    /// request already in flight). Otherwise the session ends up in `Result`
    /// on success, or back in `PersonaSelect` with inputs intact on failure,
    /// after the user has been alerted.
    pub async fn confirm_and_analyze(&self) -> TransitionResult {
        let request = {
            let mut state = self.state.lock().await;
            match state.confirm() {
                Some(request) => request,
                None => {
                    tracing::debug!(stage = %state.stage(), "Confirm ignored");
                    return TransitionResult::NoOp;
                }
            }
        };

        let outcome = self.client.analyze(&request).await;
        let failed = match &outcome {
            Ok(_) => {
                tracing::info!(persona = %request.persona, "Analysis completed");
                false
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    persona = %request.persona,
                    backend = e.is_backend_failure(),
                    "Analysis failed"
                );
                true
            }
        };

        let transition = self.state.lock().await.complete(outcome);
        if failed && !transition.is_noop() {
            self.notifier.alert(ANALYSIS_FAILED_ALERT);
        }
        transition
    }

    /// Clears everything and returns to the start screen.
    pub async fn reset(&self) -> TransitionResult {
        let transition = self.state.lock().await.reset();
        tracing::info!("Session reset");
        transition
    }

    /// Renders the current result, if there is one.
    pub async fn render_result<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ResultView> {
        let state = self.state.lock().await;
        let response = state.result()?;
        let persona = state.selected_persona()?;
        Some(ResultRenderer::render(
            response,
            persona,
            state.drawings(),
            &self.registry,
            rng,
        ))
    }
}
