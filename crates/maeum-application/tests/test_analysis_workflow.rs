use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use maeum_application::{ANALYSIS_FAILED_ALERT, AlertNotifier, AnalysisWorkflow};
use maeum_core::analysis::{
    AnalysisClient, AnalysisData, AnalysisRequest, AnalysisResponse, CommentarySection,
    EnergyChart,
};
use maeum_core::persona::PersonaId;
use maeum_core::upload::{PreviewRegistry, UploadedDrawing};
use maeum_core::workflow::Stage;
use maeum_core::{MaeumError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Notify;

fn sample_response() -> AnalysisResponse {
    AnalysisResponse {
        analysis_result: AnalysisData {
            mind_expression: "밝은 마음".into(),
            persona_mind_sentence: "밝구나".into(),
            persona_energy_sentence: "즐거움 85.0%".into(),
            word_cloud: vec!["행복".into(), "설렘".into()],
            top_5_colors: vec!["#FF0000".into(), "#00FF00".into()],
            energy_chart: EnergyChart {
                joyful: 85.0,
                curious: 40.0,
                sparkle: 30.0,
                rest: 20.0,
                spacing_out: 10.0,
            },
        },
        character_commentary: String::new(),
        commentary_sections: vec![CommentarySection {
            title: "인트로".into(),
            content: "안녕".into(),
        }],
    }
}

fn drawing(name: &str) -> UploadedDrawing {
    UploadedDrawing::new(name, "image/png", name.as_bytes().to_vec())
}

/// Records every request and answers with a fixed outcome.
struct MockAnalysisClient {
    fail: bool,
    requests: Mutex<Vec<AnalysisRequest>>,
}

impl MockAnalysisClient {
    fn succeeding() -> Self {
        Self {
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AnalysisClient for MockAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResponse> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            Err(MaeumError::network("connection refused"))
        } else {
            Ok(sample_response())
        }
    }
}

/// Holds every request until released.
struct GatedAnalysisClient {
    entered: Notify,
    release: Notify,
    calls: Mutex<usize>,
}

#[async_trait]
impl AnalysisClient for GatedAnalysisClient {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResponse> {
        *self.calls.lock().unwrap() += 1;
        self.entered.notify_one();
        self.release.notified().await;
        Ok(sample_response())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl AlertNotifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

async fn at_persona_select(workflow: &AnalysisWorkflow, names: &[&str]) {
    workflow.start().await;
    workflow
        .add_drawings(names.iter().map(|n| drawing(n)).collect())
        .await
        .unwrap();
    assert_eq!(workflow.next().await.target(), Some(Stage::PersonaSelect));
}

#[tokio::test]
async fn test_full_flow_reaches_result() {
    let client = Arc::new(MockAnalysisClient::succeeding());
    let notifier = Arc::new(RecordingNotifier::default());
    let workflow = AnalysisWorkflow::new(client.clone(), notifier.clone());

    at_persona_select(&workflow, &["a.png", "b.png"]).await;
    assert!(workflow.select_persona(PersonaId::Pico).await);

    let transition = workflow.confirm_and_analyze().await;
    assert_eq!(transition.target(), Some(Stage::Result));

    let requests = client.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].persona, PersonaId::Pico);
    assert_eq!(requests[0].drawings.len(), 2);
    assert!(notifier.alerts.lock().unwrap().is_empty());

    let snapshot = workflow.snapshot().await;
    assert!(snapshot.has_result);
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn test_confirm_without_persona_sends_nothing() {
    let client = Arc::new(MockAnalysisClient::succeeding());
    let workflow = AnalysisWorkflow::new(client.clone(), Arc::new(RecordingNotifier::default()));

    at_persona_select(&workflow, &["a.png"]).await;

    assert!(workflow.confirm_and_analyze().await.is_noop());
    assert_eq!(client.request_count(), 0);
    assert_eq!(workflow.stage().await, Stage::PersonaSelect);
}

#[tokio::test]
async fn test_failure_alerts_and_keeps_inputs() {
    let client = Arc::new(MockAnalysisClient::failing());
    let notifier = Arc::new(RecordingNotifier::default());
    let workflow = AnalysisWorkflow::new(client.clone(), notifier.clone());

    at_persona_select(&workflow, &["a.png", "b.png"]).await;
    workflow.select_persona(PersonaId::Labong).await;

    let transition = workflow.confirm_and_analyze().await;
    assert_eq!(transition.target(), Some(Stage::PersonaSelect));

    let snapshot = workflow.snapshot().await;
    assert_eq!(snapshot.stage, Stage::PersonaSelect);
    assert_eq!(snapshot.drawing_names, vec!["a.png", "b.png"]);
    assert_eq!(snapshot.persona, Some(PersonaId::Labong));
    assert!(!snapshot.has_result);
    assert!(!snapshot.loading);

    assert_eq!(
        notifier.alerts.lock().unwrap().as_slice(),
        &[ANALYSIS_FAILED_ALERT.to_string()]
    );
    // Single attempt, no retry
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn test_second_confirm_while_loading_is_noop() {
    let client = Arc::new(GatedAnalysisClient {
        entered: Notify::new(),
        release: Notify::new(),
        calls: Mutex::new(0),
    });
    let workflow = AnalysisWorkflow::new(client.clone(), Arc::new(RecordingNotifier::default()));

    at_persona_select(&workflow, &["a.png"]).await;
    workflow.select_persona(PersonaId::Pepe).await;

    let in_flight = {
        let workflow = workflow.clone();
        tokio::spawn(async move { workflow.confirm_and_analyze().await })
    };
    client.entered.notified().await;

    assert_eq!(workflow.stage().await, Stage::Loading);
    assert!(workflow.snapshot().await.loading);
    assert!(workflow.confirm_and_analyze().await.is_noop());

    client.release.notify_one();
    let transition = in_flight.await.unwrap();
    assert_eq!(transition.target(), Some(Stage::Result));
    assert_eq!(*client.calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_reset_after_result_releases_everything() {
    let registry = PreviewRegistry::new();
    let workflow = AnalysisWorkflow::with_registry(
        Arc::new(MockAnalysisClient::succeeding()),
        Arc::new(RecordingNotifier::default()),
        registry.clone(),
    );

    at_persona_select(&workflow, &["a.png", "b.png", "c.png"]).await;
    workflow.select_persona(PersonaId::Shasha).await;
    workflow.confirm_and_analyze().await;

    let mut rng = StdRng::seed_from_u64(11);
    let view = workflow.render_result(&mut rng).await.expect("result view");
    assert_eq!(view.gallery.len(), 3);
    assert_eq!(view.theme.persona, PersonaId::Shasha);
    // Upload previews plus gallery previews
    assert_eq!(registry.live_count(), 6);
    drop(view);

    assert_eq!(workflow.reset().await.target(), Some(Stage::Landing));
    assert!(workflow.with_state(|state| state.is_initial()).await);
    assert_eq!(registry.live_count(), 0);
    assert!(workflow.render_result(&mut rng).await.is_none());
}

#[tokio::test]
async fn test_upload_cap_through_workflow() {
    let workflow = AnalysisWorkflow::new(
        Arc::new(MockAnalysisClient::succeeding()),
        Arc::new(RecordingNotifier::default()),
    );
    workflow.start().await;

    let accepted = workflow
        .add_drawings((1..=6).map(|i| drawing(&format!("{}.png", i))).collect())
        .await
        .unwrap();
    assert_eq!(accepted, 4);

    let removed = workflow.remove_drawing(0).await.unwrap();
    assert_eq!(removed.name, "1.png");
    assert_eq!(
        workflow.snapshot().await.drawing_names,
        vec!["2.png", "3.png", "4.png"]
    );
}
