use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use maeum_application::AnalysisWorkflow;
use maeum_core::analysis::AnalysisClient;
use maeum_core::workflow::Stage;
use maeum_infrastructure::load_drawings;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::input::parse_persona;
use crate::output::{self, ConsoleNotifier};

/// Runs one analysis without prompting. Returns `false` if it failed.
pub async fn run(
    client: Arc<dyn AnalysisClient>,
    persona: &str,
    files: &[PathBuf],
) -> Result<bool> {
    let persona = parse_persona(persona)?;
    let drawings = load_drawings(files)
        .await
        .context("Failed to load drawings")?;

    let workflow = AnalysisWorkflow::new(client, Arc::new(ConsoleNotifier));
    workflow.start().await;

    let offered = drawings.len();
    let accepted = workflow.add_drawings(drawings).await?;
    if accepted < offered {
        eprintln!(
            "{}",
            format!(
                "Only the first {} of {} drawings are used",
                accepted, offered
            )
            .yellow()
        );
    }

    workflow.next().await;
    workflow.select_persona(persona).await;

    output::print_loading();
    let transition = workflow.confirm_and_analyze().await;
    if transition.target() != Some(Stage::Result) {
        return Ok(false);
    }

    let mut rng = StdRng::from_entropy();
    match workflow.render_result(&mut rng).await {
        Some(view) => {
            output::print_result(&view);
            Ok(true)
        }
        None => Ok(false),
    }
}
