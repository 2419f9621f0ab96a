//! Interactive session.
//!
//! Each command maps onto one workflow operation; the prompt and the
//! helper's hints follow the current stage.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use colored::Colorize;
use maeum_application::AnalysisWorkflow;
use maeum_core::analysis::AnalysisClient;
use maeum_core::workflow::Stage;
use maeum_core::{MaeumError, Result as MaeumResult};
use maeum_infrastructure::load_drawings;
use maeum_interaction::BackendConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use crate::helper::CliHelper;
use crate::input::ReplCommand;
use crate::output::{self, ConsoleNotifier};

pub async fn run(client: Arc<dyn AnalysisClient>, backend: &BackendConfig) -> Result<()> {
    let workflow = AnalysisWorkflow::new(client, Arc::new(ConsoleNotifier));
    let stage = Arc::new(RwLock::new(workflow.stage().await));

    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(stage.clone())));

    output::print_landing();
    println!(
        "{}",
        format!(
            "backend: {}  |  '/help' for commands, '/quit' to exit",
            backend.base_url
        )
        .bright_black()
    );
    println!();

    loop {
        let prompt = format!("[{}] >> ", workflow.stage().await);

        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                let command = match trimmed.parse::<ReplCommand>() {
                    Ok(command) => command,
                    Err(e) => {
                        eprintln!("{}", e.to_string().red());
                        continue;
                    }
                };
                if command == ReplCommand::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if let Err(e) = handle(&workflow, command).await {
                    tracing::warn!(error = %e, "Command failed");
                    eprintln!("{}", e.to_string().red());
                }

                let current = workflow.stage().await;
                if let Ok(mut shared) = stage.write() {
                    *shared = current;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

async fn handle(workflow: &AnalysisWorkflow, command: ReplCommand) -> MaeumResult<()> {
    match command {
        ReplCommand::Start => {
            if workflow.start().await.is_noop() {
                println!(
                    "{}",
                    "Already started. Use /reset to start over.".bright_black()
                );
            } else {
                output::print_upload_guide();
            }
        }
        ReplCommand::Add(paths) => {
            if workflow.stage().await != Stage::Upload {
                return Err(MaeumError::invalid_input(
                    "Drawings can only be added on the upload step",
                ));
            }
            let drawings = load_drawings(&paths).await?;
            let offered = drawings.len();
            let accepted = workflow.add_drawings(drawings).await?;
            if accepted < offered {
                println!(
                    "{}",
                    format!(
                        "{} drawing(s) ignored: at most 4 are kept",
                        offered - accepted
                    )
                    .yellow()
                );
            }
            workflow.with_state(|state| output::print_drawings(state.drawings())).await;
        }
        ReplCommand::Remove(index) => {
            let removed = workflow.remove_drawing(index).await?;
            println!("{}", format!("Removed {}", removed.name).bright_black());
            workflow.with_state(|state| output::print_drawings(state.drawings())).await;
        }
        ReplCommand::List => {
            workflow.with_state(|state| output::print_drawings(state.drawings())).await;
        }
        ReplCommand::Next => {
            if workflow.next().await.is_noop() {
                let snapshot = workflow.snapshot().await;
                if snapshot.stage == Stage::Upload {
                    println!("{}", "Add at least one drawing first.".yellow());
                } else {
                    println!("{}", "Nothing to move on to from here.".bright_black());
                }
            } else {
                output::print_personas(None);
            }
        }
        ReplCommand::Personas => {
            let selected = workflow.snapshot().await.persona;
            output::print_personas(selected);
        }
        ReplCommand::Select(id) => {
            if workflow.stage().await != Stage::PersonaSelect {
                return Err(MaeumError::invalid_input(
                    "Personas can only be chosen on the persona step",
                ));
            }
            workflow.select_persona(id).await;
            println!("{} {}", "✓".bold(), id);
            println!("{}", "Type /confirm to start the analysis.".bright_black());
        }
        ReplCommand::Confirm => confirm(workflow).await,
        ReplCommand::Reset => {
            workflow.reset().await;
            output::print_landing();
        }
        ReplCommand::Status => output::print_status(&workflow.snapshot().await),
        ReplCommand::Help => output::print_help(),
        ReplCommand::Quit => {}
    }
    Ok(())
}

async fn confirm(workflow: &AnalysisWorkflow) {
    let snapshot = workflow.snapshot().await;
    if snapshot.stage == Stage::PersonaSelect && snapshot.persona.is_some() {
        output::print_loading();
    }

    let transition = workflow.confirm_and_analyze().await;
    match transition.target() {
        Some(Stage::Result) => {
            let mut rng = StdRng::from_entropy();
            if let Some(view) = workflow.render_result(&mut rng).await {
                output::print_result(&view);
            }
            println!("{}", "Type /reset to analyze new drawings.".bright_black());
        }
        Some(_) => {
            println!("{}", "Type /confirm to try again.".bright_black());
        }
        None if snapshot.stage == Stage::PersonaSelect => {
            println!("{}", "Choose a persona first (/select).".yellow());
        }
        None => {
            println!("{}", "Nothing to confirm right now.".bright_black());
        }
    }
}
