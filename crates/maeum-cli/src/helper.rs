//! rustyline helper: command completion, stage-aware hints and highlighting.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::{Arc, RwLock};

use colored::Colorize;
use maeum_core::persona::PersonaId;
use maeum_core::workflow::Stage;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use strum::IntoEnumIterator;

use crate::input::COMMANDS;

/// The command that moves the session forward from `stage`.
pub fn suggested_command(stage: Stage) -> &'static str {
    match stage {
        Stage::Landing => "/start",
        Stage::Upload => "/add ",
        Stage::PersonaSelect => "/select ",
        Stage::Loading => "/status",
        Stage::Result => "/reset",
    }
}

pub struct CliHelper {
    commands: Vec<&'static str>,
    stage: Arc<RwLock<Stage>>,
    files: FilenameCompleter,
}

impl CliHelper {
    pub fn new(stage: Arc<RwLock<Stage>>) -> Self {
        Self {
            commands: COMMANDS.iter().map(|(name, _)| *name).collect(),
            stage,
            files: FilenameCompleter::new(),
        }
    }

    fn current_stage(&self) -> Stage {
        self.stage.read().map(|stage| *stage).unwrap_or_default()
    }

    fn complete_persona(&self, arg: &str, start: usize) -> (usize, Vec<Pair>) {
        let candidates = PersonaId::iter()
            .map(PersonaId::key)
            .filter(|key| key.starts_with(arg))
            .map(|key| Pair {
                display: key.to_string(),
                replacement: key.to_string(),
            })
            .collect();
        (start, candidates)
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        if let Some(arg) = line_to_cursor.strip_prefix("/select ") {
            return Ok(self.complete_persona(arg, pos - arg.len()));
        }
        if line_to_cursor.starts_with("/add ") {
            return self.files.complete(line, pos, ctx);
        }

        if line_to_cursor.starts_with('/') && !line_to_cursor.contains(' ') {
            let candidates = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line_to_cursor))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.is_empty() {
            return Some(suggested_command(self.current_stage()).to_string());
        }

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}
