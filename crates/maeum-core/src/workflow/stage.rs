//! Stage types for session state management.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The screen the session is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Start screen
    #[default]
    Landing,
    /// Picking 1-4 drawings
    Upload,
    /// Picking a persona
    PersonaSelect,
    /// Analysis request in flight
    Loading,
    /// Showing the report
    Result,
}

impl Stage {
    /// Step number shown in the wizard (Upload is step 1).
    pub fn step(self) -> Option<u8> {
        match self {
            Stage::Upload => Some(1),
            Stage::PersonaSelect => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Landing => "landing",
            Stage::Upload => "upload",
            Stage::PersonaSelect => "persona-select",
            Stage::Loading => "loading",
            Stage::Result => "result",
        };
        f.write_str(name)
    }
}

/// Outcome of asking the stage machine to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TransitionResult {
    /// The action is not available right now; nothing changed.
    NoOp,
    /// The session moved to another stage.
    StageChanged { from: Stage, to: Stage },
}

impl TransitionResult {
    pub fn is_noop(&self) -> bool {
        matches!(self, TransitionResult::NoOp)
    }

    /// The stage moved to, if anything changed.
    pub fn target(&self) -> Option<Stage> {
        match self {
            TransitionResult::NoOp => None,
            TransitionResult::StageChanged { to, .. } => Some(*to),
        }
    }
}
