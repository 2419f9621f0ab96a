//! Persona domain model.
//!
//! Each persona reads the same drawings in its own voice and carries its own
//! color theme through the selection cards and the result page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::error::MaeumError;

/// Identifier of one of the four built-in personas.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum PersonaId {
    /// 마음박사 페페: warm, doctor-style reading
    Pepe,
    /// 현실친구 라봉이: honest but affectionate friend
    Labong,
    /// 칭찬봇 피코: scanning robot that showers praise
    Pico,
    /// 카리스마 샤샤: cool, sensible reading
    Shasha,
}

impl PersonaId {
    /// Returns the display metadata for this persona.
    pub fn persona(self) -> &'static Persona {
        let index = match self {
            PersonaId::Pepe => 0,
            PersonaId::Labong => 1,
            PersonaId::Pico => 2,
            PersonaId::Shasha => 3,
        };
        &super::preset::PERSONAS[index]
    }

    /// Display name, which is also the value sent to the backend.
    pub fn display_name(self) -> &'static str {
        self.persona().name
    }

    /// Asset key used for image paths (`pepe`, `labong`, ...).
    pub fn key(self) -> &'static str {
        self.persona().key
    }

    /// Looks a persona up by its exact display name.
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::iter().find(|id| id.display_name() == name)
    }

    /// Looks a persona up by asset key, ignoring ASCII case.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::iter().find(|id| id.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PersonaId {
    type Err = MaeumError;

    /// Accepts either the display name or the asset key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::from_display_name(trimmed)
            .or_else(|| Self::from_key(trimmed))
            .ok_or_else(|| MaeumError::invalid_input(format!("Unknown persona: '{}'", trimmed)))
    }
}

/// Immutable display metadata of a persona.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub id: PersonaId,
    /// Display name, also the wire identifier
    pub name: &'static str,
    /// Asset key shared by all of the persona's images
    pub key: &'static str,
    /// Two-line introduction shown on the selection card
    pub description: &'static str,
    /// Strong theme color (selected card, radar stroke)
    pub main_color: &'static str,
    /// Soft theme color (result background, heading highlight)
    pub highlight_color: &'static str,
    /// Lead-in line above the result heading
    pub result_subtitle: &'static str,
}

impl Persona {
    /// Front-facing avatar on the selection card.
    pub fn avatar_path(&self) -> String {
        format!("/images/{}_front.png", self.key)
    }

    /// Half-body illustration at the top of the result page.
    pub fn half_image_path(&self) -> String {
        format!("/images/{}_half.png", self.key)
    }

    /// Side illustration next to the solution section.
    pub fn side_image_path(&self) -> String {
        format!("/images/{}_side.png", self.key)
    }

    /// Background of the whole result page.
    pub fn result_background(&self) -> &'static str {
        self.highlight_color
    }
}
