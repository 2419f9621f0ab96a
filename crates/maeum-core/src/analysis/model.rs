//! Analysis payload returned by the backend.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Complete response of `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    /// Structured analysis (keywords, colors, energy scores, sentences)
    pub analysis_result: AnalysisData,
    /// Whole commentary in one piece; kept but not rendered
    #[serde(default)]
    pub character_commentary: String,
    /// Commentary split into sections, consumed by position
    #[serde(default)]
    pub commentary_sections: Vec<CommentarySection>,
}

impl AnalysisResponse {
    /// Content of the section at `index`, or `""` if the backend sent fewer.
    pub fn section_content(&self, index: usize) -> &str {
        self.commentary_sections
            .get(index)
            .map(|s| s.content.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    pub mind_expression: String,
    pub persona_mind_sentence: String,
    /// Energy summary in the persona's voice, e.g. "즐거움 85.0%가 가장 커요"
    pub persona_energy_sentence: String,
    /// Mood keywords, strongest first
    pub word_cloud: Vec<String>,
    /// Colors parallel to `word_cloud`
    pub top_5_colors: Vec<String>,
    pub energy_chart: EnergyChart,
}

/// One titled paragraph of commentary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentarySection {
    pub title: String,
    pub content: String,
}

/// The five named energy scores. A key the backend leaves out reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyChart {
    #[serde(default)]
    pub joyful: f64,
    #[serde(default)]
    pub curious: f64,
    #[serde(default)]
    pub sparkle: f64,
    #[serde(default)]
    pub rest: f64,
    #[serde(default)]
    pub spacing_out: f64,
}

impl EnergyChart {
    pub fn score(&self, axis: EnergyAxis) -> f64 {
        match axis {
            EnergyAxis::Joyful => self.joyful,
            EnergyAxis::Curious => self.curious,
            EnergyAxis::Sparkle => self.sparkle,
            EnergyAxis::Rest => self.rest,
            EnergyAxis::SpacingOut => self.spacing_out,
        }
    }

    /// All five scores in axis order.
    pub fn entries(&self) -> Vec<(EnergyAxis, f64)> {
        EnergyAxis::iter().map(|axis| (axis, self.score(axis))).collect()
    }
}

/// Axes of the energy radar, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum EnergyAxis {
    Joyful,
    Curious,
    Sparkle,
    Rest,
    SpacingOut,
}

impl EnergyAxis {
    /// Axis label.
    pub fn label(self) -> &'static str {
        match self {
            EnergyAxis::Joyful => "즐거움",
            EnergyAxis::Curious => "궁금증",
            EnergyAxis::Sparkle => "반짝임",
            EnergyAxis::Rest => "휴식",
            EnergyAxis::SpacingOut => "멍때림",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            EnergyAxis::Joyful => "🌈",
            EnergyAxis::Curious => "🔍",
            EnergyAxis::Sparkle => "✨",
            EnergyAxis::Rest => "🍃",
            EnergyAxis::SpacingOut => "🫧",
        }
    }

    /// Two-line caption under the label.
    pub fn description(self) -> &'static str {
        match self {
            EnergyAxis::Joyful => "밝고 활발한 표현으로\n활기찬 느낌이에요.",
            EnergyAxis::Curious => "새로운 장면에 등장해\n더 궁금해지는 느낌이에요.",
            EnergyAxis::Sparkle => "눈에 띄는 색과 장식으로\n반짝이는 것에 집중되고 있어요.",
            EnergyAxis::Rest => "편안한 장면이 많아서\n조용히 쉬는 차분한 느낌이에요.",
            EnergyAxis::SpacingOut => "빈 공간과 여운이 많아서\n가만히 있고 싶은 느낌이에요.",
        }
    }
}
