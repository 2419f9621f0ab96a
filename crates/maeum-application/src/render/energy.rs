//! Energy radar and energy sentence formatting.

use maeum_core::analysis::{EnergyAxis, EnergyChart};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// "<Hangul word> <number>%" as written by the backend, e.g. "즐거움 85%".
///
/// Only ASCII digits and a plain space count.
static ENERGY_FIGURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[가-힣]+ [0-9]+(?:\.[0-9]+)?%").expect("valid energy figure regex")
});

/// Removes a redundant ".0" in front of every percent sign.
///
/// `"85.0%"` becomes `"85%"`; `"85.5%"` is left alone.
pub fn strip_trailing_zero_percent(text: &str) -> String {
    text.replace(".0%", "%")
}

/// Formats a score for display: `85.0` → `"85%"`, `55.5` → `"55.5%"`.
pub fn format_score(score: f64) -> String {
    strip_trailing_zero_percent(&format!("{:.1}%", score))
}

/// A run of text, optionally emphasized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSpan {
    pub text: String,
    pub emphasized: bool,
}

impl TextSpan {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// Splits `text` into plain runs and emphasized "<word> <number>%" runs.
pub fn emphasize_energy_figures(text: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for figure in ENERGY_FIGURE.find_iter(text) {
        if figure.start() > cursor {
            spans.push(TextSpan::plain(&text[cursor..figure.start()]));
        }
        spans.push(TextSpan::emphasized(figure.as_str()));
        cursor = figure.end();
    }
    if cursor < text.len() {
        spans.push(TextSpan::plain(&text[cursor..]));
    }

    spans
}

/// Strips ".0%" and then marks the energy figures.
pub fn format_energy_sentence(text: &str) -> Vec<TextSpan> {
    emphasize_energy_figures(&strip_trailing_zero_percent(text))
}

/// One spoke of the radar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub axis: EnergyAxis,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub score: f64,
}

/// Five-axis radar of the energy scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyRadar {
    pub axes: Vec<RadarAxis>,
    pub stroke_color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f32,
}

impl EnergyRadar {
    pub fn build(chart: &EnergyChart, main_color: &'static str) -> Self {
        let axes = chart
            .entries()
            .into_iter()
            .map(|(axis, score)| RadarAxis {
                axis,
                label: axis.label(),
                icon: axis.icon(),
                description: axis.description(),
                score,
            })
            .collect();

        Self {
            axes,
            stroke_color: main_color,
            fill_color: main_color,
            fill_opacity: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_zero_percent() {
        assert_eq!(strip_trailing_zero_percent("85.0%"), "85%");
        assert_eq!(strip_trailing_zero_percent("85.5%"), "85.5%");
        assert_eq!(
            strip_trailing_zero_percent("100.0% 그리고 3.0%"),
            "100% 그리고 3%"
        );
        assert_eq!(strip_trailing_zero_percent("10.05%"), "10.05%");
        assert_eq!(strip_trailing_zero_percent("85.0점"), "85.0점");
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(85.0), "85%");
        assert_eq!(format_score(55.5), "55.5%");
        assert_eq!(format_score(0.0), "0%");
    }

    #[test]
    fn test_format_energy_sentence() {
        let spans = format_energy_sentence("오늘은 즐거움 85.0%, 휴식 30.5%예요");
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("오늘은 "),
                TextSpan::emphasized("즐거움 85%"),
                TextSpan::plain(", "),
                TextSpan::emphasized("휴식 30.5%"),
                TextSpan::plain("예요"),
            ]
        );
    }

    #[test]
    fn test_sentence_without_figures_is_one_plain_span() {
        assert_eq!(
            format_energy_sentence("마음이 편안해요"),
            vec![TextSpan::plain("마음이 편안해요")]
        );
        assert!(format_energy_sentence("").is_empty());
    }

    #[test]
    fn test_only_ascii_digits_after_a_plain_space_are_emphasized() {
        for text in ["즐거움 ８５%", "즐거움\u{3000}85%", "즐거움\t85%", "즐거움 ٨٥%"] {
            assert_eq!(format_energy_sentence(text), vec![TextSpan::plain(text)]);
        }
    }

    #[test]
    fn test_radar_axes_in_fixed_order() {
        let chart = EnergyChart {
            joyful: 85.0,
            curious: 70.0,
            sparkle: 55.5,
            rest: 30.0,
            spacing_out: 12.0,
        };
        let radar = EnergyRadar::build(&chart, "#E91E63");

        let labels: Vec<&str> = radar.axes.iter().map(|a| a.label).collect();
        assert_eq!(labels, vec!["즐거움", "궁금증", "반짝임", "휴식", "멍때림"]);
        assert_eq!(radar.axes[2].score, 55.5);
        assert_eq!(radar.axes[0].icon, "🌈");
        assert_eq!(radar.stroke_color, "#E91E63");
        assert_eq!(radar.fill_opacity, 0.3);
    }
}
