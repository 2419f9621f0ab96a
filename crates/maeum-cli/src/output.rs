//! Terminal output: screen copy, persona cards and the result page.

use colored::{ColoredString, Colorize};
use maeum_application::render::{
    DISCLAIMER_NOTES, DISCLAIMER_TITLE, ENERGY_HEADING, FontWeight, GALLERY_HEADING,
    KEYWORD_HEADING, KeywordRow, RESULT_HEADING, RowAlignment, SOLUTION_GUIDE, SOLUTION_HEADING,
    TextSpan, format_score,
};
use maeum_application::{AlertNotifier, ResultView, SessionSnapshot};
use maeum_core::persona::{Persona, PersonaId, catalog};
use maeum_core::upload::{MAX_DRAWINGS, UploadedDrawing};

use crate::input::COMMANDS;

const LANDING_TITLE: &str = "어린이 그림 AI 마음 분석";
const LANDING_LINES: [&str; 3] = [
    "내가 그린 그림들 속에는",
    "나의 기분과 마음이 담겨 있어요.",
    "요즘 나는 어떤 마음일까요?",
];
const UPLOAD_TIPS: [&str; 2] = [
    "최근의 그림일수록 지금의 마음이 더 잘 보여요.",
    "1장부터 4장까지 고를 수 있어요.",
];
const PERSONA_HEADING: &str = "누구와 함께 그림을 분석해 볼까요?";
const LOADING_LINES: [&str; 2] = [
    "나의 그림을 열심히 분석하고 있어요",
    "조금만 기다려 주세요.",
];
const LOADING_NOTE: &str =
    "몇 장의 그림만으로는 나의 마음을 다 알수는 없어요. 가볍게 즐기며 새로운 마음을 만나보세요.";

/// Width of the keyword cloud and the radar bars, in terminal columns.
const CLOUD_WIDTH: usize = 48;
const BAR_WIDTH: usize = 20;

/// Prints alerts to stderr.
pub struct ConsoleNotifier;

impl AlertNotifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{}", format!("⚠ {}", message).red().bold());
    }
}

/// Parses `#RRGGBB`.
pub fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn paint(text: &str, hex: &str) -> ColoredString {
    match hex_rgb(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// Columns taken by `text`; non-ASCII glyphs count double.
pub fn display_width(text: &str) -> usize {
    text.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum()
}

/// Left padding for a keyword row of `word_width` columns.
pub fn row_indent(alignment: RowAlignment, word_width: usize, line_width: usize) -> usize {
    let free = line_width.saturating_sub(word_width);
    let inset = line_width * alignment.inset_percent() as usize / 100;
    match alignment {
        RowAlignment::Start => 0,
        RowAlignment::End => free,
        RowAlignment::Center => free / 2,
        RowAlignment::StartInset => inset.min(free),
        RowAlignment::EndInset => free.saturating_sub(inset),
    }
}

/// Horizontal bar for a 0-100 score.
pub fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn spans_to_string(spans: &[TextSpan]) -> String {
    spans
        .iter()
        .map(|span| {
            if span.emphasized {
                span.text.bold().underline().to_string()
            } else {
                span.text.clone()
            }
        })
        .collect()
}

fn keyword_line(row: &KeywordRow) -> String {
    let indent = row_indent(row.alignment, display_width(&row.word), CLOUD_WIDTH);
    let word = match &row.color {
        Some(color) => paint(&row.word, color),
        None => row.word.normal(),
    };
    let word = match row.size.weight {
        FontWeight::Black | FontWeight::Bold => word.bold(),
        FontWeight::Regular => word,
    };
    format!("{}{}", " ".repeat(indent), word)
}

fn heading(text: &str, color: &str) {
    println!();
    println!("{}", paint(&format!("■ {}", text), color).bold());
}

pub fn print_landing() {
    println!("{}", LANDING_TITLE.bright_magenta().bold());
    for line in LANDING_LINES {
        println!("{}", line.bright_black());
    }
    println!();
}

pub fn print_upload_guide() {
    println!("{}", "그림을 골라 주세요 (/add <path>...)".bright_yellow());
    for tip in UPLOAD_TIPS {
        println!("  {} {}", "✓".bright_blue(), tip);
    }
}

pub fn print_help() {
    for (command, usage) in COMMANDS {
        println!("  {:<10} {}", command.bright_cyan(), usage.bright_black());
    }
}

pub fn print_drawings(drawings: &[UploadedDrawing]) {
    if drawings.is_empty() {
        println!("{}", "아직 고른 그림이 없어요.".bright_black());
        return;
    }
    for (i, drawing) in drawings.iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            drawing.name,
            format!("({}, {} bytes)", drawing.mime_type, drawing.size()).bright_black()
        );
    }
    println!(
        "{}",
        format!("{}/{}", drawings.len(), MAX_DRAWINGS).bright_black()
    );
}

pub fn print_personas(selected: Option<PersonaId>) {
    println!("{}", PERSONA_HEADING.bright_yellow().bold());
    for (i, persona) in catalog().iter().enumerate() {
        let marker = if selected == Some(persona.id) { "✓" } else { " " };
        println!(
            "{} {}. {} {}",
            marker.bold(),
            i + 1,
            paint(persona.name, persona.main_color).bold(),
            persona_tag(persona).bright_black()
        );
        for line in persona.description.lines() {
            println!("     {}", line);
        }
    }
}

/// Key and avatar image shown next to the persona name.
fn persona_tag(persona: &Persona) -> String {
    format!("[{}] {}", persona.key, persona.avatar_path())
}

pub fn print_loading() {
    for line in LOADING_LINES {
        println!("{}", line.bright_blue().bold());
    }
    println!("{}", LOADING_NOTE.bright_black());
}

pub fn print_status(snapshot: &SessionSnapshot) {
    let step = snapshot
        .stage
        .step()
        .map(|n| format!(" (step {}/2)", n))
        .unwrap_or_default();
    println!("stage: {}{}", snapshot.stage.to_string().bold(), step);
    println!("drawings: {}", snapshot.drawing_names.len());
    if let Some(persona) = snapshot.persona {
        println!("persona: {}", persona);
    }
    if snapshot.loading {
        println!("{}", "analysis in progress".bright_black());
    }
}

pub fn print_result(view: &ResultView) {
    let theme = &view.theme;

    println!();
    println!("{}", paint(RESULT_HEADING, theme.main_color).bold());
    println!("{}", theme.subtitle);
    println!("{}", paint(theme.persona_name, theme.main_color));
    if !view.intro.is_empty() {
        println!();
        println!("{}", view.intro);
    }

    heading(GALLERY_HEADING, theme.highlight_color);
    for name in &view.drawing_names {
        println!("  🖼  {}", name);
    }

    heading(KEYWORD_HEADING, theme.highlight_color);
    for row in &view.keywords.rows {
        println!("{}", keyword_line(row));
    }
    if !view.keyword_commentary.is_empty() {
        println!();
        println!("{}", view.keyword_commentary);
    }

    heading(ENERGY_HEADING, theme.highlight_color);
    println!("{}", spans_to_string(&view.energy_sentence));
    for axis in &view.radar.axes {
        println!(
            "  {} {:<4} {} {}",
            axis.icon,
            axis.label,
            paint(&score_bar(axis.score, BAR_WIDTH), view.radar.stroke_color),
            format_score(axis.score)
        );
        for line in axis.description.lines() {
            println!("       {}", line.bright_black());
        }
    }
    if !view.energy_commentary.is_empty() {
        println!();
        println!("{}", view.energy_commentary);
    }

    heading(SOLUTION_HEADING, theme.highlight_color);
    println!("{}", SOLUTION_GUIDE.bright_black());
    for (i, solution) in view.solutions.iter().enumerate() {
        println!();
        println!("{} {}", format!("{}.", i + 1).bold(), solution);
    }

    println!();
    println!("{}", DISCLAIMER_TITLE.bold());
    for note in DISCLAIMER_NOTES {
        println!("  {}", note.bright_black());
    }
    println!();
}
