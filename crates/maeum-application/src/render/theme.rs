use maeum_core::persona::PersonaId;
use serde::Serialize;

/// Persona-specific colors and artwork for the result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub persona: PersonaId,
    pub persona_name: &'static str,
    /// Page background
    pub background: &'static str,
    /// Radar stroke/fill and decorations
    pub main_color: &'static str,
    /// Heading underline and guide text
    pub highlight_color: &'static str,
    pub subtitle: &'static str,
    pub half_image: String,
    pub side_image: String,
}

impl Theme {
    pub fn for_persona(id: PersonaId) -> Self {
        let persona = id.persona();
        Self {
            persona: id,
            persona_name: persona.name,
            background: persona.result_background(),
            main_color: persona.main_color,
            highlight_color: persona.highlight_color,
            subtitle: persona.result_subtitle,
            half_image: persona.half_image_path(),
            side_image: persona.side_image_path(),
        }
    }
}
