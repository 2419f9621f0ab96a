//! Persona commentary split into the sections of the result page.

use maeum_core::analysis::AnalysisResponse;
use serde::Serialize;

/// Commentary sections by role. The backend's order decides the role:
/// 0 intro, 1 keywords, 2 energy, 3.. solutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Narrative {
    pub intro: String,
    pub keyword_commentary: String,
    pub energy_commentary: String,
    pub solutions: Vec<String>,
}

impl Narrative {
    pub fn from_response(response: &AnalysisResponse) -> Self {
        Self {
            intro: response.section_content(0).to_string(),
            keyword_commentary: response.section_content(1).to_string(),
            energy_commentary: response.section_content(2).to_string(),
            solutions: response
                .commentary_sections
                .iter()
                .skip(3)
                .map(|section| section.content.clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use maeum_core::analysis::{AnalysisData, CommentarySection, EnergyChart};

    use super::*;

    fn response_with_sections(contents: &[&str]) -> AnalysisResponse {
        AnalysisResponse {
            analysis_result: AnalysisData {
                mind_expression: String::new(),
                persona_mind_sentence: String::new(),
                persona_energy_sentence: String::new(),
                word_cloud: Vec::new(),
                top_5_colors: Vec::new(),
                energy_chart: EnergyChart::default(),
            },
            character_commentary: String::new(),
            commentary_sections: contents
                .iter()
                .enumerate()
                .map(|(i, content)| CommentarySection {
                    title: format!("section {}", i),
                    content: content.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_sections_take_roles_by_position() {
        let response = response_with_sections(&["안녕", "키워드", "에너지", "하나", "둘"]);
        let narrative = Narrative::from_response(&response);

        assert_eq!(narrative.intro, "안녕");
        assert_eq!(narrative.keyword_commentary, "키워드");
        assert_eq!(narrative.energy_commentary, "에너지");
        assert_eq!(narrative.solutions, vec!["하나", "둘"]);
    }

    #[test]
    fn test_missing_sections_read_as_empty() {
        let narrative = Narrative::from_response(&response_with_sections(&["안녕"]));

        assert_eq!(narrative.intro, "안녕");
        assert_eq!(narrative.keyword_commentary, "");
        assert_eq!(narrative.energy_commentary, "");
        assert!(narrative.solutions.is_empty());
    }
}
