//! The assembled result page.

use maeum_core::analysis::AnalysisResponse;
use maeum_core::persona::PersonaId;
use maeum_core::upload::{PreviewHandle, PreviewRegistry, UploadedDrawing};
use rand::Rng;

use super::energy::{EnergyRadar, TextSpan, format_energy_sentence};
use super::keywords::KeywordCloud;
use super::narrative::Narrative;
use super::theme::Theme;

pub const RESULT_HEADING: &str = "마음 분석 결과";
pub const GALLERY_HEADING: &str = "그림";
pub const KEYWORD_HEADING: &str = "마음 키워드";
pub const ENERGY_HEADING: &str = "마음 에너지";
pub const SOLUTION_HEADING: &str = "그림 솔루션";

pub const SOLUTION_GUIDE: &str = "그림 솔루션은 지금의 마음을 환기해 새롭게 바꿔보거나, \n좋은 감정을 더 확장해서 이어가 보는 그림 활동 가이드예요.";

pub const DISCLAIMER_TITLE: &str = "⚠️ 결과가 생각한 것과 다른가요?";
pub const DISCLAIMER_NOTES: [&str; 3] = [
    "같은 그림이라도 바라보는 마음에 따라 달라질 수 있어요.",
    "분석 결과는 정답이 아니라, 마음을 가볍고 즐겁게 이해하기 위한 작은 힌트예요.",
    "앞으로 나의 마음을 소중히 아끼고 돌보며, 더 즐겁게 자라나는 어린이가 되길 응원 할게요!",
];

/// Everything the result page shows, top to bottom.
///
/// The gallery holds live preview handles; they are released when the view
/// is dropped.
#[derive(Debug)]
pub struct ResultView {
    pub theme: Theme,
    pub intro: String,
    pub gallery: Vec<PreviewHandle>,
    pub drawing_names: Vec<String>,
    pub keywords: KeywordCloud,
    pub keyword_commentary: String,
    pub radar: EnergyRadar,
    pub energy_sentence: Vec<TextSpan>,
    pub energy_commentary: String,
    pub solutions: Vec<String>,
}

/// Builds [`ResultView`]s.
pub struct ResultRenderer;

impl ResultRenderer {
    /// Renders `response` for `persona`.
    ///
    /// Fresh previews are created for `drawings`. Keyword order is drawn
    /// from `rng`, so two renders of the same response usually differ.
    pub fn render<R: Rng + ?Sized>(
        response: &AnalysisResponse,
        persona: PersonaId,
        drawings: &[UploadedDrawing],
        registry: &PreviewRegistry,
        rng: &mut R,
    ) -> ResultView {
        let theme = Theme::for_persona(persona);
        let data = &response.analysis_result;
        let narrative = Narrative::from_response(response);

        tracing::debug!(
            persona = %persona,
            drawings = drawings.len(),
            keywords = data.word_cloud.len(),
            sections = response.commentary_sections.len(),
            "Rendering result"
        );

        ResultView {
            radar: EnergyRadar::build(&data.energy_chart, theme.main_color),
            theme,
            intro: narrative.intro,
            gallery: drawings.iter().map(|d| registry.create(d)).collect(),
            drawing_names: drawings.iter().map(|d| d.name.clone()).collect(),
            keywords: KeywordCloud::build(&data.word_cloud, &data.top_5_colors, rng),
            keyword_commentary: narrative.keyword_commentary,
            energy_sentence: format_energy_sentence(&data.persona_energy_sentence),
            energy_commentary: narrative.energy_commentary,
            solutions: narrative.solutions,
        }
    }
}
