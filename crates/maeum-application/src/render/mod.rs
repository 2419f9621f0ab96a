//! Result rendering.
//!
//! Turns an [`AnalysisResponse`](maeum_core::analysis::AnalysisResponse) and
//! the chosen persona into a [`ResultView`]: a render-ready description of
//! every section of the result page. Nothing here draws pixels.

mod energy;
mod keywords;
mod narrative;
mod theme;
mod view;

pub use energy::{
    EnergyRadar, RadarAxis, TextSpan, emphasize_energy_figures, format_energy_sentence,
    format_score, strip_trailing_zero_percent,
};
pub use keywords::{FontWeight, KeywordCloud, KeywordRow, KeywordSize, RowAlignment};
pub use narrative::Narrative;
pub use theme::Theme;
pub use view::{
    DISCLAIMER_NOTES, DISCLAIMER_TITLE, ENERGY_HEADING, GALLERY_HEADING, KEYWORD_HEADING,
    RESULT_HEADING, ResultRenderer, ResultView, SOLUTION_GUIDE, SOLUTION_HEADING,
};
