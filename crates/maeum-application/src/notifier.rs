//! User-facing alerts.

/// Message shown when the analysis request fails.
pub const ANALYSIS_FAILED_ALERT: &str = "분석 실패! 서버 연결을 확인해주세요.";

/// Shows a blocking notification to the user.
pub trait AlertNotifier: Send + Sync {
    fn alert(&self, message: &str);
}
