//! 리포트 렌더링 포트 구현 어댑터.

use crate::application::ports::ReportRenderer;
use crate::domain::report::Report;
use crate::infrastructure::render::{self, ColorMode};

/// 정렬/컬러 콘솔 표 렌더러.
pub struct ConsoleTableRenderer {
    color: ColorMode,
}

impl ConsoleTableRenderer {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }
}

impl ReportRenderer for ConsoleTableRenderer {
    fn render(&self, report: &Report) -> Vec<String> {
        render::render_report_lines(report, self.color)
    }
}
