//! 검증 리포트 콘솔 표 렌더링 모듈.

use std::io::{self, IsTerminal};

use crossterm::style::{Color, Stylize};

use crate::domain::report::{ItemStatus, Report, ReportItem};

pub const REPORT_HEADER: &str = "==== Validation Report ====";
pub const REPORT_FOOTER: &str = "===========================";

/// "NOT TESTED"와 "PASS"/"FAIL"의 길이 차이.
const STATUS_PADDING: &str = "      ";

/// ANSI 컬러 출력 여부.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    Never,
}

impl ColorMode {
    /// `--no-color`, `NO_COLOR`, 비터미널 stdout 중 하나라도 해당하면 컬러를 끈다.
    pub fn detect(no_color_flag: bool) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_color_flag || no_color_env || !io::stdout().is_terminal() {
            Self::Never
        } else {
            Self::Always
        }
    }

    pub fn paint(self, text: &str, color: Color) -> String {
        match self {
            Self::Always => text.with(color).to_string(),
            Self::Never => text.to_string(),
        }
    }
}

/// 배너를 포함한 리포트 전체 줄 목록을 생성한다.
/// 이름 길이는 모든 항목을 본 뒤 결정되므로 항목 목록 전체가 필요하다.
pub fn render_report_lines(report: &Report, color: ColorMode) -> Vec<String> {
    let longest = report.longest_name_len();
    let has_untested = report.has_untested();

    let mut lines = Vec::with_capacity(report.items().len() + 2);
    lines.push(color.paint(REPORT_HEADER, Color::Magenta));
    for item in report.items() {
        lines.push(render_item_line(item, longest, has_untested, color));
    }
    lines.push(color.paint(REPORT_FOOTER, Color::Magenta));
    lines
}

/// 한 항목을 `<이름>: <상태> | <메시지>` 형태로 정렬해 만든다.
pub fn render_item_line(
    item: &ReportItem,
    longest_name_len: usize,
    has_untested: bool,
    color: ColorMode,
) -> String {
    let pad = longest_name_len.saturating_sub(item.name_len());
    let status = item.status();

    let mut token = status.label().to_string();
    if has_untested && status != ItemStatus::NotTested {
        token.push_str(STATUS_PADDING);
    }
    let token_color = match status {
        ItemStatus::Pass => Color::Green,
        ItemStatus::Fail => Color::Red,
        ItemStatus::NotTested => Color::DarkGrey,
    };

    format!(
        "{}{}: {} | {}",
        " ".repeat(pad),
        item.name,
        color.paint(&token, token_color),
        color.paint(&item.message, Color::DarkGrey)
    )
}
