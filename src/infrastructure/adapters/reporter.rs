//! 콘솔 리포터 포트 구현 어댑터.

use crossterm::style::Color;

use crate::application::ports::Reporter;
use crate::infrastructure::render::ColorMode;

pub const WELCOME_TITLE: &str = "-- 3D COMMERCE VALIDATOR --";

/// stdout 전용 리포터 어댑터.
pub struct ConsoleReporter {
    color: ColorMode,
}

impl ConsoleReporter {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// 시작 배너 두 줄을 만든다.
    pub fn welcome_lines(&self, version: &str) -> [String; 2] {
        [
            self.color.paint(WELCOME_TITLE, Color::Green),
            self.color
                .paint(&format!("* Version: {version}"), Color::Yellow),
        ]
    }

    pub fn error_line(&self, message: &str) -> String {
        self.color.paint(&format!("ERROR: {message}"), Color::Red)
    }
}

impl Reporter for ConsoleReporter {
    fn welcome(&self, version: &str) {
        for line in self.welcome_lines(version) {
            println!("{line}");
        }
    }

    fn raw(&self, line: &str) {
        println!("{line}");
    }

    fn error(&self, message: &str) {
        println!("{}", self.error_line(message));
    }
}
