//! 검증 리포트 도메인 엔티티.

use serde::{Deserialize, Serialize};

/// 이름이 붙은 단일 검사 결과.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportItem {
    pub name: String,
    /// 검사 수행 여부(미지정 시 true)
    #[serde(default = "default_tested")]
    pub tested: bool,
    /// `tested`가 true일 때만 의미가 있다.
    #[serde(default)]
    pub pass: bool,
    #[serde(default)]
    pub message: String,
}

fn default_tested() -> bool {
    true
}

impl ReportItem {
    pub fn new(name: impl Into<String>, tested: bool, pass: bool, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tested,
            pass,
            message: message.into(),
        }
    }

    /// 문자 수 기준 이름 길이.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    pub fn status(&self) -> ItemStatus {
        match (self.tested, self.pass) {
            (false, _) => ItemStatus::NotTested,
            (true, true) => ItemStatus::Pass,
            (true, false) => ItemStatus::Fail,
        }
    }
}

/// 항목 판정 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Pass,
    Fail,
    NotTested,
}

impl ItemStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::NotTested => "NOT TESTED",
        }
    }
}

/// 표시 순서가 보존되는 검사 결과 목록.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    items: Vec<ReportItem>,
}

impl Report {
    pub fn new(items: Vec<ReportItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ReportItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 정렬 기준이 되는 가장 긴 이름 길이(문자 수). 빈 리포트는 0.
    pub fn longest_name_len(&self) -> usize {
        self.items
            .iter()
            .map(ReportItem::name_len)
            .max()
            .unwrap_or(0)
    }

    pub fn has_untested(&self) -> bool {
        self.items.iter().any(|item| !item.tested)
    }
}
