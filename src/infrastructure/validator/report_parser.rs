//! 검증기 stdout(JSON) 리포트 파서.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::report::{Report, ReportItem};

/// 배열 단독 또는 `{ "items": [...] }` 형태를 모두 허용한다.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReportPayload {
    Items(Vec<ReportItem>),
    Wrapped { items: Vec<ReportItem> },
}

pub fn parse_report(stdout: &str) -> Result<Report> {
    let payload: ReportPayload =
        serde_json::from_str(stdout).context("failed to parse validator report JSON")?;
    let items = match payload {
        ReportPayload::Items(items) => items,
        ReportPayload::Wrapped { items } => items,
    };
    Ok(Report::new(items))
}
