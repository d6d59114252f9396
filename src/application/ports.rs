//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::report::Report;
use crate::domain::validation::{LoadedDocument, ValidationInputs};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 외부 검증기 연동 포트.
/// 스키마/모델 해석과 판정은 모두 구현체(외부 프로그램) 책임이다.
#[async_trait]
pub trait ValidatorGateway: Send + Sync {
    async fn version(&self) -> Result<String>;
    async fn load_schema(&self, path: &Path) -> Result<LoadedDocument>;
    async fn load_model(&self, path: &Path) -> Result<LoadedDocument>;
    async fn load_product_info(&self, path: &Path) -> Result<LoadedDocument>;
    async fn generate_report(&self, inputs: &ValidationInputs) -> Result<Report>;
}

/// 설정에 맞는 검증기 게이트웨이를 생성하는 팩토리 포트.
pub trait ValidatorFactory: Send + Sync {
    fn build(&self, config: &Config) -> Box<dyn ValidatorGateway>;
}

/// 리포트 표 렌더링 포트.
pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &Report) -> Vec<String>;
}

/// 콘솔 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn welcome(&self, version: &str);
    fn raw(&self, line: &str);
    fn error(&self, message: &str);
}
