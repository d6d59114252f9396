//! 외부 검증기 프로그램 연동 모듈.
//! 입력 파일을 확인한 뒤 검증기 CLI를 호출하고 JSON 리포트를 도메인 리포트로 변환한다.

mod command_runner;
mod document_loader;
mod report_parser;

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::application::config::{Config, ValidatorCommandSpec};
use crate::application::ports::ValidatorGateway;
use crate::domain::report::Report;
use crate::domain::validation::{LoadedDocument, ValidationInputs};

pub use command_runner::{run_validator_command, substitute_args};
pub use document_loader::{DocumentKind, load_document};
pub use report_parser::parse_report;

/// 설정된 명령을 자식 프로세스로 실행하는 검증기 게이트웨이.
pub struct CommandValidator {
    spec: ValidatorCommandSpec,
}

impl CommandValidator {
    pub fn new(spec: ValidatorCommandSpec) -> Self {
        Self { spec }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.validator.command_spec())
    }

    /// 리포트 생성 명령의 최종 인자 목록을 만든다.
    /// 제품정보 인자는 제품정보가 로딩된 경우에만 덧붙인다.
    pub fn report_args(&self, inputs: &ValidationInputs) -> Vec<String> {
        let schema = inputs.schema.path.display().to_string();
        let model = inputs.model.path.display().to_string();
        let precision = self.spec.decimal_display_precision.to_string();

        let mut args = substitute_args(
            &self.spec.args,
            &[
                ("schema", schema.as_str()),
                ("model", model.as_str()),
                ("precision", precision.as_str()),
            ],
        );

        if let Some(info) = &inputs.product_info {
            let product_info = info.path.display().to_string();
            args.extend(substitute_args(
                &self.spec.product_info_args,
                &[
                    ("product_info", product_info.as_str()),
                    ("schema", schema.as_str()),
                    ("model", model.as_str()),
                    ("precision", precision.as_str()),
                ],
            ));
        }

        args
    }
}

#[async_trait]
impl ValidatorGateway for CommandValidator {
    async fn version(&self) -> Result<String> {
        if let Some(version) = &self.spec.version {
            return Ok(version.clone());
        }
        run_validator_command(&self.spec.command, &self.spec.version_args)
            .await
            .context("failed to query validator version")
    }

    async fn load_schema(&self, path: &Path) -> Result<LoadedDocument> {
        load_document(DocumentKind::Schema, path).await
    }

    async fn load_model(&self, path: &Path) -> Result<LoadedDocument> {
        load_document(DocumentKind::Model, path).await
    }

    async fn load_product_info(&self, path: &Path) -> Result<LoadedDocument> {
        load_document(DocumentKind::ProductInfo, path).await
    }

    async fn generate_report(&self, inputs: &ValidationInputs) -> Result<Report> {
        let args = self.report_args(inputs);
        let stdout = run_validator_command(&self.spec.command, &args).await?;
        parse_report(&stdout)
    }
}
