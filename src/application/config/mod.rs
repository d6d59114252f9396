//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수/프로세스 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_VALIDATOR_COMMAND: &str = "3dc-validator";
pub const DEFAULT_DECIMAL_DISPLAY_PRECISION: u32 = 2;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 외부 검증기 실행 설정
    #[serde(default)]
    pub validator: ValidatorConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ValidatorConfig {
    /// 실행할 검증기 명령
    pub command: Option<String>,
    /// 리포트 생성 인자. `{schema}`, `{model}`, `{precision}` 치환
    pub args: Option<Vec<String>>,
    /// 제품정보가 주어졌을 때만 덧붙이는 인자. `{product_info}` 치환
    pub product_info_args: Option<Vec<String>>,
    /// 버전 조회 인자(기본 `--version`)
    pub version_args: Option<Vec<String>>,
    /// 고정 버전 문자열. 지정 시 버전 조회 명령을 실행하지 않는다
    pub version: Option<String>,
    /// 수치 표시 소수점 자릿수(기본 2)
    pub decimal_display_precision: Option<u32>,
    /// 스키마/모델/제품정보 동시 로딩 여부(기본 false)
    pub concurrent_loads: Option<bool>,
}

/// 정규화된 검증기 실행 사양.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorCommandSpec {
    pub command: String,
    pub args: Vec<String>,
    pub product_info_args: Vec<String>,
    pub version_args: Vec<String>,
    pub version: Option<String>,
    pub decimal_display_precision: u32,
}

impl Config {
    pub fn concurrent_loads(&self) -> bool {
        self.validator.concurrent_loads.unwrap_or(false)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.validator.merge_from(other.validator);
    }
}

impl ValidatorConfig {
    /// 검증기 실행 사양(명령/인자/정밀도)을 정규화한다.
    pub fn command_spec(&self) -> ValidatorCommandSpec {
        ValidatorCommandSpec {
            command: self
                .command
                .clone()
                .unwrap_or_else(|| DEFAULT_VALIDATOR_COMMAND.to_string()),
            args: self
                .args
                .clone()
                .unwrap_or_else(|| {
                    vec![
                        "{schema}".to_string(),
                        "{model}".to_string(),
                        "--precision={precision}".to_string(),
                    ]
                }),
            product_info_args: self
                .product_info_args
                .clone()
                .unwrap_or_else(|| vec!["{product_info}".to_string()]),
            version_args: self
                .version_args
                .clone()
                .unwrap_or_else(|| vec!["--version".to_string()]),
            version: self.version.clone(),
            decimal_display_precision: self
                .decimal_display_precision
                .unwrap_or(DEFAULT_DECIMAL_DISPLAY_PRECISION),
        }
    }

    pub fn merge_from(&mut self, other: ValidatorConfig) {
        if other.command.is_some() {
            self.command = other.command;
        }
        if other.args.is_some() {
            self.args = other.args;
        }
        if other.product_info_args.is_some() {
            self.product_info_args = other.product_info_args;
        }
        if other.version_args.is_some() {
            self.version_args = other.version_args;
        }
        if other.version.is_some() {
            self.version = other.version;
        }
        if other.decimal_display_precision.is_some() {
            self.decimal_display_precision = other.decimal_display_precision;
        }
        if other.concurrent_loads.is_some() {
            self.concurrent_loads = other.concurrent_loads;
        }
    }
}
