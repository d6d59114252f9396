//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::utils::command_exists;
use crate::application::config::ValidatorConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub validator: ValidatorConfig,
    pub effective_validator: EffectiveValidator,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveValidator {
    pub command: String,
    pub command_available: bool,
    pub args: Vec<String>,
    pub product_info_args: Vec<String>,
    pub version_args: Vec<String>,
    pub version: Option<String>,
    pub decimal_display_precision: u32,
    pub concurrent_loads: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let spec = loaded.config.validator.command_spec();

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            validator: loaded.config.validator.clone(),
            effective_validator: EffectiveValidator {
                command_available: command_exists(&spec.command),
                command: spec.command,
                args: spec.args,
                product_info_args: spec.product_info_args,
                version_args: spec.version_args,
                version: spec.version,
                decimal_display_precision: spec.decimal_display_precision,
                concurrent_loads: loaded.config.concurrent_loads(),
            },
        }
    }
}
