//! 검증기 팩토리 포트 구현 어댑터.

use crate::application::config::Config;
use crate::application::ports::{ValidatorFactory, ValidatorGateway};
use crate::infrastructure::validator::CommandValidator;

/// 설정된 외부 명령 기반 검증기를 생성한다.
pub struct CommandValidatorFactory;

impl ValidatorFactory for CommandValidatorFactory {
    fn build(&self, config: &Config) -> Box<dyn ValidatorGateway> {
        Box::new(CommandValidator::from_config(config))
    }
}
