//! 애플리케이션 조립(composition root) 모듈.

use crate::application::ports::Reporter;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::validate::ValidateUseCase;
use crate::infrastructure::adapters::{
    CommandValidatorFactory, ConsoleReporter, ConsoleTableRenderer, JsonConfigRepository,
};
use crate::infrastructure::render::ColorMode;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    validator_factory: CommandValidatorFactory,
    renderer: ConsoleTableRenderer,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(ColorMode::detect(false))
    }
}

impl AppComposition {
    /// 컬러 출력 여부를 받아 실행 조합을 생성한다.
    pub fn new(color: ColorMode) -> Self {
        Self {
            config_repo: JsonConfigRepository,
            validator_factory: CommandValidatorFactory,
            renderer: ConsoleTableRenderer::new(color),
            reporter: ConsoleReporter::new(color),
        }
    }

    pub fn reporter(&self) -> &dyn Reporter {
        &self.reporter
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
            reporter: &self.reporter,
        }
    }

    /// 검증 실행 유스케이스를 생성한다.
    pub fn validate_usecase(&self) -> ValidateUseCase<'_> {
        ValidateUseCase {
            config_repo: &self.config_repo,
            validator_factory: &self.validator_factory,
            renderer: &self.renderer,
            reporter: &self.reporter,
        }
    }
}
