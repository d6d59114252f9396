//! commerce-validator library root.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::error::RunError;
use domain::invocation::InvocationArgs;
use domain::report::Report;
use infrastructure::render::ColorMode;
use interface::cli::{AppComposition, ValidateOptions, invocation_path};

/// 라이브러리 직접 호출용 실행 함수.
pub async fn run(options: ValidateOptions) -> Result<Report, RunError> {
    let composition = AppComposition::new(ColorMode::detect(options.no_color));
    run_with(&composition, &options).await
}

/// 인자 해석 후 검증 유스케이스를 실행한다.
/// 인자가 부족하면 외부 검증기나 파일에 접근하기 전에 실패한다.
/// 이때는 시작 배너(`-- 3D COMMERCE VALIDATOR --`)도 출력되지 않고 `ERROR:` 줄만 남는다.
/// 버전 조회가 검증기 실행을 필요로 하므로 배너는 인자 확인 이후로 미룬다.
pub async fn run_with(
    composition: &AppComposition,
    options: &ValidateOptions,
) -> Result<Report, RunError> {
    let args = InvocationArgs::resolve(&invocation_path(), &options.positionals)?;
    composition.validate_usecase().execute(args).await
}
