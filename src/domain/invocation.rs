//! 실행 인자에서 입력 파일 경로를 추출한다.
//!
//! 상대 경로는 프로세스 작업 디렉터리가 아니라 실행 파일이 위치한 디렉터리를 기준으로 해석한다.

use std::path::{Path, PathBuf};

use super::error::RunError;

pub const MISSING_SCHEMA_MESSAGE: &str = "A schema and 3D model need to be provided as arguments";
pub const MISSING_MODEL_MESSAGE: &str = "A 3D model needs to be provided as the second argument";

/// 경계에서 한 번만 만들어 유스케이스로 전달하는 입력 경로 묶음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    pub schema_path: PathBuf,
    pub model_path: PathBuf,
    pub product_info_path: Option<PathBuf>,
}

impl InvocationArgs {
    /// 실행 파일 경로와 위치 인자로부터 입력 경로를 구성한다.
    /// 스키마 -> 모델 -> 제품정보 순으로 해석하므로 인자가 없으면 스키마 메시지가 나온다.
    pub fn resolve(invocation_path: &str, args: &[String]) -> Result<Self, RunError> {
        let base = resolve_base_path(invocation_path);
        Ok(Self {
            schema_path: resolve_schema_path(base, args)?,
            model_path: resolve_model_path(base, args)?,
            product_info_path: resolve_product_info_path(base, args),
        })
    }
}

/// 마지막 경로 구분자까지 포함한 접두어. 구분자가 없으면 빈 문자열.
pub fn resolve_base_path(invocation_path: &str) -> &str {
    match invocation_path.rfind(['/', '\\']) {
        Some(idx) => &invocation_path[..=idx],
        None => "",
    }
}

pub fn resolve_schema_path(base: &str, args: &[String]) -> Result<PathBuf, RunError> {
    let schema = args
        .first()
        .ok_or_else(|| RunError::MissingArgument(MISSING_SCHEMA_MESSAGE.to_string()))?;
    Ok(join_base(base, schema))
}

pub fn resolve_model_path(base: &str, args: &[String]) -> Result<PathBuf, RunError> {
    let model = args
        .get(1)
        .ok_or_else(|| RunError::MissingArgument(MISSING_MODEL_MESSAGE.to_string()))?;
    Ok(join_base(base, model))
}

/// 선택 인자. 없으면 None이며 실패하지 않는다.
pub fn resolve_product_info_path(base: &str, args: &[String]) -> Option<PathBuf> {
    args.get(2).map(|info| join_base(base, info))
}

fn join_base(base: &str, arg: &str) -> PathBuf {
    // 절대 경로 인자는 접두어를 붙이지 않는다.
    if Path::new(arg).is_absolute() {
        return PathBuf::from(arg);
    }
    PathBuf::from(format!("{base}{arg}"))
}
