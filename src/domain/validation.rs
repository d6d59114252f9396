//! 외부 검증기에 전달되는 입력 값 객체.

use std::path::PathBuf;

/// 로딩이 끝난 입력 파일.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// 리포트 생성에 필요한 로딩 결과 묶음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationInputs {
    pub schema: LoadedDocument,
    pub model: LoadedDocument,
    pub product_info: Option<LoadedDocument>,
}
