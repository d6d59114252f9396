//! 입력 파일 로더.
//! 파일이 존재하고 비어 있지 않은지, JSON 입력은 구문이 올바른지만 확인한다.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::domain::validation::LoadedDocument;

/// 입력 파일 종류. 오류 메시지 표기에 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Schema,
    Model,
    ProductInfo,
}

impl DocumentKind {
    fn label(self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Model => "3D model",
            Self::ProductInfo => "product info",
        }
    }

    fn expects_json(self) -> bool {
        !matches!(self, Self::Model)
    }
}

pub async fn load_document(kind: DocumentKind, path: &Path) -> Result<LoadedDocument> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {} file at {}", kind.label(), path.display()))?;

    if bytes.is_empty() {
        bail!("{} file at {} is empty", kind.label(), path.display());
    }

    if kind.expects_json() {
        serde_json::from_slice::<serde_json::Value>(&bytes).with_context(|| {
            format!("failed to parse {} JSON in {}", kind.label(), path.display())
        })?;
    }

    Ok(LoadedDocument {
        path: path.to_path_buf(),
        size_bytes: bytes.len() as u64,
    })
}
