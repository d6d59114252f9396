//! 실행 실패 분류.

/// 실행 중 발생하는 모든 실패. 모든 변형이 출력용 메시지를 가진다.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    /// 필수 위치 인자 누락
    #[error("{0}")]
    MissingArgument(String),

    /// 외부 검증기(스키마/모델/제품정보 로딩, 리포트 생성) 실패
    #[error("{0}")]
    Collaborator(String),

    /// 설정 파일 읽기/파싱 실패
    #[error("{0}")]
    Config(String),
}

impl RunError {
    /// anyhow 오류 체인을 외부 검증기 실패로 감싼다.
    pub fn collaborator(err: anyhow::Error) -> Self {
        Self::Collaborator(format!("{err:#}"))
    }

    pub fn config(err: anyhow::Error) -> Self {
        Self::Config(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_is_passed_through_verbatim() {
        let err = RunError::MissingArgument("A 3D model needs to be provided as the second argument".into());
        assert_eq!(
            err.to_string(),
            "A 3D model needs to be provided as the second argument"
        );
    }

    #[test]
    fn collaborator_keeps_context_chain() {
        let inner = anyhow::anyhow!("file not found").context("failed to load schema");
        let err = RunError::collaborator(inner);
        assert_eq!(err.to_string(), "failed to load schema: file not found");
    }
}
