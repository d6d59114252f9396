//! Domain layer
//! 검증 리포트와 실행 인자 규칙을 외부 의존성 없이 표현한다.

pub mod error;
pub mod invocation;
pub mod report;
pub mod validation;
