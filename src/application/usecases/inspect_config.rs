//! 적용 중인 설정과 검증기 명령 가용성을 출력하는 유스케이스.

use crate::application::ports::{ConfigRepository, Reporter};
use crate::domain::error::RunError;

pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub reporter: &'a dyn Reporter,
}

impl<'a> InspectConfigUseCase<'a> {
    /// 병합된 설정 진단 결과를 JSON으로 콘솔에 출력한다.
    pub fn execute(&self) -> Result<(), RunError> {
        let json = self
            .config_repo
            .inspect_pretty_json()
            .map_err(RunError::config)?;
        for line in json.lines() {
            self.reporter.raw(line);
        }
        Ok(())
    }
}
