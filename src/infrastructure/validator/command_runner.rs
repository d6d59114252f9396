//! 외부 검증기 CLI 실행기.

use std::process::Stdio;

use anyhow::{Context, Result, bail};
use tokio::process::Command;
use tracing::debug;

/// 인자 템플릿의 `{name}` 자리표시자를 치환한다.
pub fn substitute_args(template: &[String], vars: &[(&str, &str)]) -> Vec<String> {
    template
        .iter()
        .map(|arg| {
            vars.iter().fold(arg.clone(), |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            })
        })
        .collect()
}

/// 검증기 명령을 실행하고 stdout을 반환한다.
/// 비정상 종료 시 stderr를 오류 메시지에 포함한다.
pub async fn run_validator_command(command: &str, args: &[String]) -> Result<String> {
    debug!(command, ?args, "running validator command");

    let output = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .with_context(|| format!("failed to spawn validator command '{command}'"))?;

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    if !output.status.success() {
        bail!(
            "validator command failed ({}): {}",
            output.status,
            if stderr.is_empty() {
                "no stderr output"
            } else {
                stderr.as_str()
            }
        );
    }

    if stdout.is_empty() {
        bail!("validator command '{command}' returned empty output");
    }

    Ok(stdout)
}
