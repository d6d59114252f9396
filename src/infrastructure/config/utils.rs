//! 설정 모듈 공용 유틸리티.

use std::env;
use std::path::Path;

/// 검증기 명령이 실행 가능한 위치에 있는지 탐지한다.
pub fn command_exists(command: &str) -> bool {
    let command = command.trim();
    if command.is_empty() {
        return false;
    }

    // 경로 형태로 주어지면 해당 파일만 확인한다.
    let command_path = Path::new(command);
    if command_path.components().count() > 1 {
        return command_path.is_file();
    }

    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&path_var).any(|dir| {
        candidate_names(command)
            .iter()
            .any(|name| dir.join(name).is_file())
    })
}

#[cfg(windows)]
fn candidate_names(command: &str) -> Vec<String> {
    if Path::new(command).extension().is_some() {
        return vec![command.to_string()];
    }
    let pathext = env::var_os("PATHEXT").unwrap_or_else(|| ".EXE;.CMD;.BAT;.COM".into());
    let mut names = vec![command.to_string()];
    names.extend(
        pathext
            .to_string_lossy()
            .split(';')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!("{command}{ext}")),
    );
    names
}

#[cfg(not(windows))]
fn candidate_names(command: &str) -> Vec<String> {
    vec![command.to_string()]
}
