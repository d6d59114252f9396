//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "commerce-validator")]
#[command(about = "Validate a 3D model against a 3D commerce schema", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Schema JSON path, relative to this executable's directory
    /// (a file named `config` must be given as `./config`)
    schema: Option<String>,

    /// 3D model path, relative to this executable's directory
    model: Option<String>,

    /// Optional product info JSON path
    product_info: Option<String>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and validator command availability
    Config,
}

/// 위치 인자는 존재 여부만 모은다. 누락 판정은 도메인 인자 해석기가 담당한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOptions {
    pub positionals: Vec<String>,
    pub no_color: bool,
}

pub enum CliAction {
    InspectConfig { no_color: bool },
    Validate(ValidateOptions),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    fn into_action(self) -> CliAction {
        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig {
                no_color: self.no_color,
            },
            None => {
                let positionals = [self.schema, self.model, self.product_info]
                    .into_iter()
                    .flatten()
                    .collect();
                CliAction::Validate(ValidateOptions {
                    positionals,
                    no_color: self.no_color,
                })
            }
        }
    }
}

/// 실행 중인 바이너리 경로. 상대 입력 경로의 기준 디렉터리를 결정한다.
pub fn invocation_path() -> String {
    std::env::current_exe()
        .map(|path| path.display().to_string())
        .ok()
        .or_else(|| std::env::args().next())
        .unwrap_or_default()
}
