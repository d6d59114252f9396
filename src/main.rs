//! `commerce-validator` 바이너리 진입점.

use commerce_validator::infrastructure::render::ColorMode;
use commerce_validator::interface::cli::{AppComposition, Cli, CliAction};
use commerce_validator::run_with;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    match Cli::parse_action() {
        CliAction::InspectConfig { no_color } => {
            let composition = AppComposition::new(ColorMode::detect(no_color));
            if let Err(err) = composition.inspect_config_usecase().execute() {
                composition.reporter().error(&err.to_string());
                std::process::exit(1);
            }
        }
        CliAction::Validate(options) => {
            let composition = AppComposition::new(ColorMode::detect(options.no_color));
            if let Err(err) = run_with(&composition, &options).await {
                tracing::debug!(?err, "validation run failed");
                composition.reporter().error(&err.to_string());
                std::process::exit(1);
            }
        }
    }
}
