//! 스키마/모델/제품정보 로딩부터 리포트 출력까지의 검증 실행 유스케이스.

use tracing::debug;

use crate::application::ports::{
    ConfigRepository, ReportRenderer, Reporter, ValidatorFactory, ValidatorGateway,
};
use crate::domain::error::RunError;
use crate::domain::invocation::InvocationArgs;
use crate::domain::report::Report;
use crate::domain::validation::ValidationInputs;

/// 입력 로딩, 리포트 생성, 표 출력 흐름을 조율한다.
pub struct ValidateUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub validator_factory: &'a dyn ValidatorFactory,
    pub renderer: &'a dyn ReportRenderer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ValidateUseCase<'a> {
    /// 검증 본 실행 진입점.
    /// 각 단계는 순서대로 한 번만 수행되며, 실패 시 즉시 중단한다(부분 리포트 없음).
    pub async fn execute(&self, args: InvocationArgs) -> Result<Report, RunError> {
        debug!(state = "ArgsResolved", ?args);

        let config = self.config_repo.load().map_err(RunError::config)?;
        let validator = self.validator_factory.build(&config);

        let version = validator.version().await.map_err(RunError::collaborator)?;
        self.reporter.welcome(&version);

        let loaded = if config.concurrent_loads() {
            load_concurrently(validator.as_ref(), &args).await
        } else {
            load_sequentially(validator.as_ref(), &args).await
        };
        let inputs = loaded.map_err(RunError::collaborator)?;

        let report = validator
            .generate_report(&inputs)
            .await
            .map_err(RunError::collaborator)?;
        debug!(state = "ReportGenerated", items = report.items().len());

        for line in self.renderer.render(&report) {
            self.reporter.raw(&line);
        }
        debug!(state = "Rendered");

        Ok(report)
    }
}

async fn load_sequentially(
    validator: &dyn ValidatorGateway,
    args: &InvocationArgs,
) -> anyhow::Result<ValidationInputs> {
    let schema = validator.load_schema(&args.schema_path).await?;
    debug!(
        state = "SchemaLoaded",
        path = %schema.path.display(),
        bytes = schema.size_bytes
    );

    let model = validator.load_model(&args.model_path).await?;
    debug!(
        state = "ModelLoaded",
        path = %model.path.display(),
        bytes = model.size_bytes
    );

    let product_info = match &args.product_info_path {
        Some(path) => {
            let info = validator.load_product_info(path).await?;
            debug!(
                state = "ProductInfoLoaded",
                path = %info.path.display(),
                bytes = info.size_bytes
            );
            Some(info)
        }
        None => None,
    };

    Ok(ValidationInputs {
        schema,
        model,
        product_info,
    })
}

async fn load_concurrently(
    validator: &dyn ValidatorGateway,
    args: &InvocationArgs,
) -> anyhow::Result<ValidationInputs> {
    let product_info = async {
        match &args.product_info_path {
            Some(path) => validator.load_product_info(path).await.map(Some),
            None => Ok(None),
        }
    };

    let (schema, model, product_info) = futures::try_join!(
        validator.load_schema(&args.schema_path),
        validator.load_model(&args.model_path),
        product_info,
    )?;
    debug!(
        state = "InputsLoaded",
        schema_bytes = schema.size_bytes,
        model_bytes = model.size_bytes,
        product_info_bytes = product_info.as_ref().map(|info| info.size_bytes)
    );

    Ok(ValidationInputs {
        schema,
        model,
        product_info,
    })
}
