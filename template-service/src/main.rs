use service_core::observability::init_tracing;
use template_service::config::TemplateConfig;
use template_service::startup::{Application, SERVICE_NAME};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = TemplateConfig::load()?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        model = %config.model.model_id,
        bucket = %config.storage.bucket,
        "Starting template-service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await
}
