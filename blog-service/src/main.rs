use blog_service::config::BlogConfig;
use blog_service::startup::{Application, SERVICE_NAME};
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    let config = BlogConfig::load()?;

    init_tracing(
        SERVICE_NAME,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        bucket = %config.storage.bucket,
        region = %config.aws.region,
        "Starting blog-service"
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await
}
