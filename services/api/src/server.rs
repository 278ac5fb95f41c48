use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_application_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use placement_copilot::config::{AppConfig, ConfigError};
use placement_copilot::error::AppError;
use placement_copilot::evaluation::CandidateEvaluator;
use placement_copilot::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(dir) = args.ui_dir.take() {
        if !dir.is_dir() {
            return Err(ConfigError::MissingUiBundle { path: dir }.into());
        }
        config.ui.bundle_dir = Some(dir);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        ui_bundle: config.ui.bundle_dir.clone().map(Arc::new),
    };

    match &config.ui.bundle_dir {
        Some(dir) => info!(bundle = %dir.display(), "serving web UI bundle"),
        None => warn!("no web UI bundle found; serving API routes only"),
    }

    let evaluator = Arc::new(CandidateEvaluator::standard());
    let app = with_application_routes(evaluator)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "placement copilot ready");

    axum::serve(listener, app).await?;
    Ok(())
}
