use crate::cli::ServeArgs;
use crate::infra::{self, AppState};
use crate::routes::{self, SiteContext};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use latihan::config::AppConfig;
use latihan::directory::DirectoryService;
use latihan::error::AppError;
use latihan::leads::LeadService;
use latihan::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(infra::build_store(&config)?);
    let directory = Arc::new(DirectoryService::new(store));
    let leads = Arc::new(LeadService::new(infra::build_relay(&config)));
    let site = SiteContext {
        base_url: config.site.base_url.clone(),
        directory: directory.clone(),
    };

    let app = routes::with_service_routes(directory, leads)
        .layer(Extension(app_state))
        .layer(Extension(site))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "training provider directory ready");

    axum::serve(listener, app).await?;
    Ok(())
}
