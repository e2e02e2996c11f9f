use latihan::config::AppConfig;
use latihan::directory::{dataset, InMemoryProviderStore};
use latihan::error::AppError;
use latihan::leads::{HttpWebhookRelay, NoopRelay, WebhookRelay};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the provider dataset named in the config. An unset path serves an
/// empty directory rather than failing; an unreadable or malformed file is a
/// deployment mistake and aborts startup.
pub(crate) fn build_store(config: &AppConfig) -> Result<InMemoryProviderStore, AppError> {
    match &config.dataset.providers_csv {
        Some(path) => {
            let providers = dataset::load_path(path)?;
            info!(
                count = providers.len(),
                path = %path.display(),
                "provider dataset loaded"
            );
            Ok(InMemoryProviderStore::new(providers))
        }
        None => {
            warn!("APP_PROVIDERS_CSV not set, serving an empty directory");
            Ok(InMemoryProviderStore::default())
        }
    }
}

pub(crate) fn build_relay(config: &AppConfig) -> Arc<dyn WebhookRelay> {
    match config.leads.webhook_endpoint() {
        Some(endpoint) => {
            info!(endpoint, "lead webhook configured");
            Arc::new(HttpWebhookRelay::new(endpoint))
        }
        None => Arc::new(NoopRelay),
    }
}
