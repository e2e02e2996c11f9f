use super::LeadEnvelope;
use async_trait::async_trait;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook responded with status {0}")]
    Status(u16),
}

/// Outbound boundary for lead notifications. One delivery attempt per lead;
/// the caller decides what a failure means.
#[async_trait]
pub trait WebhookRelay: Send + Sync {
    async fn relay(&self, envelope: &LeadEnvelope) -> Result<(), RelayError>;
}

/// POSTs the envelope as JSON to the configured webhook endpoint.
pub struct HttpWebhookRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpWebhookRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl WebhookRelay for HttpWebhookRelay {
    async fn relay(&self, envelope: &LeadEnvelope) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Status(status.as_u16()))
        }
    }
}

/// Used when no webhook endpoint is configured; accepts every envelope.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRelay;

#[async_trait]
impl WebhookRelay for NoopRelay {
    async fn relay(&self, envelope: &LeadEnvelope) -> Result<(), RelayError> {
        debug!(lead_type = %envelope.lead_type, "no webhook configured, lead not relayed");
        Ok(())
    }
}
