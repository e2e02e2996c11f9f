//! Quote-request intake: validate the submission, acknowledge the caller,
//! and relay a normalized envelope to the operator's webhook. The
//! acknowledgment means "accepted for processing", not "delivered" — relay
//! failures are logged and never change the caller-visible outcome.

pub mod relay;

pub use relay::{HttpWebhookRelay, NoopRelay, RelayError, WebhookRelay};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Basic shape check: local part, '@', domain with at least one dot.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

/// Incoming quote request. Field names mirror the public form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub training_type: String,
    pub participants: String,
    pub budget: String,
    pub hrdf_required: bool,
    pub details: Option<String>,
    pub preferred_provider: Option<String>,
}

impl QuoteRequest {
    /// Required fields in form order, paired with their public names.
    fn required_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("companyName", &self.company_name),
            ("contactPerson", &self.contact_person),
            ("email", &self.email),
            ("phone", &self.phone),
            ("trainingType", &self.training_type),
            ("participants", &self.participants),
            ("budget", &self.budget),
        ]
    }

    pub fn validate(&self) -> Result<(), LeadValidationError> {
        for (name, value) in self.required_fields() {
            if value.trim().is_empty() {
                return Err(LeadValidationError::MissingField(name));
            }
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(LeadValidationError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LeadValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
}

/// Normalized payload forwarded to the webhook.
#[derive(Debug, Clone, Serialize)]
pub struct LeadEnvelope {
    pub lead_type: String,
    pub timestamp: String,
    pub source: String,
    pub data: serde_json::Value,
}

impl LeadEnvelope {
    pub fn quote_request(request: &QuoteRequest) -> Self {
        Self {
            lead_type: "quote_request".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            source: "hrdf-training-directory".to_string(),
            data: json!({
                "company_name": request.company_name.trim(),
                "contact_person": request.contact_person.trim(),
                "email": request.email.trim(),
                "phone": request.phone.trim(),
                "training_type": request.training_type.trim(),
                "participants": request.participants.trim(),
                "budget": request.budget.trim(),
                "hrdf_required": request.hrdf_required,
                "details": request.details.as_deref().unwrap_or("").trim(),
                "preferred_provider": request.preferred_provider.as_deref().unwrap_or("").trim(),
            }),
        }
    }
}

/// Returned to the caller once a submission passes validation.
#[derive(Debug, Clone, Serialize)]
pub struct LeadReceipt {
    pub success: bool,
    pub message: String,
}

/// Intake service: validation, envelope construction, single relay attempt.
pub struct LeadService {
    relay: Arc<dyn WebhookRelay>,
}

impl LeadService {
    pub fn new(relay: Arc<dyn WebhookRelay>) -> Self {
        Self { relay }
    }

    pub async fn submit(&self, request: QuoteRequest) -> Result<LeadReceipt, LeadValidationError> {
        request.validate()?;

        let envelope = LeadEnvelope::quote_request(&request);
        match self.relay.relay(&envelope).await {
            Ok(()) => info!(company = %request.company_name.trim(), "quote request relayed"),
            // a duplicate or lost notification is acceptable; the lead is
            // acknowledged either way
            Err(err) => warn!(error = %err, "quote request relay failed"),
        }

        Ok(LeadReceipt {
            success: true,
            message: "Your quote request has been received. Matching providers will contact you shortly.".to_string(),
        })
    }
}

/// Router builder for the lead-capture endpoint.
pub fn lead_router(service: Arc<LeadService>) -> Router {
    Router::new()
        .route("/api/v1/leads/quote", post(quote_handler))
        .with_state(service)
}

async fn quote_handler(
    State(service): State<Arc<LeadService>>,
    Json(request): Json<QuoteRequest>,
) -> Response {
    match service.submit(request).await {
        Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn valid_request() -> QuoteRequest {
        QuoteRequest {
            company_name: "Selaras Engineering Sdn Bhd".to_string(),
            contact_person: "Aisyah Rahman".to_string(),
            email: "aisyah@selaras.com.my".to_string(),
            phone: "+60 12-345 6789".to_string(),
            training_type: "Leadership & Management".to_string(),
            participants: "25-50".to_string(),
            budget: "RM20,000 - RM50,000".to_string(),
            hrdf_required: true,
            details: Some("Two-day offsite for middle managers".to_string()),
            preferred_provider: None,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn each_blank_required_field_is_named() {
        let blank: [(&str, fn(&mut QuoteRequest)); 7] = [
            ("companyName", |r| r.company_name.clear()),
            ("contactPerson", |r| r.contact_person.clear()),
            ("email", |r| r.email.clear()),
            ("phone", |r| r.phone.clear()),
            ("trainingType", |r| r.training_type.clear()),
            ("participants", |r| r.participants = "  ".to_string()),
            ("budget", |r| r.budget.clear()),
        ];

        for (field, blank_out) in blank {
            let mut request = valid_request();
            blank_out(&mut request);
            assert_eq!(
                request.validate(),
                Err(LeadValidationError::MissingField(field))
            );
        }
    }

    #[test]
    fn email_without_tld_segment_is_rejected() {
        let mut request = valid_request();
        request.email = "a@b".to_string();
        assert_eq!(request.validate(), Err(LeadValidationError::InvalidEmail));
    }

    #[test]
    fn email_with_spaces_is_rejected() {
        let mut request = valid_request();
        request.email = "aisyah rahman@selaras.com.my".to_string();
        assert_eq!(request.validate(), Err(LeadValidationError::InvalidEmail));
    }

    #[test]
    fn envelope_normalizes_and_stamps_the_lead() {
        let envelope = LeadEnvelope::quote_request(&valid_request());
        assert_eq!(envelope.lead_type, "quote_request");
        assert_eq!(envelope.source, "hrdf-training-directory");
        assert_eq!(
            envelope.data["company_name"],
            "Selaras Engineering Sdn Bhd"
        );
        assert_eq!(envelope.data["hrdf_required"], true);
        assert_eq!(envelope.data["preferred_provider"], "");
    }
}
