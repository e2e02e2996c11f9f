use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use latihan::leads::{
    lead_router, LeadEnvelope, LeadService, RelayError, WebhookRelay,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

#[derive(Default)]
struct RecordingRelay {
    envelopes: Mutex<Vec<LeadEnvelope>>,
}

#[async_trait]
impl WebhookRelay for RecordingRelay {
    async fn relay(&self, envelope: &LeadEnvelope) -> Result<(), RelayError> {
        self.envelopes
            .lock()
            .expect("relay mutex poisoned")
            .push(envelope.clone());
        Ok(())
    }
}

struct FailingRelay;

#[async_trait]
impl WebhookRelay for FailingRelay {
    async fn relay(&self, _envelope: &LeadEnvelope) -> Result<(), RelayError> {
        Err(RelayError::Status(502))
    }
}

fn quote_payload() -> Value {
    json!({
        "companyName": "Selaras Engineering Sdn Bhd",
        "contactPerson": "Aisyah Rahman",
        "email": "aisyah@selaras.com.my",
        "phone": "+60 12-345 6789",
        "trainingType": "Leadership & Management",
        "participants": "25-50",
        "budget": "RM20,000 - RM50,000",
        "hrdfRequired": true,
        "details": "Two-day offsite for middle managers"
    })
}

async fn post_quote(router: axum::Router, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/leads/quote")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body = serde_json::from_slice(&bytes).expect("json body");
    (status, body)
}

#[tokio::test]
async fn valid_submission_is_acknowledged_and_relayed() {
    let relay = Arc::new(RecordingRelay::default());
    let router = lead_router(Arc::new(LeadService::new(relay.clone())));

    let (status, body) = post_quote(router, quote_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().expect("message").contains("received"));

    let envelopes = relay.envelopes.lock().expect("relay mutex poisoned");
    assert_eq!(envelopes.len(), 1);
    assert_eq!(envelopes[0].lead_type, "quote_request");
    assert_eq!(envelopes[0].data["company_name"], "Selaras Engineering Sdn Bhd");
    assert_eq!(envelopes[0].data["hrdf_required"], true);
}

#[tokio::test]
async fn each_missing_required_field_is_named_in_the_error() {
    for field in [
        "companyName",
        "contactPerson",
        "email",
        "phone",
        "trainingType",
        "participants",
        "budget",
    ] {
        let mut payload = quote_payload();
        payload[field] = json!("");

        let relay = Arc::new(RecordingRelay::default());
        let router = lead_router(Arc::new(LeadService::new(relay.clone())));
        let (status, body) = post_quote(router, payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        let message = body["error"].as_str().expect("error message");
        assert!(message.contains(field), "'{message}' names {field}");
        assert!(
            relay.envelopes.lock().expect("relay mutex poisoned").is_empty(),
            "rejected lead must not be relayed"
        );
    }
}

#[tokio::test]
async fn email_without_tld_is_rejected_even_when_rest_is_valid() {
    let mut payload = quote_payload();
    payload["email"] = json!("a@b");

    let router = lead_router(Arc::new(LeadService::new(Arc::new(
        RecordingRelay::default(),
    ))));
    let (status, body) = post_quote(router, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error").contains("email"));
}

#[tokio::test]
async fn relay_failure_does_not_change_the_callers_outcome() {
    let router = lead_router(Arc::new(LeadService::new(Arc::new(FailingRelay))));
    let (status, body) = post_quote(router, quote_payload()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn optional_fields_may_be_omitted() {
    let payload = json!({
        "companyName": "Borneo Skills",
        "contactPerson": "Daniel Wong",
        "email": "daniel@borneoskills.my",
        "phone": "+60 88-123 456",
        "trainingType": "Safety & Compliance",
        "participants": "10-25",
        "budget": "Below RM10,000"
    });

    let relay = Arc::new(RecordingRelay::default());
    let router = lead_router(Arc::new(LeadService::new(relay.clone())));
    let (status, _) = post_quote(router, payload).await;

    assert_eq!(status, StatusCode::OK);
    let envelopes = relay.envelopes.lock().expect("relay mutex poisoned");
    assert_eq!(envelopes[0].data["hrdf_required"], false);
    assert_eq!(envelopes[0].data["preferred_provider"], "");
}
