use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use latihan::calculator::{CalculatorInput, ClaimCategory, LevyEstimate};
use latihan::catalog::{faq_entries, MalaysianState, PriceRange, TrainingCategory};
use latihan::directory::{
    directory_router, DirectoryService, InMemoryProviderStore, Provider,
};
use latihan::leads::{lead_router, LeadService};
use latihan::seo::{faq_jsonld, render_sitemap, sitemap_entries};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

/// Shared by handlers that need the public site origin or the directory.
#[derive(Clone)]
pub(crate) struct SiteContext {
    pub(crate) base_url: String,
    pub(crate) directory: Arc<DirectoryService<InMemoryProviderStore>>,
}

pub(crate) fn with_service_routes(
    directory: Arc<DirectoryService<InMemoryProviderStore>>,
    leads: Arc<LeadService>,
) -> Router {
    directory_router(directory)
        .merge(lead_router(leads))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/sitemap.xml", get(sitemap_endpoint))
        .route("/api/v1/home", get(home_endpoint))
        .route("/api/v1/content/catalog", get(catalog_endpoint))
        .route("/api/v1/content/faq", get(faq_endpoint))
        .route("/api/v1/calculator/levy", post(levy_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn sitemap_endpoint(
    Extension(site): Extension<SiteContext>,
) -> impl IntoResponse {
    let providers = site.directory.list(&Default::default());
    let xml = render_sitemap(&sitemap_entries(&site.base_url, &providers));
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml")],
        xml,
    )
}

#[derive(Debug, Serialize)]
pub(crate) struct HomeResponse {
    pub(crate) featured: Vec<Provider>,
    pub(crate) categories: Vec<CategoryView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryView {
    pub(crate) slug: &'static str,
    pub(crate) label: &'static str,
    pub(crate) description: &'static str,
}

pub(crate) async fn home_endpoint(Extension(site): Extension<SiteContext>) -> Json<HomeResponse> {
    let featured = site.directory.featured(6);
    let categories = TrainingCategory::ordered()
        .into_iter()
        .map(|category| CategoryView {
            slug: category.slug(),
            label: category.label(),
            description: category.description(),
        })
        .collect();
    Json(HomeResponse {
        featured,
        categories,
    })
}

pub(crate) async fn catalog_endpoint() -> Json<serde_json::Value> {
    let categories: Vec<_> = TrainingCategory::ordered()
        .into_iter()
        .map(|category| {
            json!({
                "slug": category.slug(),
                "label": category.label(),
                "page_title": category.page_title(),
                "description": category.description(),
                "tags": category.tags(),
            })
        })
        .collect();
    let states: Vec<_> = MalaysianState::ordered()
        .into_iter()
        .map(|state| json!({ "slug": state.slug(), "label": state.label() }))
        .collect();
    let price_ranges: Vec<_> = PriceRange::ordered()
        .into_iter()
        .map(|tier| {
            json!({
                "slug": tier.slug(),
                "label": tier.label(),
                "indicative_band": tier.indicative_band(),
            })
        })
        .collect();
    let claim_schemes: Vec<_> = ClaimCategory::ordered()
        .into_iter()
        .map(|scheme| {
            json!({
                "slug": scheme.slug(),
                "label": scheme.label(),
                "course_fee_cap_per_day": scheme.course_fee_cap_per_day(),
                "allowance_cap_per_pax_day": scheme.allowance_cap_per_pax_day(),
            })
        })
        .collect();

    Json(json!({
        "categories": categories,
        "states": states,
        "price_ranges": price_ranges,
        "claim_schemes": claim_schemes,
    }))
}

pub(crate) async fn faq_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "entries": faq_entries(),
        "structured_data": faq_jsonld(),
    }))
}

#[derive(Debug, Serialize)]
pub(crate) struct LevyResponse {
    pub(crate) category: ClaimCategory,
    pub(crate) category_label: &'static str,
    pub(crate) currency: &'static str,
    #[serde(flatten)]
    pub(crate) estimate: LevyEstimate,
}

pub(crate) async fn levy_endpoint(Json(input): Json<CalculatorInput>) -> Json<LevyResponse> {
    let estimate = LevyEstimate::compute(&input);
    Json(LevyResponse {
        category: input.category,
        category_label: input.category.label(),
        currency: "MYR",
        estimate,
    })
}
