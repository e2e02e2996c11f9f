//! Provider directory: the domain record, the read-only store boundary, the
//! pure list-view filter/sort helpers, and the HTTP surface.

pub mod dataset;
pub mod domain;
pub mod filter;
pub mod store;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use dataset::DatasetError;
pub use domain::Provider;
pub use filter::{apply_filters, sort_providers, ListFilter, SortKey};
pub use store::{InMemoryProviderStore, ProviderQuery, ProviderStore, StoreError};

use crate::catalog::{MalaysianState, PriceRange};
use crate::seo;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const MAX_PAGE_SIZE: usize = 60;

/// Read-side facade over a [`ProviderStore`]. Store failures are logged and
/// degrade to empty results; callers never see an error.
pub struct DirectoryService<S> {
    store: Arc<S>,
}

impl<S: ProviderStore> DirectoryService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn list(&self, query: &ProviderQuery) -> Vec<Provider> {
        match self.store.list(query) {
            Ok(providers) => providers,
            Err(err) => {
                error!(error = %err, "provider listing failed");
                Vec::new()
            }
        }
    }

    pub fn count(&self, query: &ProviderQuery) -> usize {
        match self.store.count(query) {
            Ok(total) => total,
            Err(err) => {
                error!(error = %err, "provider count failed");
                0
            }
        }
    }

    pub fn by_slug(&self, slug: &str) -> Option<Provider> {
        match self.store.by_slug(slug) {
            Ok(provider) => provider,
            Err(err) => {
                error!(error = %err, slug, "provider lookup failed");
                None
            }
        }
    }

    pub fn featured(&self, limit: usize) -> Vec<Provider> {
        match self.store.featured(limit) {
            Ok(providers) => providers,
            Err(err) => {
                error!(error = %err, "featured listing failed");
                Vec::new()
            }
        }
    }

    /// One page of results plus the totals the pagination widget needs.
    pub fn page(&self, query: &ProviderQuery, page: usize, per_page: usize) -> DirectoryPage {
        let per_page = per_page.clamp(1, MAX_PAGE_SIZE);
        let page = page.max(1);

        let paged = ProviderQuery {
            limit: Some(per_page),
            // saturate so an absurd page number yields an empty page
            offset: page.saturating_sub(1).saturating_mul(per_page),
            ..query.clone()
        };
        let unpaged = ProviderQuery {
            limit: None,
            offset: 0,
            ..query.clone()
        };

        let items = self.list(&paged);
        let total = self.count(&unpaged);
        let total_pages = total.div_ceil(per_page);

        DirectoryPage {
            items,
            total,
            page,
            per_page,
            total_pages,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DirectoryPage {
    pub items: Vec<Provider>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

/// Query string accepted by the provider list endpoint. Enum-valued fields
/// arrive as slugs and are resolved before hitting the store.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProviderListParams {
    state: Option<String>,
    specialization: Option<String>,
    hrdf: Option<bool>,
    price: Option<String>,
    featured: Option<bool>,
    page: Option<usize>,
    per_page: Option<usize>,
}

impl ProviderListParams {
    fn into_query(self) -> Result<(ProviderQuery, usize, usize), String> {
        let state = match &self.state {
            Some(slug) => Some(
                MalaysianState::from_slug(slug).ok_or_else(|| format!("unknown state '{slug}'"))?,
            ),
            None => None,
        };
        let price_range = match &self.price {
            Some(slug) => Some(
                PriceRange::from_slug(slug)
                    .ok_or_else(|| format!("unknown price range '{slug}'"))?,
            ),
            None => None,
        };

        let query = ProviderQuery {
            state,
            specialization: self.specialization,
            hrdf_approved: self.hrdf,
            price_range,
            featured: self.featured,
            limit: None,
            offset: 0,
        };
        Ok((
            query,
            self.page.unwrap_or(1),
            self.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        ))
    }
}

/// Router builder for the read-only provider endpoints.
pub fn directory_router<S>(service: Arc<DirectoryService<S>>) -> Router
where
    S: ProviderStore + 'static,
{
    Router::new()
        .route("/api/v1/providers", get(list_handler::<S>))
        .route("/api/v1/providers/:slug", get(detail_handler::<S>))
        .with_state(service)
}

async fn list_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Query(params): Query<ProviderListParams>,
) -> Response
where
    S: ProviderStore + 'static,
{
    match params.into_query() {
        Ok((query, page, per_page)) => {
            let page = service.page(&query, page, per_page);
            (StatusCode::OK, Json(page)).into_response()
        }
        Err(message) => {
            let payload = json!({ "error": message });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

async fn detail_handler<S>(
    State(service): State<Arc<DirectoryService<S>>>,
    Path(slug): Path<String>,
) -> Response
where
    S: ProviderStore + 'static,
{
    match service.by_slug(&slug) {
        Some(provider) => {
            let structured_data = seo::provider_jsonld(&provider);
            let payload = json!({
                "provider": provider,
                "structured_data": structured_data,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => {
            let payload = json!({ "error": "provider not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
