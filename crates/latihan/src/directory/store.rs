use super::domain::Provider;
use crate::catalog::{MalaysianState, PriceRange};
use std::cmp::Ordering;

/// Filter predicates shared by `list` and `count`. All fields are optional
/// and freely combinable.
#[derive(Debug, Default, Clone)]
pub struct ProviderQuery {
    pub state: Option<MalaysianState>,
    pub specialization: Option<String>,
    pub hrdf_approved: Option<bool>,
    pub price_range: Option<PriceRange>,
    pub featured: Option<bool>,
    pub limit: Option<usize>,
    pub offset: usize,
}

impl ProviderQuery {
    fn matches(&self, provider: &Provider) -> bool {
        if let Some(state) = self.state {
            if provider.state != state {
                return false;
            }
        }
        if let Some(tag) = &self.specialization {
            if !provider.has_specialization(tag) {
                return false;
            }
        }
        if let Some(approved) = self.hrdf_approved {
            if provider.hrdf_approved != approved {
                return false;
            }
        }
        if let Some(tier) = self.price_range {
            if provider.price_range != tier {
                return false;
            }
        }
        if let Some(featured) = self.featured {
            if provider.featured != featured {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("provider dataset unavailable: {0}")]
    Unavailable(String),
}

/// Read-only boundary to wherever provider records live. The shipped
/// implementation is in-memory; a hosted database would slot in behind the
/// same operations.
pub trait ProviderStore: Send + Sync {
    /// Matching providers, ordered featured-first then rating descending
    /// (unrated listings last), with `offset`/`limit` applied.
    fn list(&self, query: &ProviderQuery) -> Result<Vec<Provider>, StoreError>;
    /// Number of providers matching the same predicates, ignoring pagination.
    fn count(&self, query: &ProviderQuery) -> Result<usize, StoreError>;
    fn by_slug(&self, slug: &str) -> Result<Option<Provider>, StoreError>;
    fn featured(&self, limit: usize) -> Result<Vec<Provider>, StoreError>;
}

/// Directory display order: featured listings first, then rating descending
/// with unrated listings last. Ties keep their incoming order.
pub fn directory_rank(a: &Provider, b: &Provider) -> Ordering {
    b.featured.cmp(&a.featured).then_with(|| match (a.rating, b.rating) {
        (Some(left), Some(right)) => right.partial_cmp(&left).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    })
}

/// In-memory store seeded from the provider dataset at startup.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProviderStore {
    providers: Vec<Provider>,
}

impl InMemoryProviderStore {
    pub fn new(mut providers: Vec<Provider>) -> Self {
        providers.sort_by(directory_rank);
        Self { providers }
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }
}

impl ProviderStore for InMemoryProviderStore {
    fn list(&self, query: &ProviderQuery) -> Result<Vec<Provider>, StoreError> {
        let matches = self
            .providers
            .iter()
            .filter(|provider| query.matches(provider))
            .skip(query.offset);
        let page = match query.limit {
            Some(limit) => matches.take(limit).cloned().collect(),
            None => matches.cloned().collect(),
        };
        Ok(page)
    }

    fn count(&self, query: &ProviderQuery) -> Result<usize, StoreError> {
        Ok(self
            .providers
            .iter()
            .filter(|provider| query.matches(provider))
            .count())
    }

    fn by_slug(&self, slug: &str) -> Result<Option<Provider>, StoreError> {
        Ok(self
            .providers
            .iter()
            .find(|provider| provider.slug == slug)
            .cloned())
    }

    fn featured(&self, limit: usize) -> Result<Vec<Provider>, StoreError> {
        Ok(self
            .providers
            .iter()
            .filter(|provider| provider.featured)
            .take(limit)
            .cloned()
            .collect())
    }
}
