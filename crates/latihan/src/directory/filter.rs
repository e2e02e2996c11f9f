//! Pure list-view operations: the filter and sort applied client-side to an
//! already-fetched page of providers. Recomputed on every input change, no
//! state kept here.

use super::domain::Provider;
use crate::catalog::{MalaysianState, PriceRange};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Filter state of a directory list view. Defaults are the identity filter.
#[derive(Debug, Default, Clone)]
pub struct ListFilter {
    pub state: Option<MalaysianState>,
    /// Free-text training type, substring-matched against specialization tags.
    pub training_type: Option<String>,
    /// When true only HRDF-approved providers pass; when false the filter is
    /// a no-op.
    pub hrdf_only: bool,
    pub price_range: Option<PriceRange>,
}

pub fn apply_filters(providers: &[Provider], filter: &ListFilter) -> Vec<Provider> {
    providers
        .iter()
        .filter(|provider| {
            filter.state.map_or(true, |state| provider.state == state)
                && filter
                    .training_type
                    .as_deref()
                    .map_or(true, |needle| provider.matches_training_type(needle))
                && (!filter.hrdf_only || provider.hrdf_approved)
                && filter
                    .price_range
                    .map_or(true, |tier| provider.price_range == tier)
        })
        .cloned()
        .collect()
}

/// Terminal sort applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Featured,
    Rating,
    Alphabetical,
}

pub fn sort_providers(providers: &mut [Provider], key: SortKey) {
    match key {
        SortKey::Featured => providers.sort_by(super::store::directory_rank),
        SortKey::Rating => providers.sort_by(rating_desc),
        SortKey::Alphabetical => {
            providers.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }
}

fn rating_desc(a: &Provider, b: &Provider) -> Ordering {
    match (a.rating, b.rating) {
        (Some(left), Some(right)) => right.partial_cmp(&left).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
