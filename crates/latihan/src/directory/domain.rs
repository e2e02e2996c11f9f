use crate::catalog::{MalaysianState, PriceRange};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A directory listing. Records are created and maintained out-of-band; the
/// application reads them, never writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    /// Unique, URL-safe identifier used in page routes.
    pub slug: String,
    pub name: String,
    pub description: String,
    pub state: MalaysianState,
    pub city: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Average review score in [0, 5]; None when the listing has no reviews.
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub review_count: u32,
    /// Unordered tag set; membership-tested, order carries no meaning.
    pub specializations: Vec<String>,
    pub hrdf_approved: bool,
    pub price_range: PriceRange,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub claimed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Provider {
    /// Case-insensitive tag membership test.
    pub fn has_specialization(&self, tag: &str) -> bool {
        let needle = tag.trim().to_lowercase();
        self.specializations
            .iter()
            .any(|candidate| candidate.to_lowercase() == needle)
    }

    /// Case-insensitive substring match against any specialization tag, used
    /// by the training-type filter on list views.
    pub fn matches_training_type(&self, training_type: &str) -> bool {
        let needle = training_type.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.specializations
            .iter()
            .any(|candidate| candidate.to_lowercase().contains(&needle))
    }
}
