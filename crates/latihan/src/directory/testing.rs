//! Provider fixtures shared by unit and integration tests. Only compiled
//! for test builds or under the `testing` feature.

use super::domain::Provider;
use crate::catalog::{MalaysianState, PriceRange};
use chrono::{TimeZone, Utc};

/// A minimal listing with the given slug, state, rating, and featured flag.
/// HRDF-approved, mid-range, with a "Leadership" tag.
pub fn provider(
    slug: &str,
    state: MalaysianState,
    rating: Option<f32>,
    featured: bool,
) -> Provider {
    Provider {
        id: format!("prov-{slug}"),
        slug: slug.to_string(),
        name: format!("{} Training", capitalize(slug)),
        description: "Corporate training programmes".to_string(),
        state,
        city: "Kuala Lumpur".to_string(),
        address: "1 Jalan Ampang".to_string(),
        phone: Some("+60 3-2161 0000".to_string()),
        email: Some(format!("hello@{slug}.example.my")),
        website: Some(format!("https://{slug}.example.my")),
        image_url: None,
        rating,
        review_count: if rating.is_some() { 12 } else { 0 },
        specializations: vec!["Leadership".to_string(), "Soft Skills".to_string()],
        hrdf_approved: true,
        price_range: PriceRange::MidRange,
        featured,
        verified: true,
        claimed: false,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 9, 15, 8, 0, 0).unwrap(),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
