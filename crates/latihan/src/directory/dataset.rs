//! CSV ingestion for the provider dataset. The back-office process exports
//! one row per listing; the service loads the file once at startup.

use super::domain::Provider;
use crate::catalog::{MalaysianState, PriceRange};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("unable to read provider dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed provider dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unknown state '{value}'")]
    UnknownState { row: usize, value: String },
    #[error("row {row}: unknown price range '{value}'")]
    UnknownPriceRange { row: usize, value: String },
    #[error("row {row}: rating {value} outside [0, 5]")]
    RatingOutOfRange { row: usize, value: f32 },
}

pub fn load_path(path: &Path) -> Result<Vec<Provider>, DatasetError> {
    let file = std::fs::File::open(path)?;
    load_reader(file)
}

pub fn load_reader<R: Read>(reader: R) -> Result<Vec<Provider>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut providers = Vec::new();

    for (index, record) in csv_reader.deserialize::<ProviderRow>().enumerate() {
        // header is line 1, first data row is line 2
        let row = index + 2;
        providers.push(record?.into_provider(row)?);
    }

    Ok(providers)
}

#[derive(Debug, Deserialize)]
struct ProviderRow {
    id: String,
    slug: String,
    name: String,
    #[serde(default)]
    description: String,
    state: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    address: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    website: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    image_url: Option<String>,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    review_count: u32,
    /// Semicolon-separated tag list.
    #[serde(default)]
    specializations: String,
    #[serde(default)]
    hrdf_approved: bool,
    price_range: String,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    verified: bool,
    #[serde(default)]
    claimed: bool,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl ProviderRow {
    fn into_provider(self, row: usize) -> Result<Provider, DatasetError> {
        let state =
            MalaysianState::from_slug(&self.state).ok_or_else(|| DatasetError::UnknownState {
                row,
                value: self.state.clone(),
            })?;
        let price_range = PriceRange::from_slug(&self.price_range).ok_or_else(|| {
            DatasetError::UnknownPriceRange {
                row,
                value: self.price_range.clone(),
            }
        })?;
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(DatasetError::RatingOutOfRange { row, value: rating });
            }
        }

        let specializations = self
            .specializations
            .split(';')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        let fallback = Utc::now();
        Ok(Provider {
            id: self.id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            state,
            city: self.city,
            address: self.address,
            phone: self.phone,
            email: self.email,
            website: self.website,
            image_url: self.image_url,
            rating: self.rating,
            review_count: self.review_count,
            specializations,
            hrdf_approved: self.hrdf_approved,
            price_range,
            featured: self.featured,
            verified: self.verified,
            claimed: self.claimed,
            created_at: self.created_at.unwrap_or(fallback),
            updated_at: self.updated_at.or(self.created_at).unwrap_or(fallback),
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
