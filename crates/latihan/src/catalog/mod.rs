//! Static content tables compiled into the application: Malaysian states,
//! price tiers, training categories, and FAQ copy. Pure data, no behavior
//! beyond slug/label lookups.

mod categories;
mod faq;

pub use categories::TrainingCategory;
pub use faq::{faq_entries, FaqEntry};

use serde::{Deserialize, Serialize};

/// Malaysian states and federal territories a provider can be located in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MalaysianState {
    Johor,
    Kedah,
    Kelantan,
    KualaLumpur,
    Labuan,
    Melaka,
    NegeriSembilan,
    Pahang,
    Penang,
    Perak,
    Perlis,
    Putrajaya,
    Sabah,
    Sarawak,
    Selangor,
    Terengganu,
}

impl MalaysianState {
    pub const fn ordered() -> [Self; 16] {
        [
            Self::Johor,
            Self::Kedah,
            Self::Kelantan,
            Self::KualaLumpur,
            Self::Labuan,
            Self::Melaka,
            Self::NegeriSembilan,
            Self::Pahang,
            Self::Penang,
            Self::Perak,
            Self::Perlis,
            Self::Putrajaya,
            Self::Sabah,
            Self::Sarawak,
            Self::Selangor,
            Self::Terengganu,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Johor => "Johor",
            Self::Kedah => "Kedah",
            Self::Kelantan => "Kelantan",
            Self::KualaLumpur => "Kuala Lumpur",
            Self::Labuan => "Labuan",
            Self::Melaka => "Melaka",
            Self::NegeriSembilan => "Negeri Sembilan",
            Self::Pahang => "Pahang",
            Self::Penang => "Penang",
            Self::Perak => "Perak",
            Self::Perlis => "Perlis",
            Self::Putrajaya => "Putrajaya",
            Self::Sabah => "Sabah",
            Self::Sarawak => "Sarawak",
            Self::Selangor => "Selangor",
            Self::Terengganu => "Terengganu",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Johor => "johor",
            Self::Kedah => "kedah",
            Self::Kelantan => "kelantan",
            Self::KualaLumpur => "kuala-lumpur",
            Self::Labuan => "labuan",
            Self::Melaka => "melaka",
            Self::NegeriSembilan => "negeri-sembilan",
            Self::Pahang => "pahang",
            Self::Penang => "penang",
            Self::Perak => "perak",
            Self::Perlis => "perlis",
            Self::Putrajaya => "putrajaya",
            Self::Sabah => "sabah",
            Self::Sarawak => "sarawak",
            Self::Selangor => "selangor",
            Self::Terengganu => "terengganu",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|state| state.slug() == slug.trim().to_ascii_lowercase())
    }
}

/// Price tier a provider advertises, independent of HRDF approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceRange {
    Budget,
    MidRange,
    Premium,
}

impl PriceRange {
    pub const fn ordered() -> [Self; 3] {
        [Self::Budget, Self::MidRange, Self::Premium]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Budget => "Budget",
            Self::MidRange => "Mid-Range",
            Self::Premium => "Premium",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Premium => "premium",
        }
    }

    /// Indicative fee band shown on listing pages.
    pub const fn indicative_band(self) -> &'static str {
        match self {
            Self::Budget => "Below RM2,000 per day",
            Self::MidRange => "RM2,000 - RM5,000 per day",
            Self::Premium => "Above RM5,000 per day",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|tier| tier.slug() == slug.trim().to_ascii_lowercase())
    }
}
