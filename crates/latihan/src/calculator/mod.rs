//! HRDF levy and claimable-amount calculator. Every rate and cap here is a
//! fixed HRD Corp constant compiled into the binary; nothing is fetched at
//! runtime.

use serde::{Deserialize, Serialize};

/// Employer contribution rate: 1% of monthly wages.
pub const LEVY_RATE: f64 = 0.01;
/// HRD Corp deducts 4% of the approved claim as a service fee.
pub const SERVICE_FEE_RATE: f64 = 0.04;
/// Daily meal allowance add-on per participant, in RM.
pub const MEALS_ADDON_PER_PAX_DAY: f64 = 50.0;
/// Daily accommodation allowance add-on per participant, in RM.
pub const ACCOMMODATION_ADDON_PER_PAX_DAY: f64 = 150.0;

/// HRD Corp claim schemes. Each carries a maximum claimable course fee per
/// day of training and a maximum daily allowance per participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClaimCategory {
    PublicProgram,
    InHouse,
    Overseas,
    ELearning,
    Certification,
}

impl ClaimCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::PublicProgram,
            Self::InHouse,
            Self::Overseas,
            Self::ELearning,
            Self::Certification,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PublicProgram => "Public Programme",
            Self::InHouse => "In-House Programme",
            Self::Overseas => "Overseas Programme",
            Self::ELearning => "E-Learning",
            Self::Certification => "Certification Programme",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::PublicProgram => "public-program",
            Self::InHouse => "in-house",
            Self::Overseas => "overseas",
            Self::ELearning => "e-learning",
            Self::Certification => "certification",
        }
    }

    /// Maximum claimable course fee per day of training, in RM.
    pub const fn course_fee_cap_per_day(self) -> f64 {
        match self {
            Self::PublicProgram => 8_000.0,
            Self::InHouse => 12_000.0,
            Self::Overseas => 15_000.0,
            Self::ELearning => 6_000.0,
            Self::Certification => 10_000.0,
        }
    }

    /// Maximum daily allowance per participant, in RM.
    pub const fn allowance_cap_per_pax_day(self) -> f64 {
        match self {
            Self::PublicProgram => 500.0,
            Self::InHouse => 400.0,
            Self::Overseas => 600.0,
            Self::ELearning => 250.0,
            Self::Certification => 500.0,
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.slug() == slug.trim().to_ascii_lowercase())
    }
}

/// User-entered figures the estimate is derived from. Salaries and fees are
/// in RM.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorInput {
    pub employees: u32,
    pub average_basic_salary: f64,
    #[serde(default)]
    pub average_fixed_allowance: f64,
    pub category: ClaimCategory,
    pub training_days: u32,
    pub participants: u32,
    pub course_fee: f64,
    #[serde(default)]
    pub include_meals: bool,
    #[serde(default)]
    pub include_accommodation: bool,
}

/// Derived levy and claim figures, all in RM.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevyEstimate {
    pub monthly_levy: f64,
    pub annual_levy: f64,
    pub claimable_course_fee: f64,
    pub claimable_allowance: f64,
    pub total_claimable: f64,
    pub net_after_service_fee: f64,
}

impl LevyEstimate {
    pub fn compute(input: &CalculatorInput) -> Self {
        let wages = input.average_basic_salary + input.average_fixed_allowance;
        let monthly_levy = wages * f64::from(input.employees) * LEVY_RATE;
        let annual_levy = monthly_levy * 12.0;

        let days = f64::from(input.training_days);
        let participants = f64::from(input.participants);

        let course_fee_cap = input.category.course_fee_cap_per_day() * days;
        let claimable_course_fee = input.course_fee.min(course_fee_cap);

        let mut per_pax_allowance = input.category.allowance_cap_per_pax_day();
        if input.include_meals {
            per_pax_allowance += MEALS_ADDON_PER_PAX_DAY;
        }
        if input.include_accommodation {
            per_pax_allowance += ACCOMMODATION_ADDON_PER_PAX_DAY;
        }
        let allowance_cap = input.category.allowance_cap_per_pax_day() * participants * days;
        let claimable_allowance = (per_pax_allowance * participants * days).min(allowance_cap);

        let total_claimable = claimable_course_fee + claimable_allowance;
        let net_after_service_fee = total_claimable * (1.0 - SERVICE_FEE_RATE);

        Self {
            monthly_levy,
            annual_levy,
            claimable_course_fee,
            claimable_allowance,
            total_claimable,
            net_after_service_fee,
        }
    }
}
