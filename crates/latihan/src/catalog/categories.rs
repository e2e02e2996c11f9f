use serde::{Deserialize, Serialize};

/// Training categories the directory publishes landing pages for. Each
/// category carries the copy used for its listing page plus the
/// specialization tags it matches against provider records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainingCategory {
    LeadershipManagement,
    TechnicalSkills,
    SoftSkills,
    DigitalMarketing,
    SafetyCompliance,
    TeamBuilding,
}

impl TrainingCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::LeadershipManagement,
            Self::TechnicalSkills,
            Self::SoftSkills,
            Self::DigitalMarketing,
            Self::SafetyCompliance,
            Self::TeamBuilding,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::LeadershipManagement => "Leadership & Management",
            Self::TechnicalSkills => "Technical Skills",
            Self::SoftSkills => "Soft Skills",
            Self::DigitalMarketing => "Digital Marketing",
            Self::SafetyCompliance => "Safety & Compliance",
            Self::TeamBuilding => "Team Building",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::LeadershipManagement => "leadership-management",
            Self::TechnicalSkills => "technical-skills",
            Self::SoftSkills => "soft-skills",
            Self::DigitalMarketing => "digital-marketing",
            Self::SafetyCompliance => "safety-compliance",
            Self::TeamBuilding => "team-building",
        }
    }

    pub const fn page_title(self) -> &'static str {
        match self {
            Self::LeadershipManagement => {
                "Leadership & Management Training Providers in Malaysia"
            }
            Self::TechnicalSkills => "Technical Skills Training Providers in Malaysia",
            Self::SoftSkills => "Soft Skills Training Providers in Malaysia",
            Self::DigitalMarketing => "Digital Marketing Training Providers in Malaysia",
            Self::SafetyCompliance => "Safety & Compliance Training Providers in Malaysia",
            Self::TeamBuilding => "Team Building Providers in Malaysia",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::LeadershipManagement => {
                "Executive coaching, supervisory skills, and management development programmes for Malaysian companies."
            }
            Self::TechnicalSkills => {
                "IT certifications, engineering, and trade skills programmes from accredited technical trainers."
            }
            Self::SoftSkills => {
                "Communication, negotiation, and workplace effectiveness courses for every level of staff."
            }
            Self::DigitalMarketing => {
                "SEO, social media, and e-commerce training to upskill marketing teams."
            }
            Self::SafetyCompliance => {
                "OSHA, NIOSH, and industry compliance courses that keep worksites certified."
            }
            Self::TeamBuilding => {
                "Indoor and outdoor team building experiences across Malaysia's retreat venues."
            }
        }
    }

    /// Tags this category matches against provider specializations.
    pub const fn tags(self) -> &'static [&'static str] {
        match self {
            Self::LeadershipManagement => &["leadership", "management", "executive coaching"],
            Self::TechnicalSkills => &["technical", "it", "engineering", "certification"],
            Self::SoftSkills => &["soft skills", "communication", "negotiation"],
            Self::DigitalMarketing => &["digital marketing", "seo", "social media"],
            Self::SafetyCompliance => &["safety", "compliance", "osha", "niosh"],
            Self::TeamBuilding => &["team building", "outdoor", "retreat"],
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.slug() == slug.trim().to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_slugs_round_trip() {
        for category in TrainingCategory::ordered() {
            assert_eq!(TrainingCategory::from_slug(category.slug()), Some(category));
        }
    }

    #[test]
    fn every_category_has_tags_and_copy() {
        for category in TrainingCategory::ordered() {
            assert!(!category.tags().is_empty());
            assert!(category.page_title().contains("Malaysia"));
            assert!(!category.description().is_empty());
        }
    }
}
