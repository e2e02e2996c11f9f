//! Derived SEO artifacts: the sitemap and schema.org structured data.

pub mod jsonld;
pub mod sitemap;

pub use jsonld::{faq_jsonld, provider_jsonld};
pub use sitemap::{render_sitemap, sitemap_entries, ChangeFrequency, SitemapEntry};
