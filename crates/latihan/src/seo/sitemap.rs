//! Sitemap generation. The sitemap enumerates static routes plus one URL per
//! provider, state, and training category, with fixed priority and change
//! frequency per route class.

use crate::catalog::{MalaysianState, TrainingCategory};
use crate::directory::Provider;
use chrono::NaiveDate;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub loc: String,
    pub changefreq: ChangeFrequency,
    pub priority: f32,
    pub lastmod: Option<NaiveDate>,
}

const STATIC_ROUTES: &[(&str, ChangeFrequency, f32)] = &[
    ("/", ChangeFrequency::Daily, 1.0),
    ("/providers", ChangeFrequency::Daily, 0.9),
    ("/calculator", ChangeFrequency::Monthly, 0.8),
    ("/faq", ChangeFrequency::Monthly, 0.6),
    ("/about", ChangeFrequency::Monthly, 0.5),
    ("/contact", ChangeFrequency::Monthly, 0.5),
];

pub fn sitemap_entries(base_url: &str, providers: &[Provider]) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let mut entries = Vec::new();

    for (path, changefreq, priority) in STATIC_ROUTES {
        entries.push(SitemapEntry {
            loc: format!("{base}{path}"),
            changefreq: *changefreq,
            priority: *priority,
            lastmod: None,
        });
    }

    for provider in providers {
        entries.push(SitemapEntry {
            loc: format!("{base}/providers/{}", provider.slug),
            changefreq: ChangeFrequency::Weekly,
            priority: 0.8,
            lastmod: Some(provider.updated_at.date_naive()),
        });
    }

    for state in MalaysianState::ordered() {
        entries.push(SitemapEntry {
            loc: format!("{base}/locations/{}", state.slug()),
            changefreq: ChangeFrequency::Weekly,
            priority: 0.7,
            lastmod: None,
        });
    }

    for category in TrainingCategory::ordered() {
        entries.push(SitemapEntry {
            loc: format!("{base}/training/{}", category.slug()),
            changefreq: ChangeFrequency::Weekly,
            priority: 0.7,
            lastmod: None,
        });
    }

    entries
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for entry in entries {
        xml.push_str("  <url>\n");
        writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.loc)).expect("write loc");
        if let Some(lastmod) = entry.lastmod {
            writeln!(xml, "    <lastmod>{}</lastmod>", lastmod.format("%Y-%m-%d"))
                .expect("write lastmod");
        }
        writeln!(
            xml,
            "    <changefreq>{}</changefreq>",
            entry.changefreq.as_str()
        )
        .expect("write changefreq");
        writeln!(xml, "    <priority>{:.1}</priority>", entry.priority).expect("write priority");
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}
