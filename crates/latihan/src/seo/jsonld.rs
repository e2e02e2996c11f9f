//! schema.org JSON-LD blocks embedded in provider and FAQ pages.

use crate::catalog::faq_entries;
use crate::directory::Provider;
use serde_json::{json, Value};

/// LocalBusiness structured data for a provider detail page. Optional
/// contact fields and the aggregate rating are only emitted when present.
pub fn provider_jsonld(provider: &Provider) -> Value {
    let mut block = json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": provider.name,
        "description": provider.description,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": provider.address,
            "addressLocality": provider.city,
            "addressRegion": provider.state.label(),
            "addressCountry": "MY",
        },
        "priceRange": provider.price_range.label(),
    });

    let object = block.as_object_mut().expect("jsonld root is an object");
    if let Some(phone) = &provider.phone {
        object.insert("telephone".to_string(), json!(phone));
    }
    if let Some(email) = &provider.email {
        object.insert("email".to_string(), json!(email));
    }
    if let Some(website) = &provider.website {
        object.insert("url".to_string(), json!(website));
    }
    if let Some(image) = &provider.image_url {
        object.insert("image".to_string(), json!(image));
    }
    if let Some(rating) = provider.rating {
        object.insert(
            "aggregateRating".to_string(),
            json!({
                "@type": "AggregateRating",
                "ratingValue": rating,
                "reviewCount": provider.review_count,
                "bestRating": 5,
            }),
        );
    }

    block
}

/// FAQPage structured data over the static FAQ table.
pub fn faq_jsonld() -> Value {
    let questions: Vec<Value> = faq_entries()
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": entry.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}
