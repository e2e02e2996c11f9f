use latihan::catalog::{MalaysianState, PriceRange};
use latihan::directory::testing::provider;
use latihan::directory::{
    apply_filters, sort_providers, DirectoryService, InMemoryProviderStore, ListFilter, Provider,
    ProviderQuery, ProviderStore, SortKey, StoreError,
};
use std::sync::Arc;

fn sample_directory() -> Vec<Provider> {
    let mut quill = provider("quill-institute", MalaysianState::Penang, Some(4.9), false);
    quill.hrdf_approved = false;
    quill.price_range = PriceRange::Premium;
    quill.specializations = vec!["Digital Marketing".to_string(), "SEO".to_string()];

    let mut borneo = provider("borneo-skills", MalaysianState::Sabah, None, false);
    borneo.price_range = PriceRange::Budget;
    borneo.specializations = vec!["Safety".to_string(), "Compliance".to_string()];

    vec![
        provider("apex-leadership", MalaysianState::Selangor, Some(4.5), true),
        quill,
        borneo,
        provider("mentari-training", MalaysianState::Selangor, Some(3.8), false),
    ]
}

#[test]
fn store_orders_featured_then_by_rating_with_unrated_last() {
    let store = InMemoryProviderStore::new(sample_directory());
    let listed = store.list(&ProviderQuery::default()).expect("list");
    let slugs: Vec<&str> = listed.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(
        slugs,
        [
            "apex-leadership",
            "quill-institute",
            "mentari-training",
            "borneo-skills"
        ]
    );
}

#[test]
fn store_filters_are_freely_combinable() {
    let store = InMemoryProviderStore::new(sample_directory());
    let query = ProviderQuery {
        state: Some(MalaysianState::Selangor),
        hrdf_approved: Some(true),
        ..ProviderQuery::default()
    };
    let listed = store.list(&query).expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(store.count(&query).expect("count"), 2);
}

#[test]
fn specialization_query_is_membership_not_substring() {
    let store = InMemoryProviderStore::new(sample_directory());
    let query = ProviderQuery {
        specialization: Some("seo".to_string()),
        ..ProviderQuery::default()
    };
    assert_eq!(store.count(&query).expect("count"), 1);

    // partial tag text does not count as membership
    let partial = ProviderQuery {
        specialization: Some("se".to_string()),
        ..ProviderQuery::default()
    };
    assert_eq!(store.count(&partial).expect("count"), 0);
}

#[test]
fn hrdf_toggle_filters_to_approved_subset_and_off_is_identity() {
    let directory = sample_directory();

    let on = apply_filters(
        &directory,
        &ListFilter {
            hrdf_only: true,
            ..ListFilter::default()
        },
    );
    assert_eq!(on.len(), 3);
    assert!(on.iter().all(|provider| provider.hrdf_approved));

    let off = apply_filters(&directory, &ListFilter::default());
    assert_eq!(off.len(), directory.len());
}

#[test]
fn training_type_filter_matches_tag_substrings() {
    let directory = sample_directory();
    let filtered = apply_filters(
        &directory,
        &ListFilter {
            training_type: Some("marketing".to_string()),
            ..ListFilter::default()
        },
    );
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].slug, "quill-institute");
}

#[test]
fn rating_sort_is_strictly_non_increasing() {
    let mut directory = sample_directory();
    sort_providers(&mut directory, SortKey::Rating);

    let rated: Vec<f32> = directory.iter().filter_map(|p| p.rating).collect();
    assert!(rated.windows(2).all(|pair| pair[0] >= pair[1]));
    assert!(directory.last().expect("nonempty").rating.is_none());
}

#[test]
fn alphabetical_sort_orders_by_name() {
    let mut directory = sample_directory();
    sort_providers(&mut directory, SortKey::Alphabetical);
    let mut names: Vec<String> = directory.iter().map(|p| p.name.to_lowercase()).collect();
    let sorted = {
        let mut copy = names.clone();
        copy.sort();
        copy
    };
    assert_eq!(names, sorted);
    names.dedup();
    assert_eq!(names.len(), directory.len());
}

struct BrokenStore;

impl ProviderStore for BrokenStore {
    fn list(&self, _query: &ProviderQuery) -> Result<Vec<Provider>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn count(&self, _query: &ProviderQuery) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn by_slug(&self, _slug: &str) -> Result<Option<Provider>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }

    fn featured(&self, _limit: usize) -> Result<Vec<Provider>, StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

#[test]
fn store_failures_degrade_to_empty_results() {
    let service = DirectoryService::new(Arc::new(BrokenStore));
    assert!(service.list(&ProviderQuery::default()).is_empty());
    assert_eq!(service.count(&ProviderQuery::default()), 0);
    assert!(service.by_slug("apex-leadership").is_none());
    assert!(service.featured(6).is_empty());

    let page = service.page(&ProviderQuery::default(), 1, 12);
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn pagination_splits_filtered_results() {
    let service = DirectoryService::new(Arc::new(InMemoryProviderStore::new(sample_directory())));

    let first = service.page(&ProviderQuery::default(), 1, 3);
    assert_eq!(first.items.len(), 3);
    assert_eq!(first.total, 4);
    assert_eq!(first.total_pages, 2);

    let second = service.page(&ProviderQuery::default(), 2, 3);
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].slug, "borneo-skills");
}
