use std::io::Write;

use assert_matches::assert_matches;
use chrono::Utc;
use rewear_core::error::CoreError;
use rewear_core::item::{Category, Size};
use rewear_core::listing::{ItemAnalysis, ListingDraft};
use rewear_core::query::{FilterCriteria, PriceRange, SortKey};
use rewear_core::swap::Wallet;
use rewear_store::{CatalogStore, StoreError};

fn fixtures() -> CatalogStore {
    CatalogStore::with_fixtures().unwrap()
}

fn ids(items: &[rewear_core::Item]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

const ONE_ITEM: &str = r#"[{
    "id": "item_x", "title": "Linen Shirt", "description": "Light summer shirt",
    "category": "Tops", "size": "S", "condition": "Fair", "wearCoins": 12,
    "tags": ["linen"], "images": ["/img/shirt.svg"],
    "uploader": {"id": "user_9", "name": "Sam"},
    "isAvailable": true, "uploadedAt": "2024-02-01T08:00:00Z"
}]"#;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[test]
fn bundled_fixtures_load() {
    let store = fixtures();
    assert_eq!(store.len(), 4);
    assert_eq!(store.get("item_3").unwrap().size, Size::Shoe(42));
    assert!(!store.get("item_4").unwrap().is_available);
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ONE_ITEM.as_bytes()).unwrap();

    let store = CatalogStore::from_path(file.path()).unwrap();
    assert_eq!(ids(store.list()), ["item_x"]);
    assert_eq!(store.list()[0].likes, 0);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogStore::from_path(dir.path().join("nope.json")).unwrap_err();
    assert_matches!(err, StoreError::Io { .. });
}

#[test]
fn empty_images_fail_fast() {
    let json = ONE_ITEM.replace(r#"["/img/shirt.svg"]"#, "[]");
    let err = CatalogStore::from_json_str(&json).unwrap_err();
    assert_matches!(err, StoreError::InvalidRecord { ref id, .. } if id == "item_x");
}

#[test]
fn unknown_category_fails_to_parse() {
    let json = ONE_ITEM.replace(r#""Tops""#, r#""Hats""#);
    assert_matches!(CatalogStore::from_json_str(&json), Err(StoreError::Parse(_)));
}

#[test]
fn missing_required_field_fails_to_parse() {
    let json = ONE_ITEM.replace(r#""wearCoins": 12,"#, "");
    assert_matches!(CatalogStore::from_json_str(&json), Err(StoreError::Parse(_)));
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut items = fixtures().list().to_vec();
    items.push(items[0].clone());
    let err = CatalogStore::from_items(items).unwrap_err();
    assert_matches!(err, StoreError::InvalidRecord { ref reason, .. } if reason == "duplicate id");
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn query_with_defaults_returns_newest_first() {
    let results = fixtures().query(&FilterCriteria::default(), SortKey::Newest);
    assert_eq!(ids(&results), ["item_1", "item_2", "item_3", "item_4"]);
}

#[test]
fn query_price_window_ascending() {
    let criteria = FilterCriteria {
        price_range: PriceRange::new(20, 30),
        ..Default::default()
    };
    let results = fixtures().query(&criteria, SortKey::PriceAsc);
    assert_eq!(ids(&results), ["item_3", "item_1", "item_4"]);
}

#[test]
fn query_popularity_uses_likes() {
    let results = fixtures().query(&FilterCriteria::default(), SortKey::Popularity);
    assert_eq!(ids(&results), ["item_3", "item_1", "item_2", "item_4"]);
}

#[test]
fn related_items_share_category() {
    let mut store = fixtures();
    let mut other = store.get("item_1").unwrap().clone();
    other.id = "item_5".to_string();
    store.publish(other).unwrap();

    let related = store.related("item_1").unwrap();
    assert_eq!(ids(&related), ["item_5"]);
    assert!(related.iter().all(|i| i.category == Category::Outerwear));
}

#[test]
fn related_for_unknown_item_is_not_found() {
    assert_matches!(
        fixtures().related("missing"),
        Err(StoreError::Core(CoreError::NotFound { .. }))
    );
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

#[test]
fn publish_draft_appends_listing() {
    let mut store = fixtures();
    let mut draft = ListingDraft {
        description: "Barely worn".to_string(),
        ..Default::default()
    };
    draft.add_image("/uploads/a.jpg");
    draft.apply_analysis(&ItemAnalysis::canned());

    let uploader = store.get("item_3").unwrap().uploader.clone();
    let item = draft.into_item(uploader, Utc::now()).unwrap();
    let id = store.publish(item).unwrap().id.clone();

    assert_eq!(store.len(), 5);
    let newest = store.query(&FilterCriteria::default(), SortKey::Newest);
    assert_eq!(newest[0].id, id);
}

#[test]
fn publish_duplicate_conflicts() {
    let mut store = fixtures();
    let dup = store.get("item_2").unwrap().clone();
    assert_matches!(
        store.publish(dup),
        Err(StoreError::Core(CoreError::Conflict(_)))
    );
}

#[test]
fn like_increments_count() {
    let mut store = fixtures();
    assert_eq!(store.like("item_4").unwrap(), 6);
    assert_matches!(store.like("missing"), Err(StoreError::Core(CoreError::NotFound { .. })));
}

#[test]
fn redeem_charges_and_marks_unavailable() {
    let mut store = fixtures();
    let mut wallet = Wallet::new(245);
    assert_eq!(store.redeem("item_1", &mut wallet).unwrap(), 220);
    assert!(!store.get("item_1").unwrap().is_available);

    // A second redemption of the same item is refused without charging.
    assert_matches!(
        store.redeem("item_1", &mut wallet),
        Err(StoreError::Core(CoreError::Conflict(_)))
    );
    assert_eq!(wallet.balance, 220);
}

#[test]
fn redeem_with_short_balance_leaves_item_listed() {
    let mut store = fixtures();
    let mut wallet = Wallet::new(10);
    assert_matches!(
        store.redeem("item_2", &mut wallet),
        Err(StoreError::Core(CoreError::InsufficientCoins { required: 35, available: 10 }))
    );
    assert!(store.get("item_2").unwrap().is_available);
}
