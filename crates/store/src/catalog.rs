//! In-memory catalog repository.
//!
//! Owns the single catalog snapshot. Records are validated when the catalog
//! is built, so everything reachable through the store satisfies the item
//! invariants (non-empty id, title and images; unique ids).

use std::collections::HashSet;
use std::path::Path;

use rewear_core::browse::{related_items, RELATED_LIMIT};
use rewear_core::error::CoreError;
use rewear_core::query::{query_catalog, FilterCriteria, SortKey};
use rewear_core::swap::Wallet;
use rewear_core::Item;

use crate::error::{StoreError, StoreResult};

/// The catalog bundled with the crate.
pub const FIXTURE_CATALOG: &str = include_str!("../fixtures/catalog.json");

/// Check a single record against the catalog invariants.
pub fn validate_item(item: &Item) -> StoreResult<()> {
    let invalid = |reason: &str| StoreError::InvalidRecord {
        id: item.id.clone(),
        reason: reason.to_string(),
    };

    if item.id.trim().is_empty() {
        return Err(invalid("id must not be empty"));
    }
    if item.title.trim().is_empty() {
        return Err(invalid("title must not be empty"));
    }
    if item.images.is_empty() {
        return Err(invalid("at least one image is required"));
    }
    if item.images.iter().any(|i| i.trim().is_empty()) {
        return Err(invalid("image references must not be blank"));
    }
    if item.uploader.id.trim().is_empty() {
        return Err(invalid("uploader id must not be empty"));
    }
    Ok(())
}

/// Provides lookups, queries and the few mutations the marketplace needs.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<Item>,
}

impl CatalogStore {
    /// Build a store, failing on the first invalid or duplicate record.
    pub fn from_items(items: Vec<Item>) -> StoreResult<Self> {
        {
            let mut seen = HashSet::with_capacity(items.len());
            for item in &items {
                validate_item(item)?;
                if !seen.insert(item.id.as_str()) {
                    return Err(StoreError::InvalidRecord {
                        id: item.id.clone(),
                        reason: "duplicate id".to_string(),
                    });
                }
            }
        }

        tracing::debug!(count = items.len(), "Catalog validated");
        Ok(Self { items })
    }

    /// Parse a JSON array of items and validate it.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    pub fn from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let store = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), count = store.len(), "Catalog loaded from file");
        Ok(store)
    }

    pub fn with_fixtures() -> StoreResult<Self> {
        let store = Self::from_json_str(FIXTURE_CATALOG)?;
        tracing::info!(count = store.len(), "Fixture catalog loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The whole catalog, in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Like [`Self::find_by_id`], but a missing item is an error.
    pub fn get(&self, id: &str) -> StoreResult<&Item> {
        self.find_by_id(id).ok_or_else(|| not_found(id))
    }

    fn get_mut(&mut self, id: &str) -> StoreResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found(id))
    }

    pub fn query(&self, criteria: &FilterCriteria, sort: SortKey) -> Vec<Item> {
        let results = query_catalog(&self.items, criteria, sort);
        tracing::debug!(
            matched = results.len(),
            total = self.items.len(),
            sort = sort.as_str(),
            "Catalog queried"
        );
        results
    }

    /// Up to [`RELATED_LIMIT`] items sharing the category of `id`.
    pub fn related(&self, id: &str) -> StoreResult<Vec<Item>> {
        let item = self.get(id)?;
        Ok(related_items(&self.items, item, RELATED_LIMIT))
    }

    /// Append a new listing.
    pub fn publish(&mut self, item: Item) -> StoreResult<&Item> {
        validate_item(&item)?;
        if self.find_by_id(&item.id).is_some() {
            return Err(CoreError::Conflict(format!("Item {} already exists", item.id)).into());
        }

        tracing::info!(item_id = %item.id, title = %item.title, "Item published");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn mark_unavailable(&mut self, id: &str) -> StoreResult<()> {
        let item = self.get_mut(id)?;
        item.is_available = false;
        tracing::info!(item_id = %id, "Item marked unavailable");
        Ok(())
    }

    /// Record a like and return the new count.
    pub fn like(&mut self, id: &str) -> StoreResult<u32> {
        let item = self.get_mut(id)?;
        item.likes = item.likes.saturating_add(1);
        tracing::debug!(item_id = %id, likes = item.likes, "Item liked");
        Ok(item.likes)
    }

    /// Charge `wallet` for the item and take it off the market.
    /// Returns the remaining balance.
    pub fn redeem(&mut self, id: &str, wallet: &mut Wallet) -> StoreResult<u32> {
        let balance = wallet.redeem(self.get(id)?)?;
        self.mark_unavailable(id)?;
        tracing::info!(item_id = %id, balance, "Item redeemed");
        Ok(balance)
    }
}

fn not_found(id: &str) -> StoreError {
    CoreError::NotFound {
        entity: "item",
        id: id.to_string(),
    }
    .into()
}
