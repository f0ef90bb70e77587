//! Browse page views over a query result: fit badges, the perfect-fit,
//! trending and recent tabs, and first-page pagination.

use serde::{Deserialize, Serialize};

use crate::fit::{compute_fit_match, FitMatch, MeasurementProfile, PERFECT_FIT_ABOVE};
use crate::item::Item;
use crate::query::{sort_items, SortKey};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Items shown before "Load More".
pub const PAGE_SIZE: usize = 12;

/// Items shown in the trending and recently-added tabs.
pub const TAB_LIMIT: usize = 8;

/// Related items shown on an item's detail page.
pub const RELATED_LIMIT: usize = 4;

pub const VALID_TABS: &[&str] = &["all", "perfect-fit", "trending", "recent"];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowseTab {
    #[default]
    All,
    PerfectFit,
    Trending,
    Recent,
}

impl BrowseTab {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "all" => Ok(Self::All),
            "perfect-fit" => Ok(Self::PerfectFit),
            "trending" => Ok(Self::Trending),
            "recent" => Ok(Self::Recent),
            _ => Err(format!(
                "Invalid browse tab '{s}'. Must be one of: {}",
                VALID_TABS.join(", ")
            )),
        }
    }
}

/// An item paired with its fit badge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedItem {
    pub item: Item,
    pub fit: FitMatch,
}

/// The first page of a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowsePage {
    pub items: Vec<MatchedItem>,
    pub total: usize,
    pub has_more: bool,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

pub fn annotate(items: &[Item], profile: &MeasurementProfile) -> Vec<MatchedItem> {
    items
        .iter()
        .map(|item| MatchedItem {
            fit: compute_fit_match(item, profile),
            item: item.clone(),
        })
        .collect()
}

/// Items scoring strictly above the perfect-fit threshold, in input order.
pub fn perfect_fits(items: &[Item], profile: &MeasurementProfile) -> Vec<Item> {
    items
        .iter()
        .filter(|item| f64::from(compute_fit_match(item, profile).percentage) > PERFECT_FIT_ABOVE)
        .cloned()
        .collect()
}

/// The head of the current result list.
pub fn trending(items: &[Item]) -> Vec<Item> {
    items.iter().take(TAB_LIMIT).cloned().collect()
}

/// Newest items first, capped at [`TAB_LIMIT`].
pub fn recently_added(items: &[Item]) -> Vec<Item> {
    let mut recent = items.to_vec();
    sort_items(&mut recent, SortKey::Newest);
    recent.truncate(TAB_LIMIT);
    recent
}

/// Apply a tab to a query result.
pub fn tab_view(items: &[Item], tab: BrowseTab, profile: &MeasurementProfile) -> Vec<Item> {
    match tab {
        BrowseTab::All => items.to_vec(),
        BrowseTab::PerfectFit => perfect_fits(items, profile),
        BrowseTab::Trending => trending(items),
        BrowseTab::Recent => recently_added(items),
    }
}

pub fn first_page(items: &[Item], profile: &MeasurementProfile) -> BrowsePage {
    let shown: Vec<Item> = items.iter().take(PAGE_SIZE).cloned().collect();
    BrowsePage {
        items: annotate(&shown, profile),
        total: items.len(),
        has_more: items.len() > PAGE_SIZE,
    }
}

/// Up to `limit` other items from the same category as `item`, in catalog order.
pub fn related_items(catalog: &[Item], item: &Item, limit: usize) -> Vec<Item> {
    catalog
        .iter()
        .filter(|other| other.id != item.id && other.category == item.category)
        .take(limit)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
