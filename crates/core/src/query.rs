//! Catalog filtering and sorting.
//!
//! [`query_catalog`] is a pure function over a catalog snapshot: it never
//! mutates its input and has no error paths. Criteria built from user input
//! go through [`FilterCriteria::from_raw`], which degrades anything it does
//! not recognise to the "All" sentinel.

use serde::{Deserialize, Serialize};

use crate::item::{Category, Condition, Gender, Item, Size, ALL};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default lower bound of the Wear Coin slider.
pub const DEFAULT_MIN_COINS: u32 = 0;

/// Default upper bound of the Wear Coin slider.
pub const DEFAULT_MAX_COINS: u32 = 100;

// ---------------------------------------------------------------------------
// Sort key
// ---------------------------------------------------------------------------

pub const SORT_NEWEST: &str = "newest";
pub const SORT_OLDEST: &str = "oldest";
pub const SORT_PRICE_ASC: &str = "price-asc";
pub const SORT_PRICE_DESC: &str = "price-desc";
pub const SORT_POPULARITY: &str = "popularity";

pub const VALID_SORT_KEYS: &[&str] = &[
    SORT_NEWEST,
    SORT_OLDEST,
    SORT_PRICE_ASC,
    SORT_PRICE_DESC,
    SORT_POPULARITY,
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    /// Most liked first.
    Popularity,
}

impl SortKey {
    /// Parse a sort key. Also accepts the browse page's legacy spellings
    /// (`price-low`, `price-high`, `popular`).
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            SORT_NEWEST => Ok(Self::Newest),
            SORT_OLDEST => Ok(Self::Oldest),
            SORT_PRICE_ASC | "price-low" => Ok(Self::PriceAsc),
            SORT_PRICE_DESC | "price-high" => Ok(Self::PriceDesc),
            SORT_POPULARITY | "popular" => Ok(Self::Popularity),
            _ => Err(format!(
                "Invalid sort key '{s}'. Must be one of: {}",
                VALID_SORT_KEYS.join(", ")
            )),
        }
    }

    /// Lenient variant of [`Self::from_str_value`]; unknown keys sort newest first.
    pub fn from_str_lenient(s: &str) -> Self {
        Self::from_str_value(s.trim()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => SORT_NEWEST,
            Self::Oldest => SORT_OLDEST,
            Self::PriceAsc => SORT_PRICE_ASC,
            Self::PriceDesc => SORT_PRICE_DESC,
            Self::Popularity => SORT_POPULARITY,
        }
    }
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Inclusive Wear Coin range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    /// Build a range, swapping the bounds if they arrive inverted.
    pub fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// A range that admits every price.
    pub fn unbounded() -> Self {
        Self {
            min: 0,
            max: u32::MAX,
        }
    }

    pub fn contains(&self, coins: u32) -> bool {
        (self.min..=self.max).contains(&coins)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_COINS,
            max: DEFAULT_MAX_COINS,
        }
    }
}

/// Typed filter criteria. `None` on a selector is the "All" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub category: Option<Category>,
    pub size: Option<Size>,
    pub condition: Option<Condition>,
    /// Carried for the browse UI; items have no gender, so it never filters.
    pub gender: Option<Gender>,
    pub price_range: PriceRange,
}

/// Untyped criteria as collected from form controls or command-line flags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCriteria {
    pub search: Option<String>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub condition: Option<String>,
    pub gender: Option<String>,
    pub min_coins: Option<u32>,
    pub max_coins: Option<u32>,
}

/// Parse a selector, mapping "All", blanks and unknown values to `None`.
fn lenient_selector<T>(raw: Option<&str>, parse: fn(&str) -> Result<T, String>) -> Option<T> {
    let value = raw?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(ALL) {
        return None;
    }
    parse(value).ok()
}

impl FilterCriteria {
    /// Build criteria from raw input. Never fails: unrecognised selector
    /// values become "All" and a missing price bound is left open.
    pub fn from_raw(raw: &RawCriteria) -> Self {
        let price_range = PriceRange::new(
            raw.min_coins.unwrap_or(0),
            raw.max_coins.unwrap_or(u32::MAX),
        );

        Self {
            search: raw.search.clone().unwrap_or_default(),
            category: lenient_selector(raw.category.as_deref(), Category::from_str_value),
            size: lenient_selector(raw.size.as_deref(), Size::from_str_value),
            condition: lenient_selector(raw.condition.as_deref(), Condition::from_str_value),
            gender: lenient_selector(raw.gender.as_deref(), Gender::from_str_value),
            price_range,
        }
    }

    /// Whether `item` satisfies every active criterion.
    pub fn matches(&self, item: &Item) -> bool {
        matches_search(item, &self.search)
            && self.category.map_or(true, |c| item.category == c)
            && self.size.map_or(true, |s| item.size == s)
            && self.condition.map_or(true, |c| item.condition == c)
            // Gender is accepted but not applied: no item carries one.
            && self.price_range.contains(item.wear_coins)
    }
}

/// Case-insensitive substring match on title, description, or any tag.
/// A blank needle matches everything; otherwise it is matched as typed,
/// surrounding whitespace included.
pub fn matches_search(item: &Item, needle: &str) -> bool {
    if needle.trim().is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();

    item.title.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
        || item.tags.iter().any(|t| t.to_lowercase().contains(&needle))
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Sort items in place. The sort is stable, so ties keep their input order.
pub fn sort_items(items: &mut [Item], sort: SortKey) {
    match sort {
        SortKey::Newest => items.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at)),
        SortKey::Oldest => items.sort_by(|a, b| a.uploaded_at.cmp(&b.uploaded_at)),
        SortKey::PriceAsc => items.sort_by_key(|i| i.wear_coins),
        SortKey::PriceDesc => items.sort_by(|a, b| b.wear_coins.cmp(&a.wear_coins)),
        SortKey::Popularity => items.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }
}

/// Filter `catalog` by `criteria` and order the survivors by `sort`.
pub fn query_catalog(catalog: &[Item], criteria: &FilterCriteria, sort: SortKey) -> Vec<Item> {
    let mut results: Vec<Item> = catalog
        .iter()
        .filter(|item| criteria.matches(item))
        .cloned()
        .collect();
    sort_items(&mut results, sort);
    results
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
