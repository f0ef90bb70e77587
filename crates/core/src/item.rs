//! Catalog item model and its fixed enumerations.
//!
//! Field names serialize in camelCase so fixture files keep the shape used by
//! the browser front end (`wearCoins`, `isAvailable`, `uploadedAt`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// Selector value meaning "do not filter on this field".
pub const ALL: &str = "All";

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

pub const CATEGORY_TOPS: &str = "Tops";
pub const CATEGORY_BOTTOMS: &str = "Bottoms";
pub const CATEGORY_DRESSES: &str = "Dresses";
pub const CATEGORY_OUTERWEAR: &str = "Outerwear";
pub const CATEGORY_SHOES: &str = "Shoes";
pub const CATEGORY_ACCESSORIES: &str = "Accessories";
pub const CATEGORY_BAGS: &str = "Bags";

/// All valid item categories, in menu order.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_TOPS,
    CATEGORY_BOTTOMS,
    CATEGORY_DRESSES,
    CATEGORY_OUTERWEAR,
    CATEGORY_SHOES,
    CATEGORY_ACCESSORIES,
    CATEGORY_BAGS,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
    Bags,
}

impl Category {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            CATEGORY_TOPS => Ok(Self::Tops),
            CATEGORY_BOTTOMS => Ok(Self::Bottoms),
            CATEGORY_DRESSES => Ok(Self::Dresses),
            CATEGORY_OUTERWEAR => Ok(Self::Outerwear),
            CATEGORY_SHOES => Ok(Self::Shoes),
            CATEGORY_ACCESSORIES => Ok(Self::Accessories),
            CATEGORY_BAGS => Ok(Self::Bags),
            _ => Err(format!(
                "Invalid category '{s}'. Must be one of: {}",
                VALID_CATEGORIES.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tops => CATEGORY_TOPS,
            Self::Bottoms => CATEGORY_BOTTOMS,
            Self::Dresses => CATEGORY_DRESSES,
            Self::Outerwear => CATEGORY_OUTERWEAR,
            Self::Shoes => CATEGORY_SHOES,
            Self::Accessories => CATEGORY_ACCESSORIES,
            Self::Bags => CATEGORY_BAGS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Letter sizes, smallest first.
pub const LETTER_SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];

/// Smallest and largest EU shoe size carried by the catalog.
pub const MIN_SHOE_SIZE: u8 = 36;
pub const MAX_SHOE_SIZE: u8 = 45;

/// Garment size: a letter size or an EU shoe size.
///
/// Serialized as the plain label (`"M"`, `"42"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
    Shoe(u8),
}

impl Size {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "XS" => Ok(Self::Xs),
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::Xl),
            "XXL" => Ok(Self::Xxl),
            other => match other.parse::<u8>() {
                Ok(n) if (MIN_SHOE_SIZE..=MAX_SHOE_SIZE).contains(&n) => Ok(Self::Shoe(n)),
                _ => Err(format!(
                    "Invalid size '{s}'. Must be one of: {}, or a shoe size {MIN_SHOE_SIZE}-{MAX_SHOE_SIZE}",
                    LETTER_SIZES.join(", ")
                )),
            },
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Xs => "XS".to_string(),
            Self::S => "S".to_string(),
            Self::M => "M".to_string(),
            Self::L => "L".to_string(),
            Self::Xl => "XL".to_string(),
            Self::Xxl => "XXL".to_string(),
            Self::Shoe(n) => n.to_string(),
        }
    }
}

impl TryFrom<String> for Size {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        size.label()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ---------------------------------------------------------------------------
// Condition
// ---------------------------------------------------------------------------

pub const CONDITION_LIKE_NEW: &str = "Like New";
pub const CONDITION_EXCELLENT: &str = "Excellent";
pub const CONDITION_GOOD: &str = "Good";
pub const CONDITION_FAIR: &str = "Fair";

/// All valid conditions, best first.
pub const VALID_CONDITIONS: &[&str] = &[
    CONDITION_LIKE_NEW,
    CONDITION_EXCELLENT,
    CONDITION_GOOD,
    CONDITION_FAIR,
];

/// Wear condition. The order only drives badge styling; it never ranks items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Like New")]
    LikeNew,
    Excellent,
    Good,
    Fair,
}

impl Condition {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            CONDITION_LIKE_NEW => Ok(Self::LikeNew),
            CONDITION_EXCELLENT => Ok(Self::Excellent),
            CONDITION_GOOD => Ok(Self::Good),
            CONDITION_FAIR => Ok(Self::Fair),
            _ => Err(format!(
                "Invalid condition '{s}'. Must be one of: {}",
                VALID_CONDITIONS.join(", ")
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LikeNew => CONDITION_LIKE_NEW,
            Self::Excellent => CONDITION_EXCELLENT,
            Self::Good => CONDITION_GOOD,
            Self::Fair => CONDITION_FAIR,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

pub const VALID_GENDERS: &[&str] = &["Women", "Men", "Unisex"];

/// Gender selector offered by the browse filters.
///
/// Items carry no gender attribute, so this never narrows a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Women,
    Men,
    Unisex,
}

impl Gender {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "Women" => Ok(Self::Women),
            "Men" => Ok(Self::Men),
            "Unisex" => Ok(Self::Unisex),
            _ => Err(format!(
                "Invalid gender '{s}'. Must be one of: {}",
                VALID_GENDERS.join(", ")
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

/// Public profile of the member who listed an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
}

/// A listed garment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Free-text garment type, e.g. "Jacket" or "Sneakers".
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub garment_type: Option<String>,
    pub size: Size,
    pub condition: Condition,
    pub wear_coins: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image references; the first one is the main photo.
    pub images: Vec<String>,
    pub uploader: UserSummary,
    pub is_available: bool,
    pub uploaded_at: Timestamp,
    /// Like (wishlist) count, used as the popularity metric.
    #[serde(default)]
    pub likes: u32,
}

impl Item {
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
