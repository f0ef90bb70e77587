//! Listing drafts for the "list an item" flow.
//!
//! A draft is filled in step by step (photos, details, review), optionally
//! pre-filled from an [`ItemAnalysis`], validated, and finally turned into a
//! catalog [`Item`].

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::item::{Category, Condition, Item, Size, UserSummary};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const MAX_TITLE_LENGTH: u64 = 100;
pub const MAX_DESCRIPTION_LENGTH: u64 = 1000;

/// Suggested Wear Coin price as a fraction of estimated value: 3/5 (60%).
const COIN_RATIO_NUM: u64 = 3;
const COIN_RATIO_DEN: u64 = 5;

/// Prefix for generated item ids.
pub const ITEM_ID_PREFIX: &str = "item_";

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Suggested details detected from uploaded photos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAnalysis {
    pub detected_category: Category,
    pub detected_type: String,
    pub suggested_title: String,
    pub condition: Condition,
    pub estimated_value: u32,
    pub suggested_tags: Vec<String>,
    pub size_detection: Size,
    pub fabric_detection: String,
}

impl ItemAnalysis {
    /// The fixed payload returned by the photo analysis mock.
    pub fn canned() -> Self {
        Self {
            detected_category: Category::Outerwear,
            detected_type: "Jacket".to_string(),
            suggested_title: "Vintage Denim Jacket".to_string(),
            condition: Condition::Excellent,
            estimated_value: 45,
            suggested_tags: ["vintage", "denim", "casual", "streetwear"]
                .into_iter()
                .map(String::from)
                .collect(),
            size_detection: Size::M,
            fabric_detection: "Cotton Denim".to_string(),
        }
    }
}

/// Suggested Wear Coin price for an estimated value, rounded down.
pub fn suggested_wear_coins(estimated_value: u32) -> u32 {
    (u64::from(estimated_value) * COIN_RATIO_NUM / COIN_RATIO_DEN) as u32
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingDraft {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "Title must be 1-100 characters"))]
    pub title: String,
    #[validate(length(
        min = 1,
        max = MAX_DESCRIPTION_LENGTH,
        message = "Description must be 1-1000 characters"
    ))]
    pub description: String,
    #[validate(required(message = "Category is required"))]
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub garment_type: Option<String>,
    #[validate(required(message = "Size is required"))]
    pub size: Option<Size>,
    #[validate(required(message = "Condition is required"))]
    pub condition: Option<Condition>,
    pub tags: Vec<String>,
    #[validate(length(min = 1, message = "At least one photo is required"))]
    pub images: Vec<String>,
    pub estimated_value: u32,
    pub wear_coins: u32,
}

impl ListingDraft {
    /// Add a trimmed tag. Returns `false` for blank or duplicate tags.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn add_image(&mut self, image: impl Into<String>) {
        self.images.push(image.into());
    }

    /// Remove the image at `index`; out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Overwrite the detected fields with the analysis, merge its tags, and
    /// price the draft at the suggested rate.
    pub fn apply_analysis(&mut self, analysis: &ItemAnalysis) {
        self.category = Some(analysis.detected_category);
        self.garment_type = Some(analysis.detected_type.clone());
        self.title = analysis.suggested_title.clone();
        self.condition = Some(analysis.condition);
        self.size = Some(analysis.size_detection);
        for tag in &analysis.suggested_tags {
            self.add_tag(tag);
        }
        self.estimated_value = analysis.estimated_value;
        self.wear_coins = suggested_wear_coins(analysis.estimated_value);
    }

    /// Run the field rules, collapsing all violations into one error.
    ///
    /// Title and description are stored trimmed, so whitespace-only values
    /// are rejected here even though they satisfy the length rules.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("Title must not be blank".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "Description must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and publish the draft as a new, available item.
    pub fn into_item(self, uploader: UserSummary, now: Timestamp) -> Result<Item, CoreError> {
        self.check()?;

        let (Some(category), Some(size), Some(condition)) =
            (self.category, self.size, self.condition)
        else {
            return Err(CoreError::Validation(
                "Category, size and condition are required".to_string(),
            ));
        };

        Ok(Item {
            id: format!("{ITEM_ID_PREFIX}{}", uuid::Uuid::new_v4().simple()),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            garment_type: self.garment_type,
            size,
            condition,
            wear_coins: self.wear_coins,
            tags: self.tags,
            images: self.images,
            uploader,
            is_available: true,
            uploaded_at: now,
            likes: 0,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;
    use crate::test_support::user;

    fn complete_draft() -> ListingDraft {
        let mut draft = ListingDraft {
            description: "Worn twice".to_string(),
            ..Default::default()
        };
        draft.add_image("/uploads/jacket.jpg");
        draft.apply_analysis(&ItemAnalysis::canned());
        draft
    }

    // -- Tags ----------------------------------------------------------------

    #[test]
    fn add_tag_trims_and_dedupes() {
        let mut draft = ListingDraft::default();
        assert!(draft.add_tag("  boho "));
        assert!(!draft.add_tag("boho"));
        assert!(!draft.add_tag("   "));
        assert_eq!(draft.tags, ["boho"]);
    }

    #[test]
    fn remove_tag_drops_exact_match() {
        let mut draft = ListingDraft::default();
        draft.add_tag("a");
        draft.add_tag("b");
        draft.remove_tag("a");
        assert_eq!(draft.tags, ["b"]);
    }

    #[test]
    fn remove_image_ignores_bad_index() {
        let mut draft = ListingDraft::default();
        draft.add_image("one");
        draft.remove_image(3);
        assert_eq!(draft.images.len(), 1);
        draft.remove_image(0);
        assert!(draft.images.is_empty());
    }

    // -- Analysis ------------------------------------------------------------

    #[test]
    fn analysis_fills_fields_and_prices_at_sixty_percent() {
        let mut draft = ListingDraft::default();
        draft.add_tag("denim");
        draft.add_tag("mine");
        draft.apply_analysis(&ItemAnalysis::canned());

        assert_eq!(draft.title, "Vintage Denim Jacket");
        assert_eq!(draft.category, Some(Category::Outerwear));
        assert_eq!(draft.size, Some(Size::M));
        assert_eq!(draft.condition, Some(Condition::Excellent));
        assert_eq!(draft.garment_type.as_deref(), Some("Jacket"));
        assert_eq!(draft.estimated_value, 45);
        assert_eq!(draft.wear_coins, 27);
        assert_eq!(draft.tags, ["denim", "mine", "vintage", "casual", "streetwear"]);
    }

    #[test]
    fn suggested_coins_round_down() {
        assert_eq!(suggested_wear_coins(0), 0);
        assert_eq!(suggested_wear_coins(9), 5);
        assert_eq!(suggested_wear_coins(u32::MAX), (u64::from(u32::MAX) * 3 / 5) as u32);
    }

    // -- Validation ----------------------------------------------------------

    #[test]
    fn empty_draft_fails_validation() {
        assert_matches!(ListingDraft::default().check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn draft_without_photos_is_rejected() {
        let mut draft = complete_draft();
        draft.remove_image(0);
        let err = draft.check().unwrap_err();
        assert!(err.to_string().contains("photo"));
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut draft = complete_draft();
        draft.title = "x".repeat(MAX_TITLE_LENGTH as usize + 1);
        assert_matches!(draft.check(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn whitespace_only_title_or_description_is_rejected() {
        let mut draft = complete_draft();
        draft.title = "   ".to_string();
        let err = draft.check().unwrap_err();
        assert!(err.to_string().contains("Title"));

        let mut draft = complete_draft();
        draft.description = "\t \n".to_string();
        assert_matches!(
            draft.into_item(user("user_1", "Sarah Chen"), Utc::now()),
            Err(CoreError::Validation(_))
        );
    }

    // -- Publishing ----------------------------------------------------------

    #[test]
    fn into_item_produces_available_listing() {
        let now = Utc::now();
        let item = complete_draft()
            .into_item(user("user_1", "Sarah Chen"), now)
            .unwrap();
        assert!(item.id.starts_with(ITEM_ID_PREFIX));
        assert!(item.is_available);
        assert_eq!(item.uploaded_at, now);
        assert_eq!(item.wear_coins, 27);
        assert_eq!(item.main_image(), Some("/uploads/jacket.jpg"));
    }

    #[test]
    fn into_item_generates_unique_ids() {
        let a = complete_draft().into_item(user("u", "n"), Utc::now()).unwrap();
        let b = complete_draft().into_item(user("u", "n"), Utc::now()).unwrap();
        assert_ne!(a.id, b.id);
    }
}
