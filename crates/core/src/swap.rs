//! Wear Coin wallet rules and swap request lifecycle.
//!
//! Listing an item earns [`LISTING_REWARD`] coins, requesting a swap costs
//! [`SWAP_REQUEST_COST`], and redeeming an item outright costs its price.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::item::Item;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Coins earned per published listing.
pub const LISTING_REWARD: u32 = 10;

/// Coins charged per swap request.
pub const SWAP_REQUEST_COST: u32 = 5;

pub const SWAP_ID_PREFIX: &str = "swap_";

// ---------------------------------------------------------------------------
// Wallet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: u32,
}

impl Wallet {
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }

    fn debit(&mut self, amount: u32) -> Result<(), CoreError> {
        if self.balance < amount {
            return Err(CoreError::InsufficientCoins {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }

    /// Credit the listing reward. Saturates rather than overflowing.
    pub fn credit_listing(&mut self) -> u32 {
        self.balance = self.balance.saturating_add(LISTING_REWARD);
        self.balance
    }

    pub fn charge_swap_request(&mut self) -> Result<u32, CoreError> {
        self.debit(SWAP_REQUEST_COST)?;
        Ok(self.balance)
    }

    /// Pay for `item` outright. The caller marks the item unavailable.
    pub fn redeem(&mut self, item: &Item) -> Result<u32, CoreError> {
        if !item.is_available {
            return Err(CoreError::Conflict(format!(
                "Item {} is no longer available",
                item.id
            )));
        }
        self.debit(item.wear_coins)?;
        Ok(self.balance)
    }
}

// ---------------------------------------------------------------------------
// Swap requests
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ACCEPTED: &str = "accepted";
pub const STATUS_DECLINED: &str = "declined";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    Pending,
    Accepted,
    Declined,
    Completed,
    Cancelled,
}

impl SwapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Accepted => STATUS_ACCEPTED,
            Self::Declined => STATUS_DECLINED,
            Self::Completed => STATUS_COMPLETED,
            Self::Cancelled => STATUS_CANCELLED,
        }
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    pub fn can_transition_to(&self, next: SwapStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted)
                | (Self::Pending, Self::Declined)
                | (Self::Pending, Self::Cancelled)
                | (Self::Accepted, Self::Completed)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub id: EntityId,
    pub requested_item_id: EntityId,
    pub offered_item_id: Option<EntityId>,
    pub requester_id: EntityId,
    pub owner_id: EntityId,
    pub status: SwapStatus,
    pub requested_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl SwapRequest {
    /// Open a pending request for `requested`, optionally offering `offered`.
    pub fn new(
        requester_id: &str,
        requested: &Item,
        offered: Option<&Item>,
        now: Timestamp,
    ) -> Result<Self, CoreError> {
        if requested.uploader.id == requester_id {
            return Err(CoreError::Validation(
                "Cannot request a swap for your own item".to_string(),
            ));
        }
        if !requested.is_available {
            return Err(CoreError::Conflict(format!(
                "Item {} is no longer available",
                requested.id
            )));
        }
        if let Some(offered) = offered {
            if offered.uploader.id != requester_id {
                return Err(CoreError::Validation(format!(
                    "Offered item {} does not belong to the requester",
                    offered.id
                )));
            }
            if !offered.is_available {
                return Err(CoreError::Conflict(format!(
                    "Offered item {} is no longer available",
                    offered.id
                )));
            }
        }

        Ok(Self {
            id: format!("{SWAP_ID_PREFIX}{}", uuid::Uuid::new_v4().simple()),
            requested_item_id: requested.id.clone(),
            offered_item_id: offered.map(|o| o.id.clone()),
            requester_id: requester_id.to_string(),
            owner_id: requested.uploader.id.clone(),
            status: SwapStatus::Pending,
            requested_at: now,
            completed_at: None,
        })
    }

    fn transition(&mut self, next: SwapStatus) -> Result<(), CoreError> {
        if !self.status.can_transition_to(next) {
            return Err(CoreError::Conflict(format!(
                "Swap {} cannot move from {} to {}",
                self.id,
                self.status.as_str(),
                next.as_str()
            )));
        }
        self.status = next;
        Ok(())
    }

    pub fn accept(&mut self) -> Result<(), CoreError> {
        self.transition(SwapStatus::Accepted)
    }

    pub fn decline(&mut self) -> Result<(), CoreError> {
        self.transition(SwapStatus::Declined)
    }

    pub fn cancel(&mut self) -> Result<(), CoreError> {
        self.transition(SwapStatus::Cancelled)
    }

    pub fn complete(&mut self, now: Timestamp) -> Result<(), CoreError> {
        self.transition(SwapStatus::Completed)?;
        self.completed_at = Some(now);
        Ok(())
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
    use crate::test_support::{item, user};

    fn owned_by(id: &str, owner: &str) -> Item {
        let mut i = item(id, 25, "2024-01-15T10:30:00Z");
        i.uploader = user(owner, owner);
        i
    }

    // -- Wallet --------------------------------------------------------------

    #[test]
    fn listing_reward_credits_ten() {
        let mut wallet = Wallet::new(245);
        assert_eq!(wallet.credit_listing(), 255);
    }

    #[test]
    fn swap_request_costs_five() {
        let mut wallet = Wallet::new(7);
        assert_eq!(wallet.charge_swap_request().unwrap(), 2);
        assert_matches!(
            wallet.charge_swap_request(),
            Err(CoreError::InsufficientCoins { required: 5, available: 2 })
        );
        assert_eq!(wallet.balance, 2);
    }

    #[test]
    fn redeem_charges_item_price() {
        let mut wallet = Wallet::new(30);
        assert_eq!(wallet.redeem(&owned_by("a", "user_2")).unwrap(), 5);
    }

    #[test]
    fn redeem_unavailable_item_conflicts() {
        let mut wallet = Wallet::new(100);
        let mut gone = owned_by("a", "user_2");
        gone.is_available = false;
        assert_matches!(wallet.redeem(&gone), Err(CoreError::Conflict(_)));
        assert_eq!(wallet.balance, 100);
    }

    // -- Requests ------------------------------------------------------------

    #[test]
    fn new_request_is_pending() {
        let wanted = owned_by("jacket", "user_2");
        let offer = owned_by("dress", "user_1");
        let swap = SwapRequest::new("user_1", &wanted, Some(&offer), Utc::now()).unwrap();
        assert_eq!(swap.status, SwapStatus::Pending);
        assert_eq!(swap.owner_id, "user_2");
        assert_eq!(swap.offered_item_id.as_deref(), Some("dress"));
    }

    #[test]
    fn cannot_request_own_item() {
        let mine = owned_by("jacket", "user_1");
        assert_matches!(
            SwapRequest::new("user_1", &mine, None, Utc::now()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn cannot_offer_someone_elses_item() {
        let wanted = owned_by("jacket", "user_2");
        let not_mine = owned_by("dress", "user_3");
        assert_matches!(
            SwapRequest::new("user_1", &wanted, Some(&not_mine), Utc::now()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn accepted_swap_completes_with_timestamp() {
        let wanted = owned_by("jacket", "user_2");
        let mut swap = SwapRequest::new("user_1", &wanted, None, Utc::now()).unwrap();
        swap.accept().unwrap();
        swap.complete(Utc::now()).unwrap();
        assert_eq!(swap.status, SwapStatus::Completed);
        assert!(swap.completed_at.is_some());
    }

    #[test]
    fn pending_swap_cannot_complete() {
        let wanted = owned_by("jacket", "user_2");
        let mut swap = SwapRequest::new("user_1", &wanted, None, Utc::now()).unwrap();
        assert_matches!(swap.complete(Utc::now()), Err(CoreError::Conflict(_)));
        assert!(swap.completed_at.is_none());
    }

    #[test]
    fn declined_swap_is_terminal() {
        let wanted = owned_by("jacket", "user_2");
        let mut swap = SwapRequest::new("user_1", &wanted, None, Utc::now()).unwrap();
        swap.decline().unwrap();
        assert_matches!(swap.accept(), Err(CoreError::Conflict(_)));
        assert_matches!(swap.cancel(), Err(CoreError::Conflict(_)));
    }
}
