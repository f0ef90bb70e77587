//! Listing moderation states for the admin panel.
//!
//! Every new listing waits in `pending`. Pending listings can be approved or
//! rejected; pending or approved listings can be flagged. Rejection is final.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
    Flagged,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Flagged => "flagged",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationRecord {
    pub item_id: EntityId,
    pub status: ModerationStatus,
    pub report_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decided_at: Option<Timestamp>,
}

impl ModerationRecord {
    pub fn new(item_id: impl Into<EntityId>) -> Self {
        Self {
            item_id: item_id.into(),
            status: ModerationStatus::Pending,
            report_count: 0,
            decided_at: None,
        }
    }

    fn decide(
        &mut self,
        allowed_from: &[ModerationStatus],
        next: ModerationStatus,
        now: Timestamp,
    ) -> Result<(), CoreError> {
        if !allowed_from.contains(&self.status) {
            return Err(CoreError::Conflict(format!(
                "Item {} is {} and cannot be {}",
                self.item_id,
                self.status.as_str(),
                next.as_str()
            )));
        }
        self.status = next;
        self.decided_at = Some(now);
        Ok(())
    }

    pub fn approve(&mut self, now: Timestamp) -> Result<(), CoreError> {
        self.decide(&[ModerationStatus::Pending], ModerationStatus::Approved, now)
    }

    pub fn reject(&mut self, now: Timestamp) -> Result<(), CoreError> {
        self.decide(&[ModerationStatus::Pending], ModerationStatus::Rejected, now)
    }

    /// Flag a listing for review. Each flag also counts as a report.
    pub fn flag(&mut self, now: Timestamp) -> Result<(), CoreError> {
        self.decide(
            &[ModerationStatus::Pending, ModerationStatus::Approved],
            ModerationStatus::Flagged,
            now,
        )?;
        self.report_count += 1;
        Ok(())
    }
}

/// Per-status totals for the admin dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModerationCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub flagged: usize,
}

/// All moderation records, in submission order.
#[derive(Debug, Clone, Default)]
pub struct ModerationQueue {
    records: Vec<ModerationRecord>,
}

impl ModerationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a listing. Submitting the same item twice is a conflict.
    pub fn submit(&mut self, item_id: &str) -> Result<&ModerationRecord, CoreError> {
        if self.records.iter().any(|r| r.item_id == item_id) {
            return Err(CoreError::Conflict(format!(
                "Item {item_id} is already in moderation"
            )));
        }
        self.records.push(ModerationRecord::new(item_id));
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn get_mut(&mut self, item_id: &str) -> Result<&mut ModerationRecord, CoreError> {
        self.records
            .iter_mut()
            .find(|r| r.item_id == item_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "moderation record",
                id: item_id.to_string(),
            })
    }

    pub fn with_status(&self, status: ModerationStatus) -> Vec<&ModerationRecord> {
        self.records.iter().filter(|r| r.status == status).collect()
    }

    pub fn counts(&self) -> ModerationCounts {
        let mut counts = ModerationCounts::default();
        for record in &self.records {
            match record.status {
                ModerationStatus::Pending => counts.pending += 1,
                ModerationStatus::Approved => counts.approved += 1,
                ModerationStatus::Rejected => counts.rejected += 1,
                ModerationStatus::Flagged => counts.flagged += 1,
            }
        }
        counts
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

    #[test]
    fn approve_then_flag() {
        let mut record = ModerationRecord::new("item_1");
        record.approve(Utc::now()).unwrap();
        assert_eq!(record.status, ModerationStatus::Approved);
        record.flag(Utc::now()).unwrap();
        assert_eq!(record.status, ModerationStatus::Flagged);
        assert_eq!(record.report_count, 1);
    }

    #[test]
    fn rejected_is_final() {
        let mut record = ModerationRecord::new("item_1");
        record.reject(Utc::now()).unwrap();
        assert_matches!(record.approve(Utc::now()), Err(CoreError::Conflict(_)));
        assert_matches!(record.flag(Utc::now()), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn approved_cannot_be_rejected() {
        let mut record = ModerationRecord::new("item_1");
        record.approve(Utc::now()).unwrap();
        assert_matches!(record.reject(Utc::now()), Err(CoreError::Conflict(_)));
    }

    #[test]
    fn queue_counts_by_status() {
        let mut queue = ModerationQueue::new();
        for id in ["a", "b", "c", "d"] {
            queue.submit(id).unwrap();
        }
        queue.get_mut("a").unwrap().approve(Utc::now()).unwrap();
        queue.get_mut("b").unwrap().reject(Utc::now()).unwrap();
        queue.get_mut("c").unwrap().flag(Utc::now()).unwrap();

        assert_eq!(
            queue.counts(),
            ModerationCounts {
                pending: 1,
                approved: 1,
                rejected: 1,
                flagged: 1,
            }
        );
        assert_eq!(queue.with_status(ModerationStatus::Pending)[0].item_id, "d");
    }

    #[test]
    fn queue_rejects_duplicates_and_unknown_ids() {
        let mut queue = ModerationQueue::new();
        queue.submit("a").unwrap();
        assert_matches!(queue.submit("a"), Err(CoreError::Conflict(_)));
        assert_matches!(queue.get_mut("zzz"), Err(CoreError::NotFound { .. }));
    }
}
