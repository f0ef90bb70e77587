/// Catalog, user and swap identifiers are opaque strings (`item_1`, `user_2`).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
