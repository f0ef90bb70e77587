//! ReWear domain logic: catalog model, filter/sort/fit engine, and the
//! supporting marketplace rules. No storage or presentation concerns live
//! here.

pub mod assistant;
pub mod browse;
pub mod error;
pub mod fit;
pub mod item;
pub mod listing;
pub mod moderation;
pub mod query;
pub mod simulation;
pub mod swap;
pub mod types;

#[cfg(test)]
mod test_support;

pub use fit::{compute_fit_match, FitLabel, FitMatch, MeasurementProfile};
pub use item::Item;
pub use query::{query_catalog, FilterCriteria, SortKey};
