//! Scene date browsing within a grid cell.
//!
//! [`SceneDateFilter`] keeps one date cursor per visited grid cell over an
//! externally owned [`SceneCatalog`]. Visibility comes from a
//! [`VisibilitySnapshot`] computed by a [`ScenePredicate`], either inline or
//! on a worker thread through [`FilterJob`], and swapped in whole.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod job;
pub mod predicate;
pub mod snapshot;

pub use catalog::{SceneCatalog, SceneDateEntry};
pub use error::{FilterError, PredicateError, Result};
pub use filter::SceneDateFilter;
pub use job::{evaluate, FilterJob};
pub use predicate::{AllOf, CloudCoverPredicate, DateRangePredicate, ScenePredicate};
pub use snapshot::VisibilitySnapshot;
