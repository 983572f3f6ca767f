//! Browse-session wiring for the scene browser.
//!
//! A [`DatasetDescriptor`] names the navigation model and download options
//! of one sensor dataset. A [`BrowseSession`] combines that model with a
//! locator map and a scene date filter and runs the click, step and extent
//! flows between them.

pub mod dataset;
pub mod error;
pub mod session;

pub use dataset::{DatasetCatalog, DatasetDescriptor, Resolution};
pub use error::{CatalogError, Result};
pub use session::BrowseSession;
