//! Common types shared across the scene browser crates.

pub mod bbox;
pub mod coord;
pub mod error;
pub mod progress;
pub mod time;

pub use bbox::GeographicBox;
pub use coord::{wrap_longitude, GeographicCoordinate, GridCell, ProjectedCoordinate};
pub use error::{GeoError, GeoResult};
pub use progress::{ProgressTracker, WorkProgress};
pub use time::YearMonth;
