//! Orbit-referenced path/row grids.
//!
//! A navigation model maps grid cells of a World Reference System to the
//! ground locations they represent and keeps path/row indices inside the
//! valid cyclic window for that system.

pub mod kind;
pub mod model;
pub mod orbit;
pub mod window;
pub mod wrs_model;

pub use kind::{NavigationModelKind, UnknownModelError};
pub use model::{GridDirection, NavigationModel};
pub use orbit::{Pass, WrsSystem};
pub use wrs_model::{AscendingWrsModel, DescendingWrsModel, WrsModel};
