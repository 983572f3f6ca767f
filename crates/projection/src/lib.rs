//! Projection transforms between integer projected coordinates and
//! latitude/longitude.
//!
//! The closed-form projections are implemented here; no projection library is used.

pub mod bounds;
pub mod geographic;
pub mod polar;
pub mod sinusoidal;
pub mod transform;

pub use bounds::geographic_bounds;
pub use geographic::Geographic;
pub use polar::{Hemisphere, PolarStereographic};
pub use sinusoidal::Sinusoidal;
pub use transform::ProjectionTransform;
