//! Common test fixtures for scene browser tests.
//!
//! Extents are `(min_lon, min_lat, max_lon, max_lat)` in degrees unless noted.

/// Locator-map extents.
pub mod extent {
    /// Whole world
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// North America locator with its pan limit
    pub const NORTH_AMERICA: (f64, f64, f64, f64) = (-128.04, 14.0, -60.74, 55.0);

    /// Pacific map crossing the antimeridian (west edge > east edge)
    pub const PACIFIC: (f64, f64, f64, f64) = (150.0, -50.0, -150.0, 10.0);

    /// Antarctic polar-stereographic extent in meters
    pub const ANTARCTIC_METERS: (f64, f64, f64, f64) =
        (-3_000_000.0, -3_000_000.0, 3_000_000.0, 3_000_000.0);
}

/// Locator raster sizes in pixels.
pub mod raster {
    /// World locator raster (width, height)
    pub const WORLD: (u32, u32) = (1007, 503);

    /// North America locator raster
    pub const NORTH_AMERICA: (u32, u32) = (673, 410);
}

/// Grid cells with well-known locations.
pub mod cells {
    /// WRS-2 path/row over Sioux Falls, SD
    pub const SIOUX_FALLS: (i32, i32) = (29, 30);

    /// WRS-2 path/row over the San Francisco Bay area
    pub const SAN_FRANCISCO: (i32, i32) = (44, 34);

    /// WRS-2 descending row at the equator
    pub const EQUATOR_ROW: i32 = 60;
}

/// Asset names used by locator-map tests.
pub mod assets {
    pub const WORLD_BASE: &str = "world.png";
    pub const WORLD_BOUNDARIES: &str = "world_boundaries.png";
    pub const NA_BASE: &str = "north_america.png";
}
