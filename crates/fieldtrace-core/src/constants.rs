//! Geographic constants.

/// Equatorial Earth radius in metres (WGS84 semi-major axis).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Square metres in one hectare.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Minimum number of vertices for a ring to enclose an area.
pub const MIN_RING_VERTICES: usize = 3;

/// Minimum number of coordinates of a closed ring (first vertex repeated).
pub const MIN_CLOSED_RING_COORDS: usize = 4;
