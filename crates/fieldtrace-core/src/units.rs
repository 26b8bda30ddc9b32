//! Area unit conversion and formatting.

use crate::constants::SQUARE_METERS_PER_HECTARE;

/// Converts square metres to hectares.
pub fn square_meters_to_hectares(square_meters: f64) -> f64 {
    square_meters / SQUARE_METERS_PER_HECTARE
}

/// Formats an area for display, e.g. `"12.35 ha"`.
pub fn format_hectares(hectares: f64) -> String {
    if !hectares.is_finite() {
        return "-- ha".to_string();
    }
    format!("{:.2} ha", hectares)
}
