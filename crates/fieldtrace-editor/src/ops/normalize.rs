use fieldtrace_core::constants::MIN_CLOSED_RING_COORDS;
use geo::{Area, Coord, LineString, MultiPolygon, Polygon};

/// Snaps a multipolygon to a fixed coordinate grid.
///
/// Coordinates are rounded to `precision` decimal places, consecutive
/// duplicates are removed and rings are closed. Rings left with fewer than
/// four coordinates, or enclosing less than half a grid cell, are dropped;
/// a polygon whose exterior is dropped is dropped entirely.
pub fn normalize(geometry: &MultiPolygon<f64>, precision: u32) -> MultiPolygon<f64> {
    let scale = 10f64.powi(precision as i32);
    let min_area = 0.5 / (scale * scale);

    let polygons = geometry
        .iter()
        .filter_map(|polygon| {
            let exterior = snap_ring(polygon.exterior(), scale, min_area)?;
            let holes = polygon
                .interiors()
                .iter()
                .filter_map(|hole| snap_ring(hole, scale, min_area))
                .collect();
            Some(Polygon::new(exterior, holes))
        })
        .collect();
    MultiPolygon::new(polygons)
}

fn snap_ring(ring: &LineString<f64>, scale: f64, min_area: f64) -> Option<LineString<f64>> {
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(ring.0.len() + 1);
    for c in &ring.0 {
        if !c.x.is_finite() || !c.y.is_finite() {
            continue;
        }
        let snapped = Coord {
            x: (c.x * scale).round() / scale,
            y: (c.y * scale).round() / scale,
        };
        if coords.last() != Some(&snapped) {
            coords.push(snapped);
        }
    }

    let mut line = LineString::new(coords);
    line.close();
    if line.0.len() < MIN_CLOSED_RING_COORDS {
        return None;
    }
    if Polygon::new(line.clone(), vec![]).unsigned_area() < min_area {
        return None;
    }
    Some(line)
}
