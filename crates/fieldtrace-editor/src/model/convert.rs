//! Conversions between host geometries, editor rings and `geo` types.

use fieldtrace_core::{FieldGeometry, Position, Ring, Vertex};
use geo::{Coord, LineString, MultiPolygon, Polygon};

pub fn vertex_to_coord(vertex: &Vertex) -> Coord<f64> {
    Coord {
        x: vertex.lng,
        y: vertex.lat,
    }
}

fn coord_to_position(coord: &Coord<f64>) -> Position {
    [coord.x, coord.y]
}

fn position_to_coord(position: &Position) -> Coord<f64> {
    Coord {
        x: position[0],
        y: position[1],
    }
}

/// Closed line string for a ring (first vertex repeated last).
pub fn ring_to_line_string(ring: &Ring) -> LineString<f64> {
    let mut line: LineString<f64> = ring.iter().map(vertex_to_coord).collect();
    line.close();
    line
}

/// Open ring from a line string; a closing coordinate is dropped.
pub fn line_string_to_ring(line: &LineString<f64>) -> Ring {
    let mut coords = line.0.as_slice();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords = &coords[..coords.len() - 1];
    }
    coords
        .iter()
        .map(|c| Vertex::new(c.y, c.x))
        .collect()
}

/// Converts a host geometry into a `geo` multipolygon.
///
/// Polygons without an exterior ring are skipped.
pub fn field_geometry_to_multi_polygon(geometry: &FieldGeometry) -> MultiPolygon<f64> {
    let polygons = geometry
        .polygons()
        .iter()
        .filter_map(|rings| {
            let (exterior, holes) = rings.split_first()?;
            let to_line = |ring: &Vec<Position>| -> LineString<f64> {
                ring.iter().map(position_to_coord).collect()
            };
            Some(Polygon::new(
                to_line(exterior),
                holes.iter().map(to_line).collect(),
            ))
        })
        .collect();
    MultiPolygon::new(polygons)
}

/// Converts a multipolygon back into a host geometry.
///
/// Returns `None` when there are no polygons, a `Polygon` for one part and
/// a `MultiPolygon` otherwise.
pub fn multi_polygon_to_field_geometry(geometry: &MultiPolygon<f64>) -> Option<FieldGeometry> {
    let polygons = geometry
        .iter()
        .map(|polygon| {
            std::iter::once(polygon.exterior())
                .chain(polygon.interiors().iter())
                .map(|ring| ring.coords().map(coord_to_position).collect::<Vec<Position>>())
                .collect::<Vec<Vec<Position>>>()
        })
        .collect();
    FieldGeometry::from_polygons(polygons)
}
