//! Geometry primitives: spherical area, ring/polygon conversion and
//! multi-ring consolidation.
//!
//! Internally every shape is a `geo::MultiPolygon<f64>` with `x = longitude`
//! and `y = latitude`; [`FieldGeometry`](fieldtrace_core::FieldGeometry) is
//! only used at the host boundary.

mod area;
mod convert;
mod rings;

pub use area::{
    geometry_area_hectares, multi_polygon_area_hectares, polygon_area_hectares, ring_area,
};
pub use convert::{
    field_geometry_to_multi_polygon, line_string_to_ring, multi_polygon_to_field_geometry,
    ring_to_line_string, vertex_to_coord,
};
pub use rings::{
    exterior_rings, merge_rings_to_multipolygon, ring_to_polygon, rings_to_multi_polygon,
};
