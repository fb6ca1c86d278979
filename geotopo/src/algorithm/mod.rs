//! Geometric predicates and constructions.

pub mod cg;

mod centroid;
mod convex_hull;
mod line_intersector;
mod minimum_diameter;
mod point_in_ring;

pub use centroid::{area_centroid, centroid, line_centroid, point_centroid};
pub use cg::{
    distance_line_line, distance_point_line, distance_point_line_perpendicular, is_ccw,
    is_on_line, is_point_in_ring, length, signed_area,
};
pub use convex_hull::{ConvexHull, DEFAULT_REDUCTION_THRESHOLD};
pub use line_intersector::{LineIntersection, RobustLineIntersector};
pub use minimum_diameter::MinimumDiameter;
pub use point_in_ring::{McPointInRing, PointInRing, SimplePointInRing};
