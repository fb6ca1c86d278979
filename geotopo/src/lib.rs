//! Robust planar geometry predicates and constructions.
//!
//! The crate works on a minimal read-only geometry model ([`Coord`], [`LineString`], [`LinearRing`], [`Polygon`],
//! [`GeometryCollection`] and the [`Geom`] sum type over them) and provides:
//!
//! * orientation and determinant sign predicates ([`cartesian::orientation_index`])
//! * point-in-ring tests, brute force and indexed by monotone chains in an interval tree
//!   ([`algorithm::PointInRing`])
//! * segment intersection with collinear overlap handling ([`algorithm::RobustLineIntersector`])
//! * area, line and point centroids ([`algorithm::centroid`])
//! * convex hull ([`algorithm::ConvexHull`]) and minimum width ([`algorithm::MinimumDiameter`])
//!
//! All coordinates are expected to be finite and in a planar reference system. Reprojection is outside of the
//! crate, see [`projection::Projection`] for the seam it is plugged into.
//!
//! ```
//! use geotopo::algorithm::{is_point_in_ring, signed_area};
//! use geotopo::{Coord, LinearRing};
//!
//! let ring = LinearRing::new(
//!     [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)].map(Coord::from).to_vec(),
//! ).unwrap();
//!
//! assert!(is_point_in_ring(&Coord::new(5.0, 5.0), &ring));
//! assert!(!is_point_in_ring(&Coord::new(15.0, 5.0), &ring));
//! assert_eq!(signed_area(&ring), 100.0);
//! ```

pub mod algorithm;
pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geometry;
pub mod index;
pub mod polygon;
pub mod precision;
pub mod projection;
pub mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use cartesian::{Coord, Envelope};
pub use contour::{LineString, LinearRing};
pub use error::TopologyError;
pub use geometry::{Dimension, Geom, GeometryCollection};
pub use polygon::Polygon;
pub use segment::LineSegment;
