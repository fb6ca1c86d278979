//! Types and functions on geometries in cartesian coordinates.

mod coord;
mod envelope;
mod orient;
mod traits;

pub use coord::{unique_coordinates, Coord};
pub use envelope::Envelope;
pub use orient::{orientation_index, robust_orientation_index, sign_of_det_2x2, Orientation};
pub use traits::*;
