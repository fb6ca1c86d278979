//! Spatial indexes used to speed up repeated queries.

mod bintree;
mod interval;
mod monotone_chain;

pub use bintree::Bintree;
pub use interval::Interval;
pub use monotone_chain::{build_chains, MonotoneChain};
