//! Projected entities: single-facet prints and per-building footprints.

pub mod face;
pub mod footprint;

pub use face::FacePrint;
pub use footprint::BrickPrint;
