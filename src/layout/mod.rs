//! Geometry decisions shared by the view glue: carousel strips, aspect fit
//! and gallery grid tracks.

pub mod carousel;
pub mod fit;
pub mod grid;
