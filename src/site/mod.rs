//! Composition root and theme.

pub mod app;
pub mod style;
