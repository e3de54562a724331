//! Decorative background: random grid spots and a pointer glow.

pub mod config;
pub mod draw;
pub mod engine;
pub mod spot;
