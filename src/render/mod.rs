//! Rendering: backend-agnostic frame plans and the CPU rasterizer.

pub mod backend;
pub mod cpu;
pub mod plan;
