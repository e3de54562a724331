//! Media items and where their files are served from.

pub mod config;
pub mod media;
