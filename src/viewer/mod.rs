//! Lightbox for a single media item.

pub mod modal;
