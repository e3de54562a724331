//! Grid of media tiles with hover previews and a lightbox.

pub mod preview;
pub mod tiles;
