use crate::foundation::error::VitrineResult;

/// Inline player behind a video tile.
pub trait PreviewPlayer {
    /// Start muted playback. Hosts may refuse (autoplay policy).
    fn play(&mut self) -> VitrineResult<()>;
    fn pause(&mut self);
    /// Seek back to the first frame.
    fn rewind(&mut self);
}
