/// Gap between gallery tracks (`1.5rem` at 16 px).
pub const GRID_GAP_PX: f64 = 24.0;
/// Minimum track width of the poster gallery.
pub const POSTER_MIN_TRACK_PX: f64 = 220.0;
/// Minimum track width of every other gallery.
pub const DEFAULT_MIN_TRACK_PX: f64 = 320.0;

/// Column count of `repeat(auto-fill, minmax(min_track, 1fr))` with `gap`.
///
/// At least one column is always produced, even when the container is
/// narrower than a single track.
pub fn auto_fill_columns(container_width: f64, min_track: f64, gap: f64) -> usize {
    if !container_width.is_finite() || min_track <= 0.0 {
        return 1;
    }
    let n = ((container_width + gap) / (min_track + gap)).floor();
    if n < 1.0 { 1 } else { n as usize }
}

/// Width of each track once `columns` share the container.
pub fn track_width(container_width: f64, columns: usize, gap: f64) -> f64 {
    let columns = columns.max(1) as f64;
    ((container_width - gap * (columns - 1.0)) / columns).max(0.0)
}
