use embassy_time::Duration;

/// Calculate fade progress (0.0-1.0) based on elapsed time and duration
///
/// A zero duration yields 1.0 so that the fade jumps straight to its target.
#[allow(clippy::cast_precision_loss)]
#[inline]
pub fn progress(elapsed: Duration, duration: Duration) -> f32 {
    let progress = elapsed.as_micros() as f32 / duration.as_micros() as f32;
    // Also catches NaN and infinity
    if progress < 1.0 { progress.max(0.0) } else { 1.0 }
}

/// Convert fractional seconds into a duration, rounding down to whole microseconds
///
/// Returns `None` for negative or non-finite input.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn duration_from_secs_f64(secs: f64) -> Option<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some(Duration::from_micros((secs * 1_000_000.0) as u64))
}
