//! Human-readable timecode formatting.

/// Frame rate used for the frame component of formatted timecodes.
///
/// Fixed at 30 regardless of the project's real frame rate.
pub const TIMECODE_FPS: f64 = 30.0;

/// Format a position in seconds as `HH:MM:SS:FF` (frames at 30 fps).
///
/// Negative input is treated as zero.
///
/// ```
/// use cliptime_core::time::format_timecode;
/// assert_eq!(format_timecode(0.0), "00:00:00:00");
/// assert_eq!(format_timecode(61.5), "00:01:01:15");
/// assert_eq!(format_timecode(3725.5), "01:02:05:15");
/// ```
pub fn format_timecode(seconds: f64) -> String {
    let s = seconds.max(0.0);
    let hours = (s / 3600.0).floor() as u64;
    let minutes = ((s % 3600.0) / 60.0).floor() as u64;
    let secs = (s % 60.0).floor() as u64;
    let frames = ((s % 1.0) * TIMECODE_FPS).floor() as u64;
    format!("{hours:02}:{minutes:02}:{secs:02}:{frames:02}")
}
