//! Timestamp formatting for clip rendering.
//!
//! Highlights carry times as float seconds; the rendering side addresses
//! media with `HH:MM:SS(.mmm)` strings.

/// Format seconds into `HH:MM:SS` or `HH:MM:SS.mmm`.
///
/// Negative input is formatted as zero.
///
/// # Examples
/// ```
/// use reelcut_models::format_seconds;
/// assert_eq!(format_seconds(5445.0), "01:30:45");
/// assert_eq!(format_seconds(30.5), "00:00:30.500");
/// ```
pub fn format_seconds(total_secs: f64) -> String {
    let total_secs = total_secs.max(0.0);
    let hours = (total_secs / 3600.0).floor() as u32;
    let mins = ((total_secs % 3600.0) / 60.0).floor() as u32;
    let secs = total_secs % 60.0;

    // Include milliseconds if present
    if (secs - secs.floor()).abs() > 0.0001 {
        format!("{:02}:{:02}:{:06.3}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}:{:02}", hours, mins, secs.floor() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "00:00:00");
        assert_eq!(format_seconds(90.0), "00:01:30");
        assert_eq!(format_seconds(3661.0), "01:01:01");
        assert_eq!(format_seconds(30.25), "00:00:30.250");
        assert_eq!(format_seconds(-3.0), "00:00:00");
    }
}
