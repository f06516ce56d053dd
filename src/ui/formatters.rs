/// Format a duration in whole seconds as `M:SS`, or just `SS`.
///
/// With `with_minutes` the minutes come first, unpadded, followed by a colon.
/// Without it the minutes are dropped entirely, so `65` becomes `"05"`.
/// The seconds part is always two digits.
///
/// Durations are unsigned; callers holding a float position clamp negative
/// values to zero before formatting.
pub fn format_time(total_seconds: u64, with_minutes: bool) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    if with_minutes {
        format!("{}:{:02}", minutes, seconds)
    } else {
        format!("{:02}", seconds)
    }
}
