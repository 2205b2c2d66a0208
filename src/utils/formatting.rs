//! Formatting utilities used for CLI and export outputs.

/// Format minutes as "X saat Y dakika", or "Y dakika" under one hour.
/// Negative inputs collapse to "0 dakika" (corrupted data never reaches
/// the user as a negative duration).
pub fn fmt_saat_dakika(total_minutes: i64) -> String {
    if total_minutes < 0 {
        return "0 dakika".to_string();
    }
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{} saat {} dakika", hours, minutes)
    } else {
        format!("{} dakika", minutes)
    }
}
