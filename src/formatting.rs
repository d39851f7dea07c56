//! Human-readable formatting for log lines

use std::time::Duration;

const BYTE_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Format bytes in binary units (`512 B`, `1.50 KB`, `27.95 MB`, ...)
#[inline]
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < BYTE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, BYTE_UNITS[unit])
}

/// Format a byte rate, e.g. `1.50 KB/s`
#[inline]
pub fn format_byte_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec.max(0.0) as u64))
}

/// Format a duration at second resolution (`42s`, `2m 5s`, `1h 2m 5s`)
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
