//! Human-readable byte-size formatting.

/// Default unit ladder. The formatter divides by 1024 per step and stops at
/// the last unit regardless of magnitude.
pub const BYTE_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Formats `bytes` with the default unit ladder.
///
/// The rendered value always carries exactly one fractional digit:
/// `1536` becomes `"1.5 KiB"`, `0` becomes `"0.0 B"`.
pub fn format_bytes(bytes: u64) -> String {
    let (value, index) = scale(bytes, BYTE_UNITS.len());
    format!("{value:.1} {}", BYTE_UNITS[index])
}

/// Formats `bytes` with a caller-supplied unit ladder.
///
/// The ladder saturates: once the last unit is reached the value is no
/// longer divided, so `1024^5` with the default ladder is `"1024.0 TiB"`.
pub fn format_bytes_with(bytes: u64, units: &[String]) -> String {
    if units.is_empty() {
        return format!("{bytes}");
    }
    let (value, index) = scale(bytes, units.len());
    format!("{value:.1} {}", units[index])
}

fn scale(bytes: u64, ladder_len: usize) -> (f64, usize) {
    let mut value = bytes as f64;
    let mut index = 0;
    while value >= 1024.0 && index < ladder_len - 1 {
        value /= 1024.0;
        index += 1;
    }
    (value, index)
}
