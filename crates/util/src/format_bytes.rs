/// Renders a byte count for display using binary (1024) scaling.
///
/// Units go Bytes/KB/MB/GB with at most two decimal places, trailing zeros
/// trimmed. Zero renders as the literal `"0 Bytes"`.
///
/// # Examples
///
/// ```
/// use json_toolbox_util::format_bytes::format_byte_size;
///
/// assert_eq!(format_byte_size(0), "0 Bytes");
/// assert_eq!(format_byte_size(512), "512 Bytes");
/// assert_eq!(format_byte_size(1024), "1 KB");
/// assert_eq!(format_byte_size(1536), "1.5 KB");
/// ```
pub fn format_byte_size(bytes: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{} {}", trim_decimals(scaled), UNITS[unit])
}

/// Two decimal places, then trailing zeros (and a bare point) removed.
fn trim_decimals(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
