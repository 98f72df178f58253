const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];

/// Human-readable size with base 1024, e.g. `1536` -> `"1.5 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    let mut divisor = 1u64;
    while exponent < UNITS.len() - 1 && bytes >= divisor * 1024 {
        divisor *= 1024;
        exponent += 1;
    }
    let value = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;

    format!("{} {}", trim_decimal(value), UNITS[exponent])
}

fn trim_decimal(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
