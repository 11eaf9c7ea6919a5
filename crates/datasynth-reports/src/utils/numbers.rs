/// Compact count: 1.2K, 3.4M
pub fn format_numbers(n: usize) -> String {
    match n {
        n if n >= 1_000_000 => format!("{:0.1}M", n as f64 / 1_000_000.0),
        n if n >= 1_000 => format!("{:0.1}K", n as f64 / 1_000.0),
        _ => n.to_string(),
    }
}

/// Share of `part` in `total`, in percent
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}
