/// Size and percentage arithmetic — byte counts to report units.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the report and log formatting boundary.

/// Bytes in one gibibyte (2^30).
pub const GIB: u64 = 1 << 30;

/// Round to two decimal places, ties to even on the exact binary value.
///
/// `value * 100.0` may itself round onto a `.5`; the residual from
/// `mul_add` tells whether the exact product sat above or below it.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let floor = scaled.floor();
    let rounded = if scaled - floor == 0.5 {
        let residual = value.mul_add(100.0, -scaled);
        if residual > 0.0 {
            floor + 1.0
        } else if residual < 0.0 {
            floor
        } else {
            scaled.round_ties_even()
        }
    } else {
        scaled.round()
    };
    rounded / 100.0
}

/// Convert a byte count to gibibytes, rounded to two decimals.
pub fn bytes_to_gib(bytes: u64) -> f64 {
    round2(bytes as f64 / GIB as f64)
}

/// Percentage of `total` taken by `part`, rounded to two decimals.
///
/// Returns `0.0` when `total` is zero instead of dividing by zero.
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

/// Human-readable byte count for log lines, in the report's binary units.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    let s = count.to_string();
    if s.len() <= 3 {
        return s;
    }
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
