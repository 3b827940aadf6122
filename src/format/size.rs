//! Human-readable file sizes.

use rust_decimal::{Decimal, RoundingStrategy};

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with base-1024 units, e.g. `1.5 KB`.
///
/// The value is rounded to at most two decimals with trailing zeros
/// dropped. GB is the largest unit; bigger sizes stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".into();
    }
    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < UNITS.len() && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }
    let value = (Decimal::from(bytes) / Decimal::from(scale))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{value} {}", UNITS[unit])
}
