//! Human-readable size formatting with a 1024 divisor.

const UNIT: u64 = 1024;
const UNITS: [&str; 5] = ["Bytes", "KiB", "MiB", "GiB", "TiB"];

/// Convert megabytes (MiB) to bytes, flooring fractional bytes.
/// Negative input is treated as zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::as_conversions
)]
pub fn mb_to_bytes(megabytes: f64) -> u64 {
    if megabytes <= 0.0 || megabytes.is_nan() {
        return 0;
    }
    (megabytes * 1024.0 * 1024.0).floor() as u64
}

/// Format a byte count, e.g. `1536` → `"1.5 KiB"`.
///
/// `decimals` bounds the fractional digits; trailing zeros are dropped, so
/// `1024` renders as `"1 KiB"`. Anything past TiB stays in TiB.
#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
pub fn bytes_to_string(bytes: u64, decimals: usize) -> String {
    if bytes < 1 {
        return "0 Bytes".to_owned();
    }

    let index = unit_index(bytes);
    let value = bytes as f64 / UNIT.pow(u32::try_from(index).unwrap_or(0)) as f64;
    let formatted = format!("{value:.decimals$}");
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };

    format!("{trimmed} {}", UNITS[index])
}

/// Format a megabyte limit, where `0` means no limit at all.
#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
pub fn limit_to_string(megabytes: u64) -> String {
    if megabytes == 0 {
        return "Unlimited".to_owned();
    }
    bytes_to_string(mb_to_bytes(megabytes as f64), 2)
}

/// Index into `UNITS` for a non-zero byte count.
fn unit_index(bytes: u64) -> usize {
    let mut index = 0;
    let mut threshold = UNIT;
    while index < UNITS.len() - 1 && bytes >= threshold {
        index += 1;
        threshold = threshold.saturating_mul(UNIT);
    }
    index
}
