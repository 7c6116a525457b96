//! Human-readable sizes and durations
//!
//! Byte sizes step at 1024 (`b`, `kb`, `Mb`, `Gb`, `Tb`), decimal sizes step
//! at 1000 (`k`, `M`, `G`, `T`), durations pick the largest unit that keeps
//! the number readable. These strings feed the codec's per-stage log records,
//! so their exact shape is part of the observable contract: `0 -> "0b"`,
//! `1023 -> "1023b"`, `1024 -> "1.00kb"`.

use std::time::Duration;

use crate::error::{CoreError, CoreResult};

const KIB: f64 = 1024.0;
const KILO: f64 = 1000.0;

/// Format a byte count with binary prefixes, two decimals from `kb` up.
///
/// Fails with [`CoreError::NegativeSize`] on negative input.
pub fn humanize_bytes(size: i64) -> CoreResult<String> {
    if size < 0 {
        return Err(CoreError::NegativeSize(size));
    }
    Ok(humanize_len(size as usize))
}

/// Infallible form of [`humanize_bytes`] for in-memory lengths.
pub fn humanize_len(len: usize) -> String {
    let sz = len as f64;
    if sz < KIB {
        format!("{len}b")
    } else if sz < KIB * KIB {
        format!("{:.2}kb", sz / KIB)
    } else if sz < KIB * KIB * KIB {
        format!("{:.2}Mb", sz / (KIB * KIB))
    } else if sz < KIB * KIB * KIB * KIB {
        format!("{:.2}Gb", sz / (KIB * KIB * KIB))
    } else {
        format!("{:.2}Tb", sz / (KIB * KIB * KIB * KIB))
    }
}

/// Format a count with decimal prefixes (1000 steps), e.g. megapixels.
///
/// Fails with [`CoreError::NegativeSize`] on negative input.
pub fn humanize_decimal(size: i64) -> CoreResult<String> {
    if size < 0 {
        return Err(CoreError::NegativeSize(size));
    }
    let sz = size as f64;
    Ok(if sz < KILO {
        format!("{size}")
    } else if sz < KILO * KILO {
        format!("{:.2}k", sz / KILO)
    } else if sz < KILO * KILO * KILO {
        format!("{:.2}M", sz / (KILO * KILO))
    } else if sz < KILO * KILO * KILO * KILO {
        format!("{:.2}G", sz / (KILO * KILO * KILO))
    } else {
        format!("{:.2}T", sz / (KILO * KILO * KILO * KILO))
    })
}

/// Format a duration given in seconds.
///
/// Fails with [`CoreError::NegativeDuration`] on negative input.
pub fn humanize_seconds(secs: f64) -> CoreResult<String> {
    if secs < 0.0 {
        return Err(CoreError::NegativeDuration(secs));
    }
    Ok(fmt_seconds(secs))
}

/// Infallible form of [`humanize_seconds`] for measured [`Duration`]s.
pub fn humanize_duration(duration: Duration) -> String {
    fmt_seconds(duration.as_secs_f64())
}

fn fmt_seconds(secs: f64) -> String {
    if secs == 0.0 {
        "0 secs".to_string()
    } else if secs < 0.01 {
        format!("{:.3} msecs", secs * 1000.0)
    } else if secs < 1.0 {
        format!("{secs:.4} secs")
    } else if secs < 60.0 {
        format!("{secs:.2} secs")
    } else if secs < 60.0 * 60.0 {
        format!("{:.2} mins", secs / 60.0)
    } else if secs < 24.0 * 60.0 * 60.0 {
        format!("{:.2} hours", secs / (60.0 * 60.0))
    } else {
        format!("{:.2} days", secs / (24.0 * 60.0 * 60.0))
    }
}
