//! Duration parsing utilities.

use anyhow::Context;
use std::time::Duration;

/// Parse a duration string like "500ms", "2s", "1m", "1h" or "3".
/// Supports:
/// - Plain numbers (interpreted as seconds): "3"
/// - Milliseconds suffix: "500ms"
/// - Seconds suffix: "2s"
/// - Minutes suffix: "1m"
/// - Hours suffix: "1h"
///
/// Zero durations are rejected.
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    let duration = if let Some(num_str) = s.strip_suffix("ms") {
        let millis: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid milliseconds value: {num_str}"))?;
        Duration::from_millis(millis)
    } else if let Some(num_str) = s.strip_suffix('h') {
        let hours: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid hours value: {num_str}"))?;
        let secs = hours
            .checked_mul(3600)
            .with_context(|| format!("Duration too large: {s}"))?;
        Duration::from_secs(secs)
    } else if let Some(num_str) = s.strip_suffix('m') {
        let minutes: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid minutes value: {num_str}"))?;
        let secs = minutes
            .checked_mul(60)
            .with_context(|| format!("Duration too large: {s}"))?;
        Duration::from_secs(secs)
    } else if let Some(num_str) = s.strip_suffix('s') {
        let secs: u64 = num_str
            .parse()
            .with_context(|| format!("Invalid seconds value: {num_str}"))?;
        Duration::from_secs(secs)
    } else {
        // No suffix - treat as seconds
        let secs: u64 = s
            .parse()
            .with_context(|| format!("Invalid duration value: {s}"))?;
        Duration::from_secs(secs)
    };

    if duration.is_zero() {
        anyhow::bail!("Duration must be greater than zero: {s}");
    }

    Ok(duration)
}
