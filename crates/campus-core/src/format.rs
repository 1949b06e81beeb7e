// ── Display formatting ──
//
// The backend emits timestamps in a handful of shapes depending on the
// serializer that produced them. Parsing is lenient on input and strict
// on output: every screen renders the same formats.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Parse a backend timestamp string.
///
/// Accepts RFC 3339 (`2026-03-01T09:30:00Z`), space-separated
/// (`2026-03-01 09:30:00`), and date-only (`2026-03-01`, midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

/// `2026-03-01`
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// `2026-03-01 09:30`
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Render an optional raw timestamp for a table cell, with `-` for
/// missing or unparseable values.
pub fn display_timestamp(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map_or_else(|| "-".to_owned(), |dt| format_datetime(&dt))
}

/// Human countdown until a lease expires: `3d 4h`, `2h 15m`, `40m`,
/// or `expired`.
pub fn lease_countdown(expires_at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let remaining = expires_at.signed_duration_since(*now);
    let total_minutes = remaining.num_minutes();
    if total_minutes <= 0 {
        return "expired".to_owned();
    }
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;
    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Shorten a string to `max` characters by eliding the middle.
pub fn truncate_middle(s: &str, max: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max {
        return s.to_owned();
    }
    if max <= 1 {
        return "…".to_owned();
    }
    let keep = max - 1;
    let head = keep.div_ceil(2);
    let tail = keep / 2;
    let mut out: String = chars[..head].iter().collect();
    out.push('…');
    out.extend(&chars[chars.len() - tail..]);
    out
}
