//! Fixed-width formatting helpers shared by every report section.

use chrono::DateTime;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Epoch values above this are milliseconds (JDBC drivers store those).
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Truncate `s` to `width` display columns, then left-align pad to `width`.
/// Control characters become spaces so a stored newline cannot break a row.
pub fn fit(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for ch in s.chars().map(|c| if c.is_control() { ' ' } else { c }) {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }

    out.push_str(&" ".repeat(width - used));
    out
}

/// Right-align `s` within `width` display columns. Longer input is kept whole.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// Two decimals with `,` thousands separators: 1234.5 -> "1,234.50".
pub fn group_thousands(value: f64) -> String {
    let raw = format!("{:.2}", value.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" is not a useful thing to print
    let sign = if value < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Dollar amount: 2500.0 -> "$2,500.00", -12.5 -> "-$12.50".
pub fn currency(value: f64) -> String {
    let grouped = group_thousands(value);
    match grouped.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", grouped),
    }
}

/// Substitute `token` for an absent value.
pub fn or_placeholder(value: Option<&str>, token: &str) -> String {
    value.unwrap_or(token).to_string()
}

/// Mask a password or PIN, keeping only a rough idea of its length.
pub fn mask_secret(secret: &str) -> String {
    "*".repeat(secret.chars().count().clamp(4, 10))
}

/// Render an epoch (seconds or milliseconds) as `YYYY-MM-DD HH:MM:SS` UTC.
pub fn render_epoch(value: i64) -> String {
    let parsed = if value.abs() >= MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    };

    match parsed {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_short_values() {
        assert_eq!(fit("tech1", 8), "tech1   ");
        assert_eq!(fit("", 3), "   ");
    }

    #[test]
    fn fit_truncates_long_values() {
        assert_eq!(fit("administrator", 5), "admin");
        assert_eq!(fit("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn fit_blanks_control_characters() {
        assert_eq!(fit("ab\ncd\tef", 5), "ab cd");
        assert_eq!(fit("x\r", 3), "x  ");
    }

    #[test]
    fn fit_counts_display_width() {
        // wide glyphs take two columns and are never split
        assert_eq!(fit("日本語", 5), "日本 ");
        assert_eq!(UnicodeWidthStr::width(fit("日本語", 5).as_str()), 5);
    }

    #[test]
    fn pad_left_right_aligns() {
        assert_eq!(pad_left("N/A", 10), "       N/A");
        assert_eq!(pad_left("$12,345,678.00", 10), "$12,345,678.00");
    }

    #[test]
    fn grouping_and_decimals() {
        assert_eq!(group_thousands(0.0), "0.00");
        assert_eq!(group_thousands(999.999), "1,000.00");
        assert_eq!(group_thousands(1234.5), "1,234.50");
        assert_eq!(group_thousands(1234567.891), "1,234,567.89");
        assert_eq!(group_thousands(-1500.0), "-1,500.00");
        assert_eq!(group_thousands(-0.001), "0.00");
    }

    #[test]
    fn currency_places_sign_before_dollar() {
        assert_eq!(currency(2500.0), "$2,500.00");
        assert_eq!(currency(5.0), "$5.00");
        assert_eq!(currency(-12.5), "-$12.50");
    }

    #[test]
    fn placeholder_only_for_absent_values() {
        assert_eq!(or_placeholder(None, "Never"), "Never");
        assert_eq!(
            or_placeholder(Some("2025-01-01 10:00:00"), "Never"),
            "2025-01-01 10:00:00"
        );
    }

    #[test]
    fn secrets_are_masked_within_bounds() {
        assert_eq!(mask_secret("1"), "****");
        assert_eq!(mask_secret("pw123"), "*****");
        assert_eq!(mask_secret("a-very-long-password"), "**********");
    }

    #[test]
    fn epoch_seconds_and_millis() {
        assert_eq!(render_epoch(0), "1970-01-01 00:00:00");
        assert_eq!(render_epoch(1_700_000_000), "2023-11-14 22:13:20");
        assert_eq!(render_epoch(1_700_000_000_000), "2023-11-14 22:13:20");
    }
}
