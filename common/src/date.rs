//! 当番日時の表示整形

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// 不正な日時の表示
pub const INVALID_DATE: &str = "Geçersiz Tarih";

/// Türkiye saati (UTC+3, 夏時間なし)
const TURKEY_OFFSET_SECS: i32 = 3 * 3600;

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// "dd.mm.yyyy HH:MM" 形式に整形
///
/// タイムゾーン付き(RFC 3339)はトルコ時間に変換、タイムゾーン無しはそのまま表示
pub fn format_duty_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return match FixedOffset::east_opt(TURKEY_OFFSET_SECS) {
            Some(tz) => dt.with_timezone(&tz).format(DISPLAY_FORMAT).to_string(),
            None => dt.format(DISPLAY_FORMAT).to_string(),
        };
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return naive.format(DISPLAY_FORMAT).to_string();
        }
    }

    INVALID_DATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_utc_to_turkey() {
        assert_eq!(format_duty_date("2025-01-01T09:00:00Z"), "01.01.2025 12:00");
    }

    #[test]
    fn test_rfc3339_with_offset() {
        assert_eq!(format_duty_date("2025-03-15T18:30:00+03:00"), "15.03.2025 18:30");
    }

    #[test]
    fn test_naive_datetime() {
        assert_eq!(format_duty_date("2024-12-31T08:00:00"), "31.12.2024 08:00");
        assert_eq!(format_duty_date("2024-12-31T08:00:00.000"), "31.12.2024 08:00");
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(format_duty_date(""), INVALID_DATE);
        assert_eq!(format_duty_date("yarın"), INVALID_DATE);
    }
}
