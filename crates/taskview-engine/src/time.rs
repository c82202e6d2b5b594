use chrono::{DateTime, FixedOffset, Locale, NaiveDate, Offset, Utc};

/// Unit of an agent-reported epoch timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampUnit {
    Seconds,
    Milliseconds,
}

impl TimestampUnit {
    pub fn to_datetime(&self, value: i64) -> Option<DateTime<Utc>> {
        match self {
            TimestampUnit::Seconds => DateTime::from_timestamp(value, 0),
            TimestampUnit::Milliseconds => DateTime::from_timestamp_millis(value),
        }
    }
}

/// Field order of a locale's numeric date (`%x`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

impl DateOrder {
    fn of(locale: Locale) -> Self {
        // 1999-12-31 keeps day, month and year digits distinct
        let Some(reference) = NaiveDate::from_ymd_opt(1999, 12, 31) else {
            return DateOrder::DayMonthYear;
        };
        let numeric = reference.format_localized("%x", locale).to_string();
        match (numeric.find("99"), numeric.find("12"), numeric.find("31")) {
            (Some(year), Some(month), Some(day)) if year < month && month < day => {
                DateOrder::YearMonthDay
            }
            (_, Some(month), Some(day)) if month < day => DateOrder::MonthDayYear,
            _ => DateOrder::DayMonthYear,
        }
    }

    fn pattern(self, weekday: &str, month: &str) -> String {
        match self {
            DateOrder::MonthDayYear => format!("{weekday}, {month} %-d, %Y"),
            DateOrder::DayMonthYear => format!("{weekday} %-d {month} %Y"),
            DateOrder::YearMonthDay => format!("{weekday}, %Y {month} %-d"),
        }
    }
}

/// 12-hour clock only where the locale names the half of the day
fn uses_meridiem(locale: Locale) -> bool {
    // 23:00 on the epoch day
    DateTime::from_timestamp(23 * 3600, 0)
        .is_some_and(|t| !t.format_localized("%p", locale).to_string().trim().is_empty())
}

fn locale_pattern(locale: Locale, weekday: &str, month: &str) -> String {
    let date = DateOrder::of(locale).pattern(weekday, month);
    let clock = if uses_meridiem(locale) {
        "%-I:%M:%S %p"
    } else {
        "%H:%M:%S"
    };
    format!("{date} {clock}")
}

/// Locale and timezone of the operator viewing the console.
///
/// Passed explicitly into every render so output depends only on the
/// record and this configuration, never on the host clock or environment.
#[derive(Debug, Clone)]
pub struct ViewerContext {
    pub locale: Locale,
    pub offset: FixedOffset,
    /// Long zone name, e.g. "Central European Standard Time"
    pub zone_name: String,
    /// Short zone name, e.g. "CET"
    pub zone_abbreviation: String,
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            offset: Utc.fix(),
            zone_name: "Coordinated Universal Time".to_string(),
            zone_abbreviation: "UTC".to_string(),
        }
    }
}

impl ViewerContext {
    pub fn new(
        locale: Locale,
        offset: FixedOffset,
        zone_name: impl Into<String>,
        zone_abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            locale,
            offset,
            zone_name: zone_name.into(),
            zone_abbreviation: zone_abbreviation.into(),
        }
    }

    /// Detail-view form: full weekday and month names in the locale's date
    /// order and clock convention, long zone name.
    /// Missing or out-of-range timestamps render as an empty string.
    pub fn format_long(&self, value: Option<i64>, unit: TimestampUnit) -> String {
        let pattern = locale_pattern(self.locale, "%A", "%B");
        self.format(value, unit, &pattern, &self.zone_name)
    }

    /// Column form: abbreviated weekday and month names, short zone name
    pub fn format_short(&self, value: Option<i64>, unit: TimestampUnit) -> String {
        let pattern = locale_pattern(self.locale, "%a", "%b");
        self.format(value, unit, &pattern, &self.zone_abbreviation)
    }

    fn format(&self, value: Option<i64>, unit: TimestampUnit, pattern: &str, zone: &str) -> String {
        let Some(utc) = value.and_then(|v| unit.to_datetime(v)) else {
            return String::new();
        };
        let local = utc.with_timezone(&self.offset);
        let rendered = local.format_localized(pattern, self.locale).to_string();
        let rendered = rendered.trim_end();
        if zone.is_empty() {
            rendered.to_string()
        } else {
            format!("{rendered} {zone}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_and_short_forms() {
        let viewer = ViewerContext::default();
        assert_eq!(
            viewer.format_long(Some(1_700_000_000), TimestampUnit::Seconds),
            "Tuesday, November 14, 2023 10:13:20 PM Coordinated Universal Time"
        );
        assert_eq!(
            viewer.format_short(Some(1_700_000_000_000), TimestampUnit::Milliseconds),
            "Tue, Nov 14, 2023 10:13:20 PM UTC"
        );
    }

    #[test]
    fn test_offset_shifts_wall_clock() {
        let offset = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        let viewer = ViewerContext::new(Locale::en_US, offset, "Eastern European Time", "EET");
        assert_eq!(
            viewer.format_short(Some(1_700_000_000), TimestampUnit::Seconds),
            "Wed, Nov 15, 2023 12:13:20 AM EET"
        );
    }

    fn central_european(locale: Locale) -> ViewerContext {
        let offset = FixedOffset::east_opt(3600).expect("valid offset");
        ViewerContext::new(locale, offset, "Mitteleuropäische Normalzeit", "MEZ")
    }

    #[test]
    fn test_day_first_locale_uses_24_hour_clock() {
        let viewer = central_european(Locale::de_DE);
        assert_eq!(
            viewer.format_long(Some(1_700_000_000), TimestampUnit::Seconds),
            "Dienstag 14 November 2023 23:13:20 Mitteleuropäische Normalzeit"
        );
        assert_eq!(
            viewer.format_short(Some(1_700_000_000), TimestampUnit::Seconds),
            "Di 14 Nov 2023 23:13:20 MEZ"
        );
    }

    #[test]
    fn test_locale_conventions() {
        assert_eq!(DateOrder::of(Locale::en_US), DateOrder::MonthDayYear);
        assert_eq!(DateOrder::of(Locale::de_DE), DateOrder::DayMonthYear);
        assert_eq!(DateOrder::of(Locale::fr_FR), DateOrder::DayMonthYear);
        assert_eq!(DateOrder::of(Locale::ja_JP), DateOrder::YearMonthDay);
        assert!(uses_meridiem(Locale::en_US));
        assert!(!uses_meridiem(Locale::de_DE));
        assert!(!uses_meridiem(Locale::fr_FR));
    }

    #[test]
    fn test_no_double_space_before_zone() {
        let viewer = central_european(Locale::fr_FR);
        let short = viewer.format_short(Some(1_700_000_000), TimestampUnit::Seconds);
        assert!(short.ends_with("23:13:20 MEZ"), "{short}");
        assert!(!short.contains("  "), "{short}");
    }

    #[test]
    fn test_missing_timestamp_is_blank() {
        let viewer = ViewerContext::default();
        assert_eq!(viewer.format_short(None, TimestampUnit::Seconds), "");
        assert_eq!(viewer.format_long(Some(i64::MAX), TimestampUnit::Seconds), "");
    }

    #[test]
    fn test_same_input_same_output() {
        let viewer = ViewerContext::default();
        let first = viewer.format_long(Some(1_234_567_890), TimestampUnit::Seconds);
        let second = viewer.format_long(Some(1_234_567_890), TimestampUnit::Seconds);
        assert_eq!(first, second);
    }
}
