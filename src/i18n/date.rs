//! 更新时间展示格式化
//! 永不报错：空值返回空串，无法解析或格式化失败时原样返回输入

use std::fmt::Write;

use super::dictionary::get_dictionary;
use super::locale::Locale;
use crate::utils::parse_iso8601;

/// 各语言的日期格式（UTC 日历日）
/// en: 月份缩写 + 日 + 年（Mar 5, 2024）；zh: 数字年/月/日（2024/3/5）
pub const fn date_pattern(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "%b %-d, %Y",
        Locale::Zh => "%Y/%-m/%-d",
    }
}

/// 格式化更新时间，带语言对应的「Updated / 更新」前缀
pub fn format_updated_at(locale: Locale, iso: Option<&str>) -> String {
    let Some(iso) = iso.filter(|s| !s.is_empty()) else {
        return String::new();
    };
    let Some(date) = parse_iso8601(iso) else {
        return iso.to_string();
    };

    let prefix = get_dictionary(locale).card.updated_prefix;
    let mut out = String::new();
    if write!(out, "{} {}", prefix, date.format(date_pattern(locale))).is_err() {
        return iso.to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_format() {
        assert_eq!(format_updated_at(Locale::En, Some("2024-03-05T00:00:00Z")), "Updated Mar 5, 2024");
        assert_eq!(format_updated_at(Locale::En, Some("2023-12-25")), "Updated Dec 25, 2023");
    }

    #[test]
    fn test_zh_format() {
        assert_eq!(format_updated_at(Locale::Zh, Some("2024-03-05T00:00:00Z")), "更新 2024/3/5");
    }

    #[test]
    fn test_calendar_day_is_utc() {
        assert_eq!(
            format_updated_at(Locale::En, Some("2024-03-05T23:30:00-02:00")),
            "Updated Mar 6, 2024"
        );
    }

    #[test]
    fn test_reduced_precision_dates_are_formatted() {
        assert_eq!(format_updated_at(Locale::En, Some("2024-03")), "Updated Mar 1, 2024");
        assert_eq!(format_updated_at(Locale::Zh, Some("2024")), "更新 2024/1/1");
        assert_eq!(format_updated_at(Locale::En, Some("2024-03-05T10:00Z")), "Updated Mar 5, 2024");
    }

    #[test]
    fn test_unparsable_returns_raw() {
        assert_eq!(format_updated_at(Locale::En, Some("not-a-date")), "not-a-date");
        assert_eq!(format_updated_at(Locale::Zh, Some("2024-02-30")), "2024-02-30");
    }

    #[test]
    fn test_absent_or_empty_is_empty() {
        assert_eq!(format_updated_at(Locale::En, None), "");
        assert_eq!(format_updated_at(Locale::En, Some("")), "");
    }
}
