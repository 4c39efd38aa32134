//! ISO-8601 时间戳解析
//! 排序与日期展示共用同一套解析规则

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// 带时区的日期时间格式（`%#z` 接受 `Z`、`+08:00`、`+0800`）
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// 不带时区的日期时间格式（按 UTC 处理）
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// 解析 ISO-8601 时间戳
/// 支持：完整 RFC 3339 / 带偏移的日期时间（含基本格式 `+HHMM`、省略秒）/
/// 无时区日期时间 / 纯日期 / 年月（`YYYY-MM`）/ 年（`YYYY`）
/// 无法解析时返回 None
pub fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    parse_date(raw)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// 纯日期及其精简形式，缺省的月、日取 1
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match raw.split('-').collect::<Vec<_>>().as_slice() {
        [year] if year.len() == 4 && is_digits(year) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, 1, 1)
        }
        [year, month] if year.len() == 4 && month.len() == 2 && is_digits(year) && is_digits(month) => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        _ => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
    }
}

/// 时间戳转毫秒；缺失或无法解析视为 0（最旧）
pub fn epoch_millis(raw: Option<&str>) -> i64 {
    raw.and_then(parse_iso8601)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}
