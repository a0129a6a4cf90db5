//! 时间工具函数: 营业时区下的日期/时间解析
//!
//! 预订的日期和时间按餐厅所在时区 (facility-local) 存储和比较，
//! "现在" 和 "今天" 都通过 [`chrono_tz::Tz`] 计算，不依赖进程所在机器的时区。

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;

/// 存储格式: `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 存储格式: `HH:MM`
pub const TIME_FORMAT: &str = "%H:%M";

fn matches_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value
            .bytes()
            .zip(shape.bytes())
            .all(|(c, s)| if s == b'9' { c.is_ascii_digit() } else { c == s })
}

/// 解析日期字符串 (严格 4-2-2 位, YYYY-MM-DD)
///
/// 形状正确但日历上不存在的日期 (如 `2030-02-30`) 同样返回 `None`。
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if !matches_shape(date, "9999-99-99") {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// 解析时间字符串 (HH:MM 或 HH:MM:SS)
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    if matches_shape(time, "99:99") {
        NaiveTime::parse_from_str(time, TIME_FORMAT).ok()
    } else if matches_shape(time, "99:99:99") {
        NaiveTime::parse_from_str(time, "%H:%M:%S").ok()
    } else {
        None
    }
}

/// 时间 → 4 位整数 (10:30 → 1030)
pub fn hhmm(time: NaiveTime) -> u32 {
    time.hour() * 100 + time.minute()
}

/// 当前时刻 (营业时区, naive)
pub fn local_now(tz: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&tz).naive_local()
}

/// 今天 (营业时区)
pub fn local_today(tz: Tz) -> NaiveDate {
    local_now(tz).date()
}

/// 解析 IANA 时区名 (如 `Europe/Madrid`)
pub fn parse_timezone(name: &str) -> Option<Tz> {
    name.trim().parse().ok()
}

/// 解析星期 (`tue` / `Tuesday`, 不区分大小写)
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    value.trim().parse().ok()
}

/// 星期的英文全称
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
