//! 时间工具函数 - 业务时区
//!
//! "Today" for the booking horizon is the calendar date in the restaurant's
//! timezone, not in UTC.

use chrono::NaiveDate;
use chrono_tz::Tz;

/// 当前日期 (业务时区)
pub fn business_today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// 解析 IANA 时区名称
pub fn parse_timezone(name: &str) -> Result<Tz, String> {
    name.parse::<Tz>()
        .map_err(|e| format!("Failed to parse timezone '{name}': {e}"))
}
