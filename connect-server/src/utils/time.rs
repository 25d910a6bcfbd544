//! 时间工具函数 — 业务时区转换
//!
//! 营业日边界 (当地零点) 统一在 API handler 层换算成 UTC 时间戳，
//! repository 层只比较 `DateTime<Utc>`。

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}")))
}

/// 日期零点 → UTC 时刻 (业务时区)
///
/// DST gap fallback: 如果当地时间不存在 (夏令时跳跃)，fallback 到 UTC。
pub fn day_start(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    tz.from_local_datetime(&naive)
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

/// 日期结束 → 次日零点的 UTC 时刻 (业务时区)
///
/// 返回次日零点，调用方使用 `< end` (不含) 语义。
pub fn day_end(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let next_day = date.succ_opt().unwrap_or(date);
    day_start(next_day, tz)
}

/// 当前营业日 (业务时区) 的 [零点, 次日零点) UTC 区间
pub fn today_bounds(tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let today = Utc::now().with_timezone(&tz).date_naive();
    (day_start(today, tz), day_end(today, tz))
}

/// 闭区间日期过滤 [start 零点, end 次日零点)
///
/// 任一端缺省时向两侧开放。
pub fn range_bounds(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    tz: Tz,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let lo = start
        .map(|d| day_start(d, tz))
        .unwrap_or_else(|| Utc::now() - Duration::days(365 * 100));
    let hi = end
        .map(|d| day_end(d, tz))
        .unwrap_or_else(|| Utc::now() + Duration::days(365 * 100));
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Africa::Dakar;

    #[test]
    fn day_bounds_cover_24_hours() {
        let date = parse_date("2025-03-10").unwrap();
        let start = day_start(date, Dakar);
        let end = day_end(date, Dakar);
        assert_eq!((end - start).num_hours(), 24);
        assert!(start < end);
    }

    #[test]
    fn rejects_malformed_date() {
        assert!(parse_date("10/03/2025").is_err());
        assert!(parse_date("2025-13-40").is_err());
    }
}
