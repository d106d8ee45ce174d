// src/countdown.rs
use js_sys::Date;

const MS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// Whole days from `today_ms` to `event_ms`, rounded up.
pub fn days_until(today_ms: f64, event_ms: f64) -> i64 {
    ((event_ms - today_ms) / MS_PER_DAY).ceil() as i64
}

pub fn d_day_label(days: i64) -> String {
    if days > 0 {
        format!("D-{}", days)
    } else {
        String::from("D-Day")
    }
}

/// Local-midnight countdown to the given calendar date (1-based month).
pub fn days_until_date(year: u32, month: u32, day: u32) -> i64 {
    let now = Date::new_0();
    let today = Date::new_with_year_month_day(
        now.get_full_year(),
        now.get_month() as i32,
        now.get_date() as i32,
    );
    let event = Date::new_with_year_month_day(year, month as i32 - 1, day as i32);
    days_until(today.get_time(), event.get_time())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(0.0, 0.0), 0);
        assert_eq!(days_until(0.0, MS_PER_DAY), 1);
        assert_eq!(days_until(0.0, 10.0 * MS_PER_DAY), 10);
        assert_eq!(days_until(MS_PER_DAY, 0.0), -1);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        // a DST shift leaves a 23h gap between two local midnights
        assert_eq!(days_until(0.0, MS_PER_DAY - 3_600_000.0), 1);
        assert_eq!(days_until(1.0, MS_PER_DAY), 1);
    }

    #[test]
    fn test_d_day_label() {
        assert_eq!(d_day_label(30), "D-30");
        assert_eq!(d_day_label(1), "D-1");
        assert_eq!(d_day_label(0), "D-Day");
        assert_eq!(d_day_label(-4), "D-Day");
    }
}
