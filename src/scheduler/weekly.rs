//! Weekly fire-time calculation

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Weekday};
use tracing::debug;

use crate::config::ScheduleConfig;
use crate::error::AppError;

/// A job that fires once a week on `weekday` at the local `fire_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySchedule {
    pub weekday: Weekday,
    pub fire_time: NaiveTime,
}

impl WeeklySchedule {
    pub fn new(weekday: Weekday, fire_time: NaiveTime) -> Self {
        Self { weekday, fire_time }
    }

    /// Builds the schedule from its configuration strings.
    pub fn from_config(config: &ScheduleConfig) -> Result<Self, AppError> {
        Ok(Self::new(
            parse_weekday(&config.weekday)?,
            parse_fire_time(&config.fire_time)?,
        ))
    }

    /// The first fire instant strictly after `now`.
    pub fn next_after(&self, now: DateTime<Local>) -> DateTime<Local> {
        let today = now.date_naive();
        let days_ahead = (7 + self.weekday.num_days_from_monday()
            - today.weekday().num_days_from_monday())
            % 7;

        let candidate = self.fire_on(today + Duration::days(days_ahead.into()));
        if candidate > now {
            candidate
        } else {
            self.fire_on(today + Duration::days(i64::from(days_ahead) + 7))
        }
    }

    fn fire_on(&self, date: NaiveDate) -> DateTime<Local> {
        to_local(date.and_time(self.fire_time))
    }
}

/// Resolves a local wall-clock time, picking the earlier instant on DST overlaps
/// and skipping forward an hour when the time falls into a DST gap.
fn to_local(naive: NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .unwrap_or_else(|| {
            debug!("Local time {naive} does not exist, interpreting as UTC");
            Local.from_utc_datetime(&naive)
        })
}

/// Parses an English weekday name such as `sunday` or `Sun`.
pub fn parse_weekday(value: &str) -> Result<Weekday, AppError> {
    value
        .trim()
        .parse::<Weekday>()
        .map_err(|_| AppError::config_error(format!("Invalid weekday '{value}'")))
}

/// Parses a `HH:MM` fire time.
pub fn parse_fire_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| {
        AppError::config_error(format!("Invalid fire time '{value}', expected HH:MM: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn sunday_six_pm() -> WeeklySchedule {
        WeeklySchedule::new(Weekday::Sun, NaiveTime::from_hms_opt(18, 0, 0).unwrap())
    }

    #[test]
    fn test_next_after_later_in_week() {
        // 2025-06-11 is a Wednesday
        let next = sunday_six_pm().next_after(at(2025, 6, 11, 9, 30));
        assert_eq!(next, at(2025, 6, 15, 18, 0));
    }

    #[test]
    fn test_next_after_same_day_before_fire_time() {
        let next = sunday_six_pm().next_after(at(2025, 6, 15, 17, 59));
        assert_eq!(next, at(2025, 6, 15, 18, 0));
    }

    #[test]
    fn test_next_after_exact_fire_time_moves_a_week() {
        let next = sunday_six_pm().next_after(at(2025, 6, 15, 18, 0));
        assert_eq!(next, at(2025, 6, 22, 18, 0));
    }

    #[test]
    fn test_next_after_same_day_after_fire_time() {
        let next = sunday_six_pm().next_after(at(2025, 6, 15, 21, 0));
        assert_eq!(next, at(2025, 6, 22, 18, 0));
    }

    #[test]
    fn test_next_after_monday_schedule_from_sunday() {
        let schedule = WeeklySchedule::new(Weekday::Mon, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(schedule.next_after(at(2025, 6, 15, 23, 0)), at(2025, 6, 16, 6, 0));
    }

    #[test]
    fn test_parse_weekday_variants() {
        assert_eq!(parse_weekday("sunday").unwrap(), Weekday::Sun);
        assert_eq!(parse_weekday("Sun").unwrap(), Weekday::Sun);
        assert_eq!(parse_weekday(" FRIDAY ").unwrap(), Weekday::Fri);
        assert!(matches!(parse_weekday("someday"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_parse_fire_time() {
        assert_eq!(
            parse_fire_time("18:00").unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap()
        );
        assert!(parse_fire_time("25:00").is_err());
        assert!(parse_fire_time("6pm").is_err());
    }

    #[test]
    fn test_from_config() {
        let config = ScheduleConfig {
            weekday: "saturday".to_string(),
            fire_time: "07:15".to_string(),
            poll_interval_seconds: 60,
        };
        let schedule = WeeklySchedule::from_config(&config).unwrap();
        assert_eq!(schedule.weekday, Weekday::Sat);
        assert_eq!(schedule.fire_time, NaiveTime::from_hms_opt(7, 15, 0).unwrap());
    }
}
