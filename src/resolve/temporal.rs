use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use rand::Rng;

use crate::resolve::faker::Faker;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MONTH_FORMAT: &str = "%Y-%m";
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl<R: Rng> Faker<R> {
    fn today(&self) -> NaiveDate {
        self.now.date()
    }

    fn date_between(&mut self, earliest: NaiveDate, latest: NaiveDate) -> NaiveDate {
        let span = (latest - earliest).num_days().max(0);
        earliest + Duration::days(self.int(0, span))
    }

    /// Birth date for a person aged between `min_age` and `max_age` years today.
    pub fn birthdate(&mut self, min_age: u32, max_age: u32) -> NaiveDate {
        let today = self.today();
        let latest = today
            .checked_sub_months(Months::new(min_age * 12))
            .unwrap_or(today);
        let earliest = today
            .checked_sub_months(Months::new(max_age * 12))
            .unwrap_or(latest);
        self.date_between(earliest, latest)
    }

    /// A day within the past year, excluding today.
    pub fn past_date(&mut self) -> NaiveDate {
        let today = self.today();
        today - Duration::days(self.int(1, 365))
    }

    /// A day within the next year, excluding today.
    pub fn future_date(&mut self) -> NaiveDate {
        let today = self.today();
        today + Duration::days(self.int(1, 365))
    }

    /// A minute within the last 24 hours.
    pub fn recent_datetime(&mut self) -> NaiveDateTime {
        self.now - Duration::seconds(self.int(0, 86_399))
    }

    pub fn datetime_local(&mut self) -> String {
        self.recent_datetime().format(DATETIME_LOCAL_FORMAT).to_string()
    }

    pub fn year_month(&mut self) -> String {
        self.recent_datetime().format(MONTH_FORMAT).to_string()
    }

    /// ISO-8601 week of a recent day: `YYYY-Www`.
    pub fn iso_week(&mut self) -> String {
        let week = self.recent_datetime().date().iso_week();
        format!("{:04}-W{:02}", week.year(), week.week())
    }

    /// `HH:MM`, 24-hour clock.
    pub fn time_of_day(&mut self) -> String {
        format!("{:02}:{:02}", self.int(0, 23), self.int(0, 59))
    }

    /// `MM/YY`, 1 to 5 years ahead.
    pub fn card_expiry(&mut self) -> String {
        let month = self.int(1, 12);
        let year = i64::from(self.today().year()) + self.int(1, 5);
        format!("{:02}/{:02}", month, year.rem_euclid(100))
    }

    /// A calendar year within the last five years.
    pub fn recent_year(&mut self) -> i32 {
        let today = self.today();
        (today - Duration::days(self.int(1, 5 * 365))).year()
    }

    pub fn recent_month_number(&mut self) -> u32 {
        self.recent_datetime().month()
    }
}
