//! Store hours and open status

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// Opening window for one day, in minutes after midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    pub open_minute: u32,
    pub close_minute: u32,
}

impl DayHours {
    const fn new(open_hour: u32, close_hour: u32) -> Self {
        Self {
            open_minute: open_hour * 60,
            close_minute: close_hour * 60,
        }
    }

    fn contains(&self, time: NaiveTime) -> bool {
        let minute = time.hour() * 60 + time.minute();
        minute >= self.open_minute && minute < self.close_minute
    }

    /// e.g. `10:00 AM - 6:00 PM`
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            clock_label(self.open_minute),
            clock_label(self.close_minute)
        )
    }
}

/// Hours for a weekday, `None` when the shop is closed all day
pub fn hours_for(weekday: Weekday) -> Option<DayHours> {
    match weekday {
        Weekday::Sun => None,
        Weekday::Sat => Some(DayHours::new(10, 17)),
        _ => Some(DayHours::new(10, 18)),
    }
}

/// Header text for a given day, e.g. `Today: 10:00 AM - 6:00 PM`
pub fn today_label(weekday: Weekday) -> String {
    match hours_for(weekday) {
        Some(hours) => format!("Today: {}", hours.label()),
        None => "Today: Closed (Gone Riding!)".to_string(),
    }
}

/// Whether the shop is open at the given local time
pub fn is_open(at: NaiveDateTime) -> bool {
    hours_for(at.weekday()).is_some_and(|h| h.contains(at.time()))
}

/// First Friday strictly after `from`
pub fn next_friday(from: NaiveDate) -> NaiveDate {
    let from_monday = from.weekday().num_days_from_monday() as i64;
    let friday = Weekday::Fri.num_days_from_monday() as i64;
    let mut days_ahead = (friday - from_monday).rem_euclid(7);
    if days_ahead == 0 {
        days_ahead = 7;
    }
    from + Duration::days(days_ahead)
}

/// Snapshot of everything the header shows about opening hours
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoursStatus {
    pub today: String,
    pub open_now: bool,
    pub next_friday: NaiveDate,
}

impl HoursStatus {
    pub fn at(now: NaiveDateTime) -> Self {
        Self {
            today: today_label(now.weekday()),
            open_now: is_open(now),
            next_friday: next_friday(now.date()),
        }
    }

    pub fn now() -> Self {
        Self::at(chrono::Local::now().naive_local())
    }

    pub fn status_label(&self) -> &'static str {
        if self.open_now {
            "(Open Now)"
        } else {
            "(Closed)"
        }
    }
}

fn clock_label(minute_of_day: u32) -> String {
    let hour = minute_of_day / 60;
    let minute = minute_of_day % 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {suffix}")
}
