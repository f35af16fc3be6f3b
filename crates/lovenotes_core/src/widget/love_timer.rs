//! Elapsed-time counter since a fixed start instant.

use crate::widget::TextDisplay;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Refresh period of the timer display.
pub const LOVE_TIMER_INTERVAL_MS: u32 = 1_000;

/// Calendar difference plus the current wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoveElapsed {
    pub years: i32,
    pub months: u32,
    pub days: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl LoveElapsed {
    /// Whole years, months and days from `start` to `now`.
    ///
    /// A negative day count borrows the length of the month before `now`'s
    /// month, clamped up to `start`'s day so month-end starts never go
    /// negative. `now` earlier than `start` yields a zero calendar part.
    pub fn between(start: NaiveDateTime, now: NaiveDateTime) -> Self {
        let (hour, minute, second) = (now.hour(), now.minute(), now.second());
        if now < start {
            return Self {
                years: 0,
                months: 0,
                days: 0,
                hour,
                minute,
                second,
            };
        }

        let mut years = now.year() - start.year();
        let mut months = now.month() as i32 - start.month() as i32;
        let mut days = now.day() as i32 - start.day() as i32;

        if days < 0 {
            months -= 1;
            let (year, month) = previous_month(now.year(), now.month());
            let borrow = days_in_month(year, month).max(start.day());
            days += borrow as i32;
        }
        if months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            years,
            months: months as u32,
            days: days as u32,
            hour,
            minute,
            second,
        }
    }

    /// Display text, e.g. `0 years 1 months 14 days 10:30:05`.
    pub fn render(&self) -> String {
        format!(
            "{} years {} months {} days {:02}:{:02}:{:02}",
            self.years, self.months, self.days, self.hour, self.minute, self.second
        )
    }
}

/// Timer bound to one start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoveTimer {
    start: NaiveDateTime,
}

impl LoveTimer {
    pub fn new(start: NaiveDateTime) -> Self {
        Self { start }
    }

    pub fn render(&self, now: NaiveDateTime) -> String {
        LoveElapsed::between(self.start, now).render()
    }

    /// Recomputes the display text and writes it when a display exists.
    pub fn tick<D: TextDisplay>(&self, now: NaiveDateTime, display: Option<&mut D>) {
        if let Some(display) = display {
            display.set_text(self.render(now).as_str());
        }
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}
