use chrono::{Datelike, Local, NaiveDate};

/// A day on the calendar, taken as given: no check that the day exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl CalendarDate {
    pub fn new(day: u32, month: u32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// The local wall-clock date.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    /// Whether someone born on `birth_day`/`birth_month` celebrates on this date.
    pub fn is_birthday_of(&self, birth_day: u32, birth_month: u32) -> bool {
        is_birthday(self.day, self.month, self.year, birth_day, birth_month)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.day(), date.month(), date.year())
    }
}

/// True when the reference date falls on the birthday.
///
/// Someone born on Feb 29 celebrates on Feb 28 when the reference year is not
/// a multiple of 4. Century years are not special-cased.
pub fn is_birthday(
    ref_day: u32,
    ref_month: u32,
    ref_year: i32,
    birth_day: u32,
    birth_month: u32,
) -> bool {
    (ref_month == birth_month && ref_day == birth_day)
        || (ref_month == 2
            && birth_month == 2
            && birth_day == 29
            && ref_day == 28
            && ref_year % 4 > 0)
}
