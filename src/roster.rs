//! Turning raw records into people and checking whose birthday it is.
//!
//! A record looks like `"Doe","John","1982/10/08"` once the parser has removed
//! its whitespace: surname, name and a `YYYY/MM/DD` birthdate. Each record is
//! evaluated on its own, so one bad record does not hide the others.

use std::fmt;

use crate::birthday::CalendarDate;
use crate::error::{BirthbookError, Result};
use crate::fields::split_fields;

/// A birthdate as written in a record.
///
/// Only day and month take part in the birthday check, so the year is kept
/// as text. Day and month are signed and unchecked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthDate {
    pub year: String,
    pub month: i32,
    pub day: i32,
}

impl BirthDate {
    /// Parse `YYYY/MM/DD`.
    pub fn parse(text: &str) -> Result<Self> {
        let (year, month, day) = split_fields(text, '/')?;
        Ok(Self {
            year: year.to_string(),
            month: number("month", month)?,
            day: number("day", day)?,
        })
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

fn number(field: &'static str, value: &str) -> Result<i32> {
    value.parse().map_err(|source| BirthbookError::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub surname: String,
    pub name: String,
    pub birthdate: BirthDate,
}

impl Person {
    pub fn from_record(record: &str, strip_quotes: bool) -> Result<Self> {
        let unquoted;
        let record = if strip_quotes {
            unquoted = record.replace('"', "");
            unquoted.as_str()
        } else {
            record
        };
        let (surname, name, birthdate) = split_fields(record, ',')?;
        Ok(Self {
            surname: surname.to_string(),
            name: name.to_string(),
            birthdate: BirthDate::parse(birthdate)?,
        })
    }

    /// Negative days and months never match a calendar date.
    pub fn celebrates_on(&self, today: CalendarDate) -> bool {
        match (u32::try_from(self.birthdate.day), u32::try_from(self.birthdate.month)) {
            (Ok(day), Ok(month)) => today.is_birthday_of(day, month),
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct Evaluation {
    pub record: String,
    pub outcome: Result<Celebrant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Celebrant {
    pub person: Person,
    pub celebrating: bool,
}

/// Evaluate every record against `today`, keeping per-record failures.
pub fn evaluate<I>(records: I, today: CalendarDate, strip_quotes: bool) -> Vec<Evaluation>
where
    I: IntoIterator<Item = String>,
{
    records
        .into_iter()
        .map(|record| {
            let outcome = Person::from_record(&record, strip_quotes).map(|person| Celebrant {
                celebrating: person.celebrates_on(today),
                person,
            });
            Evaluation { record, outcome }
        })
        .collect()
}
