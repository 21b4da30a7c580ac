//! Birthbook – find out whose birthday it is from a bracketed roster.
//!
//! A roster is a document of bracket groups, one per person:
//!
//! ```text
//! [["Doe", "John", "1982/10/08"], ["Wayne", "Bruce", "1965/01/30"]]
//! ```
//!
//! ## Modules
//! * [`stream`] – Character streams with one character of push-back.
//! * [`scanner`] – Whitespace skipping reads and one character lookahead.
//! * [`document`] – The grammar parser producing raw records, without recursion
//!   and without holding the whole input in memory.
//! * [`fields`] – Splitting a record into exactly three fields.
//! * [`birthday`] – The birthday predicate, including the Feb 29 case.
//! * [`roster`] – Records to people, evaluated against a reference date.
//! * [`settings`] – Layered configuration for the binary.
//! * [`error`] – The crate wide error type.
//!
//! ## Quick Start
//! ```
//! use birthbook::{birthday::CalendarDate, document::parse_str, roster::evaluate};
//! let records = parse_str(r#"[["Curry", "Mark", "1988/02/29"]]"#).unwrap();
//! assert_eq!(records, vec![r#""Curry","Mark","1988/02/29""#]);
//! let results = evaluate(records, CalendarDate::new(28, 2, 2023), true);
//! assert!(results[0].outcome.as_ref().unwrap().celebrating);
//! ```
//!
//! ## Leap days
//! People born on Feb 29 celebrate on Feb 28 in years that are not a multiple
//! of 4. Century years follow the same rule, so 1900 and 2100 count as leap
//! years here.

pub mod birthday;
pub mod document;
pub mod error;
pub mod fields;
pub mod roster;
pub mod scanner;
pub mod settings;
pub mod stream;
