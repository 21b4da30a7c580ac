
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BirthbookError {
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
    #[error("Unexpected '[' inside an entry")]
    UnexpectedOpenBracket,
    #[error("Input ended before the entry was terminated by ']'")]
    UnterminatedEntry,
    #[error("Malformed fields: expected 3 values separated by '{delimiter}', found {found}")]
    MalformedFields { delimiter: char, found: usize },
    #[error("Invalid number in {field}: {value:?} ({source})")]
    InvalidNumber { field: &'static str, value: String, source: ParseIntError },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input is not valid UTF-8")]
    InvalidUtf8,
    #[error("Config error: {0}")]
    Config(String),
    #[error("Internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, BirthbookError>;

// Helper conversions
impl From<config::ConfigError> for BirthbookError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
