//! Parser for birthday roster documents.
//!
//! ```text
//! DOCUMENT = '[' ']'
//!          | '[' ENTRIES ']'
//! ENTRIES  = ENTRY (',' ENTRIES)?
//! ENTRY    = '[' RAW* ']'
//! RAW      = any character except '[' and ']'
//! ```
//!
//! The grammar is recursive in ENTRIES, but the parser walks it with a loop
//! so the stack depth stays the same however many entries a document holds.
//! Input is pulled one character at a time from a [`CharStream`], so only the
//! records themselves are ever held in memory.
//!
//! Whitespace is never significant, not even inside an entry: the record for
//! `[ a b ]` is `"ab"`.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::{BirthbookError, Result};
use crate::scanner::Scanner;
use crate::stream::{CharStream, PushBack};

fn describe(found: Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => String::from("end of input"),
    }
}

fn malformed(expected: &str, found: Option<char>) -> BirthbookError {
    BirthbookError::MalformedDocument(format!("expected {expected}, found {}", describe(found)))
}

/// Parse a whole document into its raw records.
///
/// An input holding nothing but whitespace is an empty document, as is `[]`.
pub fn parse_document<S: CharStream>(stream: &mut S) -> Result<Vec<String>> {
    let mut scanner = Scanner::new(stream);
    match scanner.next_significant()? {
        None => return Ok(Vec::new()),
        Some('[') => (),
        found => return Err(malformed("'['", found)),
    }
    match scanner.peek_significant()? {
        Some(']') => {
            scanner.next_significant()?;
            expect_end(&mut scanner)?;
            debug!(records = 0, "parsed empty document");
            return Ok(Vec::new());
        }
        None => return Err(malformed("'[' or ']'", None)),
        Some(_) => (),
    }
    let records = parse_entries(&mut scanner)?;
    match scanner.next_significant()? {
        Some(']') => (),
        found => return Err(malformed("',' or closing ']'", found)),
    }
    expect_end(&mut scanner)?;
    debug!(records = records.len(), "parsed document");
    Ok(records)
}

fn expect_end<S: CharStream>(scanner: &mut Scanner<'_, S>) -> Result<()> {
    match scanner.next_significant()? {
        None => Ok(()),
        found => Err(malformed("end of input after the document", found)),
    }
}

/// Parse one or more comma separated entries.
pub fn parse_entries<S: CharStream>(scanner: &mut Scanner<'_, S>) -> Result<Vec<String>> {
    let mut records = Vec::new();
    loop {
        match scanner.next_significant()? {
            Some('[') => (),
            found => return Err(malformed("'[' opening an entry", found)),
        }
        let record = parse_entry(scanner)?;
        trace!(index = records.len(), record = %record, "entry");
        records.push(record);
        if scanner.peek_significant()? != Some(',') {
            return Ok(records);
        }
        // eat the separator
        scanner.next_significant()?;
    }
}

/// Read the content of an entry whose opening `[` is already consumed, up to
/// and including its closing `]`.
pub fn parse_entry<S: CharStream>(scanner: &mut Scanner<'_, S>) -> Result<String> {
    let mut record = String::new();
    loop {
        match scanner.next_significant()? {
            Some(']') => return Ok(record),
            Some('[') => return Err(BirthbookError::UnexpectedOpenBracket),
            Some(c) => record.push(c),
            None => return Err(BirthbookError::UnterminatedEntry),
        }
    }
}

pub fn parse_str(text: &str) -> Result<Vec<String>> {
    parse_document(&mut PushBack::in_memory(text))
}

pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<String>> {
    parse_document(&mut PushBack::streaming(reader))
}
