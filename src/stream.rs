//! Character streams with a single character of push-back.
//!
//! The parser never needs more than one character of lookahead, so the
//! stream contract is deliberately small: read the next Unicode scalar value,
//! or hand exactly one back so that the next read returns it again.
//!
//! [`PushBack`] adds that one-slot buffer to any fallible `char` iterator.
//! In-memory text goes through [`PushBack::in_memory`], while readers go
//! through [`PushBack::streaming`], which decodes UTF-8 one scalar value at a
//! time and so never holds more than the reader's own buffer in memory.

use std::io::{BufRead, ErrorKind};

use crate::error::{BirthbookError, Result};

/// Sequential access to characters plus one level of push-back.
pub trait CharStream {
    /// Consume the next character, `Ok(None)` once the stream is exhausted.
    fn read_char(&mut self) -> Result<Option<char>>;
    /// Return `c` to the front of the stream. Only one character may be
    /// pending at a time.
    fn unread_char(&mut self, c: char) -> Result<()>;
}

pub type StrChars<'a> = std::iter::Map<std::str::Chars<'a>, fn(char) -> Result<char>>;

#[derive(Debug)]
pub struct PushBack<I> {
    chars: I,
    pending: Option<char>,
}

impl<I> PushBack<I>
where
    I: Iterator<Item = Result<char>>,
{
    pub fn new(chars: I) -> Self {
        Self { chars, pending: None }
    }
}

impl<'a> PushBack<StrChars<'a>> {
    pub fn in_memory(text: &'a str) -> Self {
        Self::new(text.chars().map(Ok as fn(char) -> Result<char>))
    }
}

impl<R: BufRead> PushBack<Utf8Chars<R>> {
    pub fn streaming(reader: R) -> Self {
        Self::new(Utf8Chars::new(reader))
    }
}

impl<I> CharStream for PushBack<I>
where
    I: Iterator<Item = Result<char>>,
{
    fn read_char(&mut self) -> Result<Option<char>> {
        if let Some(c) = self.pending.take() {
            return Ok(Some(c));
        }
        self.chars.next().transpose()
    }

    fn unread_char(&mut self, c: char) -> Result<()> {
        if let Some(waiting) = self.pending {
            return Err(BirthbookError::Invariant(format!(
                "cannot push back {c:?} while {waiting:?} is still pending"
            )));
        }
        self.pending = Some(c);
        Ok(())
    }
}

/// Decodes UTF-8 from a buffered reader, one scalar value per call.
#[derive(Debug)]
pub struct Utf8Chars<R> {
    reader: R,
}

impl<R: BufRead> Utf8Chars<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let byte = loop {
            match self.reader.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };
        if byte.is_some() {
            self.reader.consume(1);
        }
        Ok(byte)
    }

    fn decode(&mut self) -> Result<Option<char>> {
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = match lead {
            0x00..=0x7F => return Ok(Some(char::from(lead))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Err(BirthbookError::InvalidUtf8),
        };
        let mut bytes = [lead, 0, 0, 0];
        for slot in &mut bytes[1..width] {
            *slot = self.read_byte()?.ok_or(BirthbookError::InvalidUtf8)?;
        }
        std::str::from_utf8(&bytes[..width])
            .map_err(|_| BirthbookError::InvalidUtf8)?
            .chars()
            .next()
            .map(Some)
            .ok_or(BirthbookError::InvalidUtf8)
    }
}

impl<R: BufRead> Iterator for Utf8Chars<R> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decode().transpose()
    }
}
