use crate::error::Result;
use crate::stream::CharStream;

/// Reads significant (non-whitespace) characters from a borrowed stream.
///
/// End of input is `Ok(None)`, never an error; callers decide whether it is
/// expected at their position in the grammar.
#[derive(Debug)]
pub struct Scanner<'s, S: CharStream> {
    stream: &'s mut S,
}

impl<'s, S: CharStream> Scanner<'s, S> {
    pub fn new(stream: &'s mut S) -> Self {
        Self { stream }
    }

    /// Skip whitespace and consume the next significant character.
    pub fn next_significant(&mut self) -> Result<Option<char>> {
        while let Some(c) = self.stream.read_char()? {
            if !c.is_whitespace() {
                return Ok(Some(c));
            }
        }
        Ok(None)
    }

    /// Like [`Scanner::next_significant`] but leaves the character in the
    /// stream. Skipped whitespace stays consumed.
    pub fn peek_significant(&mut self) -> Result<Option<char>> {
        let next = self.next_significant()?;
        if let Some(c) = next {
            self.stream.unread_char(c)?;
        }
        Ok(next)
    }
}
