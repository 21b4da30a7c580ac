use crate::error::{BirthbookError, Result};

/// Split `record` on every `delimiter` into exactly three fields.
///
/// No trimming is done. Anything other than two delimiters is an error.
pub fn split_fields(record: &str, delimiter: char) -> Result<(&str, &str, &str)> {
    let mut parts = record.split(delimiter);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), Some(third)) => {
            let extra = parts.count();
            if extra > 0 {
                return Err(BirthbookError::MalformedFields {
                    delimiter,
                    found: 3 + extra,
                });
            }
            Ok((first, second, third))
        }
        (first, second, _) => {
            let found = usize::from(first.is_some()) + usize::from(second.is_some());
            Err(BirthbookError::MalformedFields { delimiter, found })
        }
    }
}
