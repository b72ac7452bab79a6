//! CSV decoding for stored statistics
//!
//! Splits stored text back into records, honouring quoted fields that span
//! line breaks. Records end at `\r\n` or a bare `\n`.

use super::schema::{DELIMITER, QUOTE};
use thiserror::Error;

/// Decode error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended inside a quoted field
    #[error("Unterminated quoted field in record {record}")]
    UnterminatedQuote {
        /// Zero-based index of the offending record
        record: usize,
    },

    /// A closing quote was followed by something other than a delimiter or
    /// line break
    #[error("Unexpected character {found:?} after closing quote in record {record}")]
    UnexpectedChar {
        /// Zero-based index of the offending record
        record: usize,
        /// The character found
        found: char,
    },

    /// Expected exactly one record
    #[error("Expected one record, found {0}")]
    RecordCount(usize),
}

/// Decode all records of `text`
///
/// A trailing terminator does not produce an empty final record.
pub fn decode_records(text: &str) -> Result<Vec<Vec<String>>, DecodeError> {
    RecordParser::new(text).parse_all()
}

/// Decode text holding exactly one record
pub fn decode_record(text: &str) -> Result<Vec<String>, DecodeError> {
    let mut records = decode_records(text)?;
    if records.len() != 1 {
        return Err(DecodeError::RecordCount(records.len()));
    }
    Ok(records.remove(0))
}

struct RecordParser<'a> {
    input: &'a str,
    pos: usize,
    record: usize,
}

impl<'a> RecordParser<'a> {
    fn new(input: &'a str) -> Self {
        RecordParser {
            input,
            pos: 0,
            record: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Consume a line break if one starts here
    fn eat_terminator(&mut self) -> bool {
        if self.input[self.pos..].starts_with("\r\n") {
            self.pos += 2;
            true
        } else if self.peek() == Some('\n') {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_all(mut self) -> Result<Vec<Vec<String>>, DecodeError> {
        let mut records = Vec::new();
        while self.pos < self.input.len() {
            records.push(self.parse_record()?);
            self.record += 1;
        }
        Ok(records)
    }

    fn parse_record(&mut self) -> Result<Vec<String>, DecodeError> {
        let mut fields = Vec::new();
        loop {
            let field = if self.peek() == Some(QUOTE) {
                self.parse_quoted()?
            } else {
                self.parse_bare()
            };
            fields.push(field);

            if self.eat_terminator() {
                return Ok(fields);
            }
            match self.peek() {
                None => return Ok(fields),
                Some(c) if c == DELIMITER => self.advance(),
                Some(found) => {
                    return Err(DecodeError::UnexpectedChar {
                        record: self.record,
                        found,
                    })
                }
            }
        }
    }

    fn parse_bare(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == DELIMITER || c == '\n' || self.input[self.pos..].starts_with("\r\n") {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn parse_quoted(&mut self) -> Result<String, DecodeError> {
        // opening quote
        self.advance();
        let mut result = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(DecodeError::UnterminatedQuote {
                        record: self.record,
                    })
                }
                Some(c) if c == QUOTE => {
                    self.advance();
                    if self.peek() == Some(QUOTE) {
                        result.push(QUOTE);
                        self.advance();
                    } else {
                        return Ok(result);
                    }
                }
                Some(c) => {
                    result.push(c);
                    self.advance();
                }
            }
        }
    }
}
