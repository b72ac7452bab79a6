//! Wire encoding for solver statistics
//!
//! This crate implements the on-disk format of the statistics store: a
//! semicolon-delimited CSV file with double-quote quoting in minimal mode.
//!
//! ## Format Rules
//!
//! | Aspect | Encoding |
//! |--------|----------|
//! | Delimiter | `;` |
//! | Quote char | `"` |
//! | Quoting | only fields containing `;`, `"`, `\r` or `\n` |
//! | Embedded quote | doubled (`""`) |
//! | Row terminator | `\r\n` |
//! | Numbers | plain decimal, no thousands separators |
//!
//! ## Examples
//!
//! ```
//! use solverstats_wire::{decode_record, encode_record};
//!
//! let line = encode_record(&["a", "b;c"]);
//! assert_eq!(line, "a;\"b;c\"\r\n");
//!
//! let fields = decode_record(&line).unwrap();
//! assert_eq!(fields, vec!["a".to_string(), "b;c".to_string()]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod csv;

// Re-export main types
pub use csv::{
    decode_record, decode_records, encode_field, encode_header, encode_record, encode_row,
    row_fields, DecodeError, COLUMN_COUNT, DELIMITER, HEADER, QUOTE, ROW_TERMINATOR,
};
