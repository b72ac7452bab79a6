//! CSV wire encoding for statistics rows
//!
//! - `schema`: column names and format constants
//! - `encode`: field, record and row encoding
//! - `decode`: splitting stored text back into records

mod decode;
mod encode;
mod schema;

pub use decode::{decode_record, decode_records, DecodeError};
pub use encode::{encode_field, encode_header, encode_record, encode_row, row_fields};
pub use schema::{COLUMN_COUNT, DELIMITER, HEADER, QUOTE, ROW_TERMINATOR};
