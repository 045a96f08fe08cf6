//! Minimal CSV record reader for the training data.
//!
//! Supported format:
//! - comma-separated, records end with `\n` or `\r\n`
//! - blank lines are skipped
//! - double-quoted fields may hold commas, newlines and `""` escapes
//! - no header detection; every record is data
//! - every record must have as many fields as the first one
//!
//! Fields are returned verbatim: surrounding whitespace is kept.

use crate::error::{NetErr, Result};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One parsed CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line on which the record starts.
    pub line: usize,
    pub fields: Vec<String>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Splits `text` into records.
///
/// # Errors
/// - `NetErr::Csv` for a bare `"` in an unquoted field, text after a closing
///   quote, or a quoted field left open at end of input
/// - `NetErr::FieldCount` when a record's width differs from the first record's
pub fn read_records(text: &str) -> Result<Vec<Record>> {
    let text = text.replace("\r\n", "\n");
    let mut chars = text.chars().peekable();
    let mut records: Vec<Record> = Vec::new();
    let mut line = 1;

    while let Some(&c) = chars.peek() {
        if c == '\n' {
            chars.next();
            line += 1;
            continue;
        }

        let start = line;
        let mut fields = Vec::new();

        loop {
            let mut field = String::new();

            if chars.peek() == Some(&'"') {
                chars.next();
                loop {
                    match chars.next() {
                        None => {
                            return Err(NetErr::Csv {
                                line: start,
                                reason: "quoted field is never closed",
                            })
                        }
                        Some('"') => match chars.peek() {
                            // Escaped quote inside quoted field.
                            Some('"') => {
                                chars.next();
                                field.push('"');
                            }
                            Some(',') | Some('\n') | None => break,
                            Some(_) => {
                                return Err(NetErr::Csv {
                                    line,
                                    reason: "unexpected text after closing quote",
                                })
                            }
                        },
                        Some('\n') => {
                            line += 1;
                            field.push('\n');
                        }
                        Some(c) => field.push(c),
                    }
                }
            } else {
                while let Some(&c) = chars.peek() {
                    match c {
                        ',' | '\n' => break,
                        '"' => {
                            return Err(NetErr::Csv {
                                line,
                                reason: "bare quote in unquoted field",
                            })
                        }
                        _ => {
                            field.push(c);
                            chars.next();
                        }
                    }
                }
            }

            fields.push(field);

            match chars.next() {
                Some(',') => {}
                // Only a newline can end a field here.
                Some(_) => {
                    line += 1;
                    break;
                }
                None => break,
            }
        }

        if let Some(first) = records.first() {
            if fields.len() != first.fields.len() {
                return Err(NetErr::FieldCount {
                    line: start,
                    got: fields.len(),
                    expected: first.fields.len(),
                });
            }
        }

        records.push(Record { line: start, fields });
    }

    Ok(records)
}
