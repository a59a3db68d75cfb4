//! Parsing of the semicolon-delimited city and hotel feeds.
//!
//! The feeds have no header row. City rows are `code;name`, hotel rows are
//! `city_code;combined_hotel_code;name`. Fields may be double-quoted, in
//! which case they can contain the delimiter and `""` stands for a quote.

/// Field delimiter used by both feeds.
pub const DELIMITER: char = ';';

/// Errors raised while splitting a feed into rows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsvError {
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unterminated quoted field")]
    UnterminatedQuote { line: usize },
}

/// One row of the city feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRow {
    /// 1-based line number in the source document.
    pub line: usize,
    pub code: String,
    pub name: String,
}

/// One row of the hotel feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelRow {
    /// 1-based line number in the source document.
    pub line: usize,
    pub city_code: String,
    /// City code followed by the local code, e.g. `BARA9`.
    pub combined_code: String,
    pub name: String,
}

/// Iterate over the city feed, yielding rows of exactly two columns.
///
/// Rows are produced lazily so a caller can act on the rows before a
/// malformed line; the error for that line is yielded in its place.
pub fn city_rows(text: &str) -> impl Iterator<Item = Result<CityRow, CsvError>> + '_ {
    Records::new(text, 2).map(|record| {
        record.map(|(line, mut fields)| {
            let name = fields.pop().unwrap_or_default();
            let code = fields.pop().unwrap_or_default();
            CityRow { line, code, name }
        })
    })
}

/// Iterate over the hotel feed, yielding rows of exactly three columns.
pub fn hotel_rows(text: &str) -> impl Iterator<Item = Result<HotelRow, CsvError>> + '_ {
    Records::new(text, 3).map(|record| {
        record.map(|(line, mut fields)| {
            let name = fields.pop().unwrap_or_default();
            let combined_code = fields.pop().unwrap_or_default();
            let city_code = fields.pop().unwrap_or_default();
            HotelRow {
                line,
                city_code,
                combined_code,
                name,
            }
        })
    })
}

/// Non-blank lines of a feed as `(line_number, fields)` pairs, each
/// required to have `columns` fields.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    columns: usize,
}

impl<'a> Records<'a> {
    fn new(text: &'a str, columns: usize) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        Self {
            lines: text.lines().enumerate(),
            columns,
        }
    }
}

impl Iterator for Records<'_> {
    type Item = Result<(usize, Vec<String>), CsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.columns;
        for (idx, raw) in self.lines.by_ref() {
            if raw.trim().is_empty() {
                continue;
            }
            let line = idx + 1;
            let record = parse_line(raw, line).and_then(|fields| {
                if fields.len() == columns {
                    Ok((line, fields))
                } else {
                    Err(CsvError::ColumnCount {
                        line,
                        expected: columns,
                        found: fields.len(),
                    })
                }
            });
            return Some(record);
        }
        None
    }
}

/// Parse a single line, handling quoted fields.
fn parse_line(raw: &str, line: usize) -> Result<Vec<String>, CsvError> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' && current.is_empty() {
            in_quotes = true;
        } else if ch == DELIMITER {
            result.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    if in_quotes {
        return Err(CsvError::UnterminatedQuote { line });
    }
    result.push(current);
    Ok(result)
}
