//! Forward cursor with typed field reads.
//!
//! A record mapper reads every declared column of every row without
//! branching on failures. The cursor never interrupts those reads: a failed
//! read returns a zero value and the first failure is latched, to be checked
//! once with [`Cursor::finish`] after the pass.
//!
//! ```text
//! BeforeFirstRow ──advance──▶ OnRow(0) ──advance──▶ OnRow(1) … ──advance──▶ Exhausted
//! ```
//!
//! Reads are only valid in `OnRow`. A read in any other state latches
//! [`FieldError::State`] and returns the zero value.

use std::fmt;

use crate::error::FieldError;
use crate::table::Table;

/// Position of a [`Cursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Created, `advance` not yet called.
    BeforeFirstRow,
    /// On the data row with this zero-based index.
    OnRow(usize),
    /// No rows left.
    Exhausted,
}

impl fmt::Display for CursorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeFirstRow => write!(f, "before the first row"),
            Self::OnRow(i) => write!(f, "on row {}", i + 1),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Stateful forward iterator over a [`Table`]'s data rows.
#[derive(Debug)]
pub struct Cursor<'t> {
    table: &'t Table,
    state: CursorState,
    err: Option<FieldError>,
}

impl<'t> Cursor<'t> {
    pub fn new(table: &'t Table) -> Self {
        Self {
            table,
            state: CursorState::BeforeFirstRow,
            err: None,
        }
    }

    /// Move to the next data row. Returns `false` once no rows remain.
    pub fn advance(&mut self) -> bool {
        let next = match self.state {
            CursorState::BeforeFirstRow => 0,
            CursorState::OnRow(i) => i + 1,
            CursorState::Exhausted => return false,
        };

        if next < self.table.len() {
            self.state = CursorState::OnRow(next);
            true
        } else {
            self.state = CursorState::Exhausted;
            false
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Current row number, counting the header as row 0.
    pub fn row(&self) -> Option<usize> {
        match self.state {
            CursorState::OnRow(i) => Some(i + 1),
            _ => None,
        }
    }

    /// Raw cell value, or `""` if the read failed.
    pub fn read_string(&mut self, column: &str) -> &'t str {
        self.cell(column).unwrap_or("")
    }

    /// Base-10 signed 64-bit integer. An empty cell reads as 0.
    pub fn read_integer(&mut self, column: &str) -> i64 {
        let Some(value) = self.cell(column) else {
            return 0;
        };
        if value.is_empty() {
            return 0;
        }

        match value.parse::<i64>() {
            Ok(n) => n,
            Err(e) => {
                self.latch(FieldError::Decode {
                    row: self.row().unwrap_or_default(),
                    column: column.to_string(),
                    value: value.to_string(),
                    message: e.to_string(),
                });
                0
            }
        }
    }

    /// Integer flag: any value above zero is `true`.
    pub fn read_bool(&mut self, column: &str) -> bool {
        self.read_integer(column) > 0
    }

    /// First error latched so far.
    pub fn err(&self) -> Option<&FieldError> {
        self.err.as_ref()
    }

    /// End the pass, surfacing the latched error if there is one.
    pub fn finish(self) -> Result<(), FieldError> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn cell(&mut self, column: &str) -> Option<&'t str> {
        let table = self.table;

        let row = match self.state {
            CursorState::OnRow(i) => i,
            state => {
                self.latch(FieldError::State {
                    column: column.to_string(),
                    state,
                });
                return None;
            }
        };

        let Some(col) = table.index().position(column) else {
            self.latch(FieldError::MissingColumn {
                column: column.to_string(),
            });
            return None;
        };

        table.cell(row, col)
    }

    fn latch(&mut self, err: FieldError) {
        if self.err.is_none() {
            tracing::debug!(error = %err, "latched field error");
            self.err = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> Table {
        Table::parse(text).unwrap()
    }

    #[test]
    fn test_state_machine() {
        let t = table("Name\nFoo\nBar\n");
        let mut c = t.cursor();

        assert_eq!(c.state(), CursorState::BeforeFirstRow);
        assert!(c.advance());
        assert_eq!(c.state(), CursorState::OnRow(0));
        assert_eq!(c.row(), Some(1));
        assert!(c.advance());
        assert_eq!(c.read_string("Name"), "Bar");
        assert!(!c.advance());
        assert_eq!(c.state(), CursorState::Exhausted);
        assert!(!c.advance());
        assert_eq!(c.state(), CursorState::Exhausted);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn test_header_only_never_positions() {
        let t = table("Name\tversion\n");
        let mut c = t.cursor();
        assert!(!c.advance());
        assert!(c.err().is_none());
    }

    #[test]
    fn test_read_string_any_case() {
        let t = table("Name\tversion\nFoo\t100\n");
        let mut c = t.cursor();
        c.advance();
        assert_eq!(c.read_string("name"), "Foo");
        assert_eq!(c.read_string("NAME"), "Foo");
        assert!(c.err().is_none());
    }

    #[test]
    fn test_read_integer_values() {
        let t = table("a\tb\tc\td\n\t5\t-12\t+7\n");
        let mut c = t.cursor();
        c.advance();
        assert_eq!(c.read_integer("a"), 0);
        assert_eq!(c.read_integer("b"), 5);
        assert_eq!(c.read_integer("c"), -12);
        assert_eq!(c.read_integer("d"), 7);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn test_read_integer_beyond_32_bits() {
        let t = table("add\tdivide\n3000000000\t-4294967296\n");
        let mut c = t.cursor();
        c.advance();
        assert_eq!(c.read_integer("add"), 3_000_000_000);
        assert_eq!(c.read_integer("divide"), -4_294_967_296);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn test_non_numeric_latches_decode_error() {
        let t = table("version\tlevel\nabc\t3\n");
        let mut c = t.cursor();
        c.advance();
        assert_eq!(c.read_integer("version"), 0);
        // Later reads keep working.
        assert_eq!(c.read_integer("level"), 3);

        match c.finish() {
            Err(FieldError::Decode {
                row, column, value, ..
            }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "version");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_whitespace_is_not_a_number() {
        let t = table("level\n 5\n");
        let mut c = t.cursor();
        c.advance();
        assert_eq!(c.read_integer("level"), 0);
        assert!(matches!(c.err(), Some(FieldError::Decode { .. })));
    }

    #[test]
    fn test_first_error_wins() {
        let t = table("a\tb\nx\ty\n");
        let mut c = t.cursor();
        c.advance();
        c.read_integer("a");
        c.read_integer("b");
        c.read_string("missing");
        match c.err() {
            Some(FieldError::Decode { column, .. }) => assert_eq!(column, "a"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_reads_zero() {
        let t = table("Name\nFoo\n");
        let mut c = t.cursor();
        c.advance();
        assert_eq!(c.read_string("class"), "");
        assert_eq!(c.read_integer("level"), 0);
        assert_eq!(
            c.err(),
            Some(&FieldError::MissingColumn {
                column: "class".into()
            })
        );
    }

    #[test]
    fn test_read_before_advance_is_state_error() {
        let t = table("Name\nFoo\n");
        let mut c = t.cursor();
        assert_eq!(c.read_string("Name"), "");
        assert_eq!(
            c.finish(),
            Err(FieldError::State {
                column: "Name".into(),
                state: CursorState::BeforeFirstRow,
            })
        );
    }

    #[test]
    fn test_read_after_exhaustion_is_state_error() {
        let t = table("level\n4\n");
        let mut c = t.cursor();
        while c.advance() {}
        assert_eq!(c.read_integer("level"), 0);
        assert!(matches!(
            c.err(),
            Some(FieldError::State {
                state: CursorState::Exhausted,
                ..
            })
        ));
    }

    #[test]
    fn test_read_bool() {
        let t = table("a\tb\tc\td\n1\t0\t\t2\n");
        let mut c = t.cursor();
        c.advance();
        assert!(c.read_bool("a"));
        assert!(!c.read_bool("b"));
        assert!(!c.read_bool("c"));
        assert!(c.read_bool("d"));
    }
}
