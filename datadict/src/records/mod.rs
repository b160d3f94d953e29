//! Record schemas.
//!
//! Every data file decodes through the same [`Table`](crate::table::Table)
//! and [`Cursor`]. A record type only declares which columns it needs and
//! how one row becomes one value.
//!
//! ```rust,ignore
//! impl Record for LevelRecord {
//!     const NAME: &'static str = "Level";
//!     const COLUMNS: &'static [&'static str] = &["Name", "Id"];
//!
//!     fn decode(row: &mut Cursor<'_>) -> Self {
//!         Self {
//!             name: row.read_string("Name").to_string(),
//!             id: row.read_integer("Id"),
//!         }
//!     }
//! }
//! ```

pub mod automagic;

pub use automagic::AutoMagicRecord;

use crate::cursor::Cursor;

/// A fixed-shape value decoded from one table row.
pub trait Record: Sized {
    /// Display name used in logs and errors.
    const NAME: &'static str;

    /// Every column [`Record::decode`] reads.
    ///
    /// The loader checks these against the header before the first row.
    const COLUMNS: &'static [&'static str];

    /// Build one record from the cursor's current row.
    ///
    /// Reads are unconditional; failures are latched by the cursor.
    fn decode(row: &mut Cursor<'_>) -> Self;
}
