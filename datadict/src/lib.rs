//! # Datadict - typed records from tab-delimited game data tables
//!
//! The game's `.txt` data files are tab-separated tables with a header row.
//! Datadict tokenizes them once and decodes each row into a fixed-shape
//! record through a small per-type schema.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  .txt bytes │────▶│    Table    │────▶│   Cursor    │────▶│  Vec<R>     │
//! │ (UTF8/1252) │     │ (+ColumnIdx)│     │ (typed read)│     │ (GameData)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use datadict::{Config, GameData};
//!
//! let data = GameData::load(&Config::from_env()?)?;
//! for rule in data.automagic() {
//!     println!("{} ({:?})", rule.name, rule.class);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Layered error types
//! - [`table`] - Tokenizer, encoding detection and column index
//! - [`cursor`] - Forward cursor with typed reads and a latched error
//! - [`models`] - Shared value types (hero classes, modifier slots)
//! - [`records`] - The [`Record`] trait and concrete record schemas
//! - [`loader`] - Generic record loading
//! - [`store`] - [`GameData`], the owner of loaded tables
//! - [`config`] - Environment configuration

// Core modules
pub mod error;
pub mod models;

// Decoding engine
pub mod cursor;
pub mod table;

// Record schemas
pub mod records;

// Loading
pub mod config;
pub mod loader;
pub mod store;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, FieldError, LoadError, LoadResult, StructuralError, TableResult};

// =============================================================================
// Re-exports - Engine
// =============================================================================

pub use cursor::{Cursor, CursorState};
pub use table::{ColumnIndex, Table};

// =============================================================================
// Re-exports - Records
// =============================================================================

pub use models::{Hero, ModSlot};
pub use records::{AutoMagicRecord, Record};

// =============================================================================
// Re-exports - Loading
// =============================================================================

pub use config::Config;
pub use loader::{load_file, load_records, load_table};
pub use store::{GameData, RecordTable};
