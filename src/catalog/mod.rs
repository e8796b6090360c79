//! Catalog core
//!
//! This module contains the pure parsing and query implementation. Nothing in
//! here performs network I/O or rendering; callers hand in the raw text of the
//! registry files and receive records and query results back.
//!
//! # Module Organization
//!
//! ## Records
//! - [`record`] - [`EmojiRecord`] and [`Source`]
//!
//! ## Encoding
//! - [`codec`] - Hex code points to characters, UTF-8 escapes and byte sizes
//!
//! ## Parsing
//! - [`parser`] - The three line parsers
//! - [`name`] - Name extraction for `emoji-test.txt` comments
//! - [`pattern_cache`] - Compiled line grammars
//! - [`pipeline`] - Parse-and-merge entry points
//! - [`source`] - Source file names and loading
//!
//! ## Registry
//! - [`registry`] - Merge and deduplication
//!
//! ## Querying
//! - [`query`] - Filter, sort and paginate
//! - [`natural`] - Numeric-aware string comparison
//! - [`session`] - Caller-owned query state
//!
//! ## Error Handling
//! - [`error`] - Error and warning types

// ============================================================================
// Module Declarations
// ============================================================================

pub mod codec;
pub mod error;
pub mod name;
pub mod natural;
pub mod parser;
pub mod pattern_cache;
pub mod pipeline;
pub mod query;
pub mod record;
pub mod registry;
pub mod session;
pub mod source;

// ============================================================================
// Core Types
// ============================================================================

pub use record::{EmojiRecord, Source};
pub use registry::Registry;

// ============================================================================
// Error Handling
// ============================================================================

pub use error::{CatalogError, EncodingError, ParseWarning, WarningKind};

// ============================================================================
// Parsing
// ============================================================================

pub use parser::{LineParser, ParseOutput, SequencesFileParser, TestFileParser, ZwjFileParser};
pub use pipeline::{parse_all, parse_all_with_report, ParseReport, ParseStats};
pub use source::SourceTexts;

// ============================================================================
// Querying
// ============================================================================

pub use natural::natural_cmp;
pub use query::{
    filter, paginate, query, sort, sort_by_column, Page, Pagination, QueryOptions, QueryResult,
    SortDirection, SortKey,
};
pub use session::{PageTarget, QuerySession};
