//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! emoji-catalog. Importing this module with a wildcard import brings the core
//! types into scope:
//!
//! ```
//! use emoji_catalog::prelude::*;
//! ```
//!
//! # Re-exported Items
//!
//! ## Records
//! - [`EmojiRecord`] - One parsed emoji
//! - [`Source`] - Which registry file a record came from
//!
//! ## Parsing
//! - [`LineParser`] - Trait shared by the three file parsers
//! - [`TestFileParser`], [`SequencesFileParser`], [`ZwjFileParser`]
//! - [`parse_all()`] - Parse and merge all three files
//! - [`Registry`] - Deduplicated record set
//!
//! ## Querying
//! - [`query()`] - Filter, sort and paginate in one call
//! - [`QueryOptions`] - Per-call query configuration
//! - [`QuerySession`] - Caller-owned session state
//!
//! ## Errors
//! - [`CatalogError`], [`EncodingError`], [`ParseWarning`]

// ============================================================================
// Records
// ============================================================================

pub use crate::catalog::record::{EmojiRecord, Source};

// ============================================================================
// Parsing
// ============================================================================

pub use crate::catalog::parser::{
    LineParser, ParseOutput, SequencesFileParser, TestFileParser, ZwjFileParser,
};
pub use crate::catalog::pipeline::{parse_all, parse_all_with_report, ParseReport};
pub use crate::catalog::registry::Registry;
pub use crate::catalog::source::SourceTexts;

// ============================================================================
// Querying
// ============================================================================

pub use crate::catalog::query::{
    query, Pagination, QueryOptions, QueryResult, SortDirection, SortKey,
};
pub use crate::catalog::session::{PageTarget, QuerySession};

// ============================================================================
// Errors
// ============================================================================

pub use crate::catalog::error::{CatalogError, EncodingError, ParseWarning, WarningKind};
