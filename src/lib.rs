//! emoji-catalog - Unicode Emoji Registry Parser and Query Engine
//!
//! This crate ingests the plain-text emoji registry files published by
//! Unicode and exposes the parsed records through a small query engine.
//! It provides:
//! - A code point codec (hex tokens to characters, UTF-8 escapes and byte sizes)
//! - Line parsers for `emoji-test.txt`, `emoji-sequences.txt` and
//!   `emoji-zwj-sequences.txt`
//! - A registry that merges the three files and deduplicates by code point key
//! - A stateless query engine (filter, sort, paginate)
//! - A session helper that owns the mutable filter/sort/page state
//!
//! ## Quick Start
//!
//! ```rust
//! use emoji_catalog::{parse_all, query, QueryOptions, SortDirection, SortKey};
//!
//! let test = "1F600 ; fully-qualified # 😀 E1.0 grinning face\n\
//!             1F603 ; fully-qualified # 😃 E0.6 grinning face with big eyes";
//! let sequences = "0023 FE0F 20E3 ; RGI_Emoji_Keycap_Sequence ; keycap: #";
//! let zwj = "1F468 200D 1F373 ; RGI_Emoji_ZWJ_Sequence ; man cook";
//!
//! let records = parse_all(test, sequences, zwj);
//! assert_eq!(records.len(), 4);
//!
//! let options = QueryOptions::new()
//!     .with_filter("grinning")
//!     .with_sort(SortKey::Name, SortDirection::Descending);
//! let result = query(&records, &options);
//! assert_eq!(result.visible[0].name(), "grinning face with big eyes");
//! assert_eq!(result.pagination.total_items, 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` (default) - Report skipped lines and parse totals through the `log` crate
//! - `parallel` - Parse the three source files concurrently using rayon

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

/// Logging macros - no-op when logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macros - use log crate when logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(feature = "logging")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

// Prelude module for convenient imports
pub mod prelude;

// Parsing, registry and query core
pub mod catalog;

/// Re-export commonly used types for convenience
pub use catalog::{
    // Codec
    codec::{encode, escape_utf8, unescape_utf8, Encoded},
    // Errors and diagnostics
    error::{CatalogError, EncodingError, ParseWarning, WarningKind},
    // Pipeline
    pipeline::{parse_all, parse_all_with_report, ParseReport, ParseStats},
    // Line parsers
    parser::{LineParser, ParseOutput, SequencesFileParser, TestFileParser, ZwjFileParser},
    // Query engine
    query::{
        filter, paginate, query, sort, sort_by_column, Page, Pagination, QueryOptions,
        QueryResult, SortDirection, SortKey,
    },
    // Records
    record::{EmojiRecord, Source},
    // Registry
    registry::Registry,
    // Session
    session::{PageTarget, QuerySession},
    // Sources
    source::SourceTexts,
};
