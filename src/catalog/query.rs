//! Query engine: filter, sort, paginate
//!
//! Every function here is stateless. The caller keeps the filter text, sort
//! key, direction and page in a [`QueryOptions`] value (or a
//! [`QuerySession`](super::session::QuerySession)) and passes it in on each
//! call. [`query`] always applies the steps in the order filter, sort,
//! paginate, so page boundaries are taken from the sorted result.
//!
//! # Example
//!
//! ```
//! use emoji_catalog::{parse_all, query, QueryOptions, SortDirection, SortKey};
//!
//! let records = parse_all(
//!     "1F600 ; fully-qualified # 😀 E1.0 grinning face\n\
//!      2764 FE0F ; fully-qualified # ❤️ E0.6 red heart",
//!     "",
//!     "",
//! );
//!
//! let options = QueryOptions::new()
//!     .with_sort(SortKey::Bytes, SortDirection::Descending)
//!     .with_page_size(1);
//! let result = query(&records, &options);
//!
//! assert_eq!(result.visible[0].name(), "red heart");
//! assert_eq!(result.pagination.total_pages, 2);
//! ```

use super::error::CatalogError;
use super::natural::natural_cmp;
use super::record::EmojiRecord;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Borrow;
use std::cmp::{Ordering, Reverse};
use std::fmt;

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: usize = 256;

/// First page number
pub const FIRST_PAGE: usize = 1;

// ============================================================================
// Sort Keys
// ============================================================================

/// Column to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Code point key, numeric-aware
    CodePoint,
    /// Number of code points
    Count,
    /// UTF-8 escape string, byte order
    Utf8,
    /// UTF-8 byte size
    Bytes,
    /// Lower-cased name, byte order
    Name,
}

impl SortKey {
    /// All sort keys in column order
    pub const ALL: [SortKey; 5] = [
        SortKey::CodePoint,
        SortKey::Count,
        SortKey::Utf8,
        SortKey::Bytes,
        SortKey::Name,
    ];

    /// Look up a key by column name (`codePoint`, `count`, `utf8`, `bytes`, `name`)
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.column() == column)
    }

    /// Column name of this key
    pub fn column(self) -> &'static str {
        match self {
            Self::CodePoint => "codePoint",
            Self::Count => "count",
            Self::Utf8 => "utf8",
            Self::Bytes => "bytes",
            Self::Name => "name",
        }
    }

    /// Ascending comparison of two records under this key
    pub fn compare(self, a: &EmojiRecord, b: &EmojiRecord) -> Ordering {
        match self {
            Self::CodePoint => natural_cmp(a.code_point_key(), b.code_point_key()),
            Self::Count => a.code_point_count().cmp(&b.code_point_count()),
            Self::Utf8 => a.utf8_escaped().cmp(b.utf8_escaped()),
            Self::Bytes => a.byte_size().cmp(&b.byte_size()),
            Self::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The other direction
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Apply this direction to an ascending ordering
    #[inline]
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Everything a single [`query`] call needs
///
/// # Example
///
/// ```
/// use emoji_catalog::{QueryOptions, SortDirection, SortKey};
///
/// let options = QueryOptions::from_json(
///     r#"{ "filterText": "heart", "sortKey": "name", "sortDirection": "desc" }"#,
/// )
/// .unwrap();
/// assert_eq!(options.sort_key, Some(SortKey::Name));
/// assert_eq!(options.sort_direction, SortDirection::Descending);
/// assert_eq!(options.page_size, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOptions {
    /// Substring to search for; blank means no filtering
    pub filter_text: String,

    /// Sort column; `None` keeps registry order. Unknown column names
    /// deserialize to `None`.
    #[serde(deserialize_with = "lenient_sort_key")]
    pub sort_key: Option<SortKey>,

    /// Sort direction
    pub sort_direction: SortDirection,

    /// Requested page (1-based, clamped by [`paginate`])
    pub page_number: usize,

    /// Records per page
    pub page_size: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            filter_text: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            page_number: FIRST_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the filter text
    pub fn with_filter(mut self, text: impl Into<String>) -> Self {
        self.filter_text = text.into();
        self
    }

    /// Set the sort key and direction
    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = Some(key);
        self.sort_direction = direction;
        self
    }

    /// Set the sort by column name; an unknown column clears the sort
    pub fn with_sort_column(mut self, column: &str, direction: SortDirection) -> Self {
        self.sort_key = SortKey::from_column(column);
        self.sort_direction = direction;
        self
    }

    /// Set the page number
    pub fn with_page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

fn lenient_sort_key<'de, D>(deserializer: D) -> Result<Option<SortKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let column: Option<String> = Option::deserialize(deserializer)?;
    Ok(column.as_deref().and_then(SortKey::from_column))
}

// ============================================================================
// Filter
// ============================================================================

/// Keep records whose character contains `query` or whose name contains it
/// case-insensitively
///
/// A blank query keeps every record, in order.
pub fn filter<'a>(records: &'a [EmojiRecord], query: &str) -> Vec<&'a EmojiRecord> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }

    let lower = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.character().contains(query) || r.name().to_lowercase().contains(&lower))
        .collect()
}

// ============================================================================
// Sort
// ============================================================================

/// Stable sort by `key` in `direction`
///
/// Descending order reverses the comparison, not the slice, so records that
/// compare equal keep their input order either way.
pub fn sort<R: Borrow<EmojiRecord>>(records: &mut [R], key: SortKey, direction: SortDirection) {
    match key {
        // Lower-case each name once instead of on every comparison
        SortKey::Name => match direction {
            SortDirection::Ascending => {
                records.sort_by_cached_key(|r| r.borrow().name().to_lowercase())
            }
            SortDirection::Descending => {
                records.sort_by_cached_key(|r| Reverse(r.borrow().name().to_lowercase()))
            }
        },
        _ => records.sort_by(|a, b| direction.apply(key.compare(a.borrow(), b.borrow()))),
    }
}

/// Sort by column name; unknown columns leave the slice untouched
pub fn sort_by_column<R: Borrow<EmojiRecord>>(
    records: &mut [R],
    column: &str,
    direction: SortDirection,
) {
    match SortKey::from_column(column) {
        Some(key) => sort(records, key, direction),
        None => {
            log_debug!("ignoring unknown sort column {:?}", column);
        }
    }
}

// ============================================================================
// Pagination
// ============================================================================

/// Page bounds and counts
///
/// `start_index` and `end_index` are 1-based and inclusive, for display. Both
/// are 0 when there are no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page actually shown, after clamping
    pub page_number: usize,
    /// Records per page
    pub page_size: usize,
    /// Number of pages (0 when there are no items)
    pub total_pages: usize,
    /// Number of items across all pages
    pub total_items: usize,
    /// First item on this page (1-based)
    pub start_index: usize,
    /// Last item on this page (1-based, inclusive)
    pub end_index: usize,
}

impl Pagination {
    /// True if there is an earlier page
    pub fn has_previous(&self) -> bool {
        self.page_number > FIRST_PAGE
    }

    /// True if there is a later page
    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// `Page N of M`; an empty result reads as page 1 of 1
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page_number, self.total_pages.max(1))
    }
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {}-{} of {}",
            self.start_index, self.end_index, self.total_items
        )
    }
}

/// One page of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page
    pub items: &'a [T],
    /// Bounds and counts
    pub pagination: Pagination,
}

/// Cut one page out of `records`
///
/// `page_number` is clamped to `[1, max(1, total_pages)]`. A `page_size` of 0
/// is treated as 1.
pub fn paginate<T>(records: &[T], page_number: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_items = records.len();
    let total_pages = total_items.div_ceil(page_size);
    let page_number = page_number.clamp(FIRST_PAGE, total_pages.max(FIRST_PAGE));

    let (start_index, end_index) = if total_items == 0 {
        (0, 0)
    } else {
        let start = (page_number - 1) * page_size + 1;
        let end = start.saturating_add(page_size - 1).min(total_items);
        (start, end)
    };

    let items = if total_items == 0 {
        &records[..0]
    } else {
        &records[start_index - 1..end_index]
    };

    Page {
        items,
        pagination: Pagination {
            page_number,
            page_size,
            total_pages,
            total_items,
            start_index,
            end_index,
        },
    }
}

// ============================================================================
// Query
// ============================================================================

/// The visible page of a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult<'a> {
    /// Records on the requested page
    pub visible: Vec<&'a EmojiRecord>,
    /// Page bounds; `total_items` is the number of records that matched
    pub pagination: Pagination,
}

impl QueryResult<'_> {
    /// True if nothing matched
    pub fn is_empty(&self) -> bool {
        self.pagination.total_items == 0
    }

    /// Render the result as JSON for a presentation layer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Filter, sort, then paginate
pub fn query<'a>(records: &'a [EmojiRecord], options: &QueryOptions) -> QueryResult<'a> {
    let mut matched = filter(records, &options.filter_text);

    if let Some(key) = options.sort_key {
        sort(&mut matched, key, options.sort_direction);
    }

    let page = paginate(&matched, options.page_number, options.page_size);
    QueryResult {
        visible: page.items.to_vec(),
        pagination: page.pagination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::Source;

    fn record(cps: &[&str], name: &str) -> EmojiRecord {
        EmojiRecord::new(cps, name, Source::TestFile).unwrap()
    }

    fn sample() -> Vec<EmojiRecord> {
        vec![
            record(&["1F600"], "grinning face"),
            record(&["2764", "FE0F"], "red heart"),
            record(&["1F494"], "broken heart"),
            record(&["0023", "FE0F", "20E3"], "keycap: #"),
        ]
    }

    fn names<R: Borrow<EmojiRecord>>(records: &[R]) -> Vec<&str> {
        records.iter().map(|r| r.borrow().name()).collect()
    }

    #[test]
    fn test_filter_blank_query_keeps_everything() {
        let records = sample();
        assert_eq!(filter(&records, "").len(), 4);
        assert_eq!(filter(&records, "   ").len(), 4);
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let records = sample();
        let hearts = filter(&records, "HEART");
        assert_eq!(names(&hearts), vec!["red heart", "broken heart"]);
    }

    #[test]
    fn test_filter_by_character() {
        let records = sample();
        assert_eq!(names(&filter(&records, "😀")), vec!["grinning face"]);
        assert_eq!(names(&filter(&records, "#")), vec!["keycap: #"]);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter(&sample(), "nonexistent").is_empty());
    }

    #[test]
    fn test_sort_code_point_numeric() {
        let mut records = vec![record(&["10"], "ten"), record(&["2"], "two")];
        sort(&mut records, SortKey::CodePoint, SortDirection::Ascending);
        assert_eq!(names(&records), vec!["two", "ten"]);
    }

    #[test]
    fn test_sort_descending_keeps_ties_in_order() {
        let mut records = vec![
            record(&["1F600"], "a"),
            record(&["1F601"], "b"),
            record(&["0041"], "c"),
            record(&["1F602"], "d"),
        ];
        sort(&mut records, SortKey::Bytes, SortDirection::Descending);
        assert_eq!(names(&records), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_sort_name_case_insensitive() {
        let mut records = vec![
            record(&["41"], "beta"),
            record(&["42"], "Alpha"),
            record(&["43"], "gamma"),
        ];
        sort(&mut records, SortKey::Name, SortDirection::Ascending);
        assert_eq!(names(&records), vec!["Alpha", "beta", "gamma"]);
        sort(&mut records, SortKey::Name, SortDirection::Descending);
        assert_eq!(names(&records), vec!["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn test_sort_count_and_utf8() {
        let mut records = sample();
        sort(&mut records, SortKey::Count, SortDirection::Descending);
        assert_eq!(records[0].name(), "keycap: #");

        sort(&mut records, SortKey::Utf8, SortDirection::Ascending);
        // "\x23..." sorts before "\xE2..." and "\xF0..."
        assert_eq!(records[0].name(), "keycap: #");
    }

    #[test]
    fn test_sort_unknown_column_is_noop() {
        let mut records = sample();
        let before = records.clone();
        sort_by_column(&mut records, "favorite", SortDirection::Descending);
        assert_eq!(records, before);
    }

    #[test]
    fn test_paginate_empty() {
        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 1, 256);
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
        assert_eq!(page.pagination.start_index, 0);
        assert_eq!(page.pagination.end_index, 0);
        assert_eq!(page.pagination.page_number, 1);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let items: Vec<usize> = (0..257).collect();
        let page = paginate(&items, 2, 256);
        assert_eq!(page.items, &[256]);
        assert_eq!(page.pagination.start_index, 257);
        assert_eq!(page.pagination.end_index, 257);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(page.pagination.has_previous());
        assert!(!page.pagination.has_next());
    }

    #[test]
    fn test_paginate_clamps_page_number() {
        let items: Vec<usize> = (0..10).collect();
        assert_eq!(paginate(&items, 0, 4).pagination.page_number, 1);
        let page = paginate(&items, 99, 4);
        assert_eq!(page.pagination.page_number, 3);
        assert_eq!(page.items, &[8, 9]);
    }

    #[test]
    fn test_paginate_zero_page_size() {
        let items = [1, 2, 3];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.pagination.page_size, 1);
        assert_eq!(page.items, &[2]);
    }

    #[test]
    fn test_pagination_labels() {
        let items: Vec<usize> = (0..300).collect();
        let pagination = paginate(&items, 1, 256).pagination;
        assert_eq!(pagination.to_string(), "Showing 1-256 of 300");
        assert_eq!(pagination.page_label(), "Page 1 of 2");

        let empty: [usize; 0] = [];
        let pagination = paginate(&empty, 1, 256).pagination;
        assert_eq!(pagination.page_label(), "Page 1 of 1");
    }

    #[test]
    fn test_query_order_filter_sort_paginate() {
        let records = sample();
        let options = QueryOptions::new()
            .with_filter("heart")
            .with_sort(SortKey::Name, SortDirection::Ascending)
            .with_page_size(1)
            .with_page(2);
        let result = query(&records, &options);
        assert_eq!(names(&result.visible), vec!["red heart"]);
        assert_eq!(result.pagination.total_items, 2);
        assert_eq!(result.pagination.start_index, 2);
    }

    #[test]
    fn test_query_empty_result() {
        let records = sample();
        let result = query(&records, &QueryOptions::new().with_filter("zzz"));
        assert!(result.is_empty());
        assert_eq!(result.pagination.total_pages, 0);
    }

    #[test]
    fn test_options_json_unknown_column() {
        let options = QueryOptions::from_json(r#"{ "sortKey": "favorite" }"#).unwrap();
        assert_eq!(options.sort_key, None);
        assert_eq!(options, QueryOptions::default());
    }

    #[test]
    fn test_options_json_invalid() {
        assert!(matches!(
            QueryOptions::from_json(r#"{ "pageSize": "many" }"#),
            Err(CatalogError::InvalidOptions { .. })
        ));
    }

    #[test]
    fn test_options_json_round_trip() {
        let options = QueryOptions::new()
            .with_filter("cook")
            .with_sort(SortKey::CodePoint, SortDirection::Descending)
            .with_page(3)
            .with_page_size(64);
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains(r#""sortKey":"codePoint""#));
        assert!(json.contains(r#""sortDirection":"desc""#));
        assert_eq!(QueryOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn test_sort_key_columns() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_column(key.column()), Some(key));
        }
        assert_eq!(SortKey::from_column("CodePoint"), None);
    }
}
