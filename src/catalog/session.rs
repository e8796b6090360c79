//! Caller-owned query session
//!
//! The query engine keeps no state. A [`QuerySession`] is the imperative shell
//! around it: it owns a [`QueryOptions`] value and applies the usual table
//! interactions to it (typing in the search box, clicking a column header,
//! changing the page size, paging). Each mutation is a plain method call; the
//! session is not shared between threads.

use super::query::{query, QueryOptions, QueryResult, SortDirection, SortKey, FIRST_PAGE};
use super::record::EmojiRecord;

/// Where to move in the page list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    /// Page 1
    First,
    /// One page back
    Previous,
    /// One page forward
    Next,
    /// The last page
    Last,
    /// A specific page (1-based)
    Number(usize),
}

/// Filter, sort and page state for one view of the catalog
///
/// # Example
///
/// ```
/// use emoji_catalog::{parse_all, PageTarget, QuerySession, SortDirection, SortKey};
///
/// let records = parse_all(
///     "1F600 ; fully-qualified # 😀 E1.0 grinning face\n\
///      1F603 ; fully-qualified # 😃 E0.6 grinning face with big eyes\n\
///      2764 FE0F ; fully-qualified # ❤️ E0.6 red heart",
///     "",
///     "",
/// );
///
/// let mut session = QuerySession::new();
/// session.set_page_size(2);
/// session.sort_by("name");
/// session.sort_by("name");
/// assert_eq!(session.options().sort_direction, SortDirection::Descending);
///
/// let total_pages = session.run(&records).pagination.total_pages;
/// session.go_to(PageTarget::Last, total_pages);
/// assert_eq!(session.run(&records).visible[0].name(), "grinning face");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySession {
    options: QueryOptions,
}

impl QuerySession {
    /// Start with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing options
    pub fn with_options(options: QueryOptions) -> Self {
        Self { options }
    }

    /// Current options
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Replace the filter text and return to page 1
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.options.filter_text = text.into();
        self.options.page_number = FIRST_PAGE;
    }

    /// Clear the filter and return to page 1
    pub fn clear_filter(&mut self) {
        self.set_filter(String::new());
    }

    /// Sort by a column header
    ///
    /// Selecting the current column toggles the direction; a new column starts
    /// ascending. Returns to page 1. Unknown columns are ignored and return
    /// `false`.
    pub fn sort_by(&mut self, column: &str) -> bool {
        match SortKey::from_column(column) {
            Some(key) => {
                self.sort_by_key(key);
                true
            }
            None => false,
        }
    }

    /// Same as [`sort_by`](Self::sort_by) with a typed key
    pub fn sort_by_key(&mut self, key: SortKey) {
        if self.options.sort_key == Some(key) {
            self.options.sort_direction = self.options.sort_direction.toggled();
        } else {
            self.options.sort_key = Some(key);
            self.options.sort_direction = SortDirection::Ascending;
        }
        self.options.page_number = FIRST_PAGE;
    }

    /// Change the page size and return to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.options.page_size = page_size.max(1);
        self.options.page_number = FIRST_PAGE;
    }

    /// Move to another page, clamped to `[1, max(1, total_pages)]`
    pub fn go_to(&mut self, target: PageTarget, total_pages: usize) {
        let current = self.options.page_number;
        let requested = match target {
            PageTarget::First => FIRST_PAGE,
            PageTarget::Previous => current.saturating_sub(1),
            PageTarget::Next => current.saturating_add(1),
            PageTarget::Last => total_pages,
            PageTarget::Number(n) => n,
        };
        self.options.page_number = requested.clamp(FIRST_PAGE, total_pages.max(FIRST_PAGE));
    }

    /// Run the current options against `records`
    pub fn run<'a>(&self, records: &'a [EmojiRecord]) -> QueryResult<'a> {
        query(records, &self.options)
    }
}
