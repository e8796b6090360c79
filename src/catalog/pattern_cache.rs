//! Thread-local cache of compiled line grammars
//!
//! Each registry file format has one line grammar. The regexes are compiled on
//! first use per thread and reused for every following line, so parsing a
//! file costs one compilation rather than one per line.

use hashbrown::HashMap;
use regex::Regex;
use std::cell::RefCell;

/// `CODEPOINTS ; STATUS # COMMENT` (emoji-test.txt)
const TEST_LINE: &str = r"(?i)^([0-9A-F ]+)\s*;\s*([^#]+)\s*#\s*(.+)$";

/// `CODEPOINTS ; TYPE ; NAME` (emoji-sequences.txt, emoji-zwj-sequences.txt)
const SEMICOLON_LINE: &str = r"(?i)^([0-9A-F ]+)\s*;\s*([^;]+)\s*;\s*(.+)$";

/// The line grammars used by the registry files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineGrammar {
    /// `CODEPOINTS ; STATUS # COMMENT`
    StatusComment,
    /// `CODEPOINTS ; TYPE ; NAME`
    SemicolonFields,
}

impl LineGrammar {
    /// Regex source for this grammar
    pub fn pattern(self) -> &'static str {
        match self {
            Self::StatusComment => TEST_LINE,
            Self::SemicolonFields => SEMICOLON_LINE,
        }
    }
}

/// The three fields of a matched line, untrimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFields<'a> {
    /// Run of hex tokens and spaces before the first `;`
    pub code_points: &'a str,
    /// Status (test file) or type field
    pub kind: &'a str,
    /// Comment (test file) or name field
    pub rest: &'a str,
}

thread_local! {
    /// Thread-local cache of compiled grammars
    static PATTERN_CACHE: RefCell<HashMap<LineGrammar, Regex>> = RefCell::new(HashMap::new());
}

/// Match `line` against `grammar`
///
/// Returns `None` if the line does not have the grammar's shape.
pub fn match_fields(grammar: LineGrammar, line: &str) -> Option<LineFields<'_>> {
    PATTERN_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        let regex = match cache.entry(grammar) {
            hashbrown::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            hashbrown::hash_map::Entry::Vacant(entry) => {
                let compiled = Regex::new(grammar.pattern()).ok()?;
                log_debug!("compiled line grammar {:?}", grammar);
                entry.insert(compiled)
            }
        };

        let caps = regex.captures(line)?;
        Some(LineFields {
            code_points: caps.get(1)?.as_str(),
            kind: caps.get(2)?.as_str(),
            rest: caps.get(3)?.as_str(),
        })
    })
}

/// Clear the cache
pub fn clear_cache() {
    PATTERN_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Get the number of compiled grammars
pub fn cache_size() -> usize {
    PATTERN_CACHE.with(|cache| cache.borrow().len())
}
