//! Parse-and-merge entry points
//!
//! [`parse_all`] runs the three line parsers and hands their output to
//! [`Registry::build`] once all three are done. There is no partial merge.
//!
//! # Feature Flag
//!
//! With the `parallel` feature the three files are parsed concurrently on the
//! rayon thread pool:
//!
//! ```toml
//! [dependencies]
//! emoji-catalog = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! Without it the same functions parse the files one after another. Output is
//! identical either way.

use super::error::ParseWarning;
use super::parser::{LineParser, ParseOutput, SequencesFileParser, TestFileParser, ZwjFileParser};
use super::record::{EmojiRecord, Source};
use super::registry::Registry;

/// Counts collected while parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Records parsed from `emoji-test.txt`
    pub test_records: usize,
    /// Records parsed from `emoji-sequences.txt`
    pub sequences_records: usize,
    /// Records parsed from `emoji-zwj-sequences.txt`
    pub zwj_records: usize,
    /// Records kept after deduplication
    pub unique_records: usize,
    /// Records dropped as duplicates
    pub duplicates_dropped: usize,
    /// Non-comment lines skipped across all files
    pub skipped_lines: usize,
}

impl ParseStats {
    /// Records parsed from `source`, before deduplication
    pub fn parsed(&self, source: Source) -> usize {
        match source {
            Source::TestFile => self.test_records,
            Source::SequencesFile => self.sequences_records,
            Source::ZwjFile => self.zwj_records,
        }
    }
}

/// Everything produced by one parse of the three files
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// The merged record set
    pub registry: Registry,
    /// Skipped lines, tagged with the file they came from
    pub warnings: Vec<(Source, ParseWarning)>,
    /// Counts
    pub stats: ParseStats,
}

/// Parse and merge the three registry files
///
/// ```
/// use emoji_catalog::parse_all;
///
/// let records = parse_all(
///     "1F600 ; fully-qualified # 😀 E1.0 grinning face",
///     "1F600 ; Basic_Emoji ; grinning face",
///     "1F468 200D 1F373 ; RGI_Emoji_ZWJ_Sequence ; man cook",
/// );
/// assert_eq!(records.len(), 2);
/// ```
pub fn parse_all(test: &str, sequences: &str, zwj: &str) -> Vec<EmojiRecord> {
    parse_all_with_report(test, sequences, zwj)
        .registry
        .into_records()
}

/// Parse and merge the three registry files, keeping diagnostics
pub fn parse_all_with_report(test: &str, sequences: &str, zwj: &str) -> ParseReport {
    let [test_out, sequences_out, zwj_out] = parse_sources(test, sequences, zwj);

    let mut stats = ParseStats {
        test_records: test_out.records.len(),
        sequences_records: sequences_out.records.len(),
        zwj_records: zwj_out.records.len(),
        ..ParseStats::default()
    };

    let mut warnings = Vec::new();
    for (source, output) in [
        (Source::TestFile, &test_out),
        (Source::SequencesFile, &sequences_out),
        (Source::ZwjFile, &zwj_out),
    ] {
        warnings.extend(output.warnings.iter().cloned().map(|w| (source, w)));
    }
    stats.skipped_lines = warnings.len();

    let registry = Registry::build(test_out.records, sequences_out.records, zwj_out.records);
    stats.unique_records = registry.len();
    stats.duplicates_dropped = registry.duplicates_dropped();

    ParseReport {
        registry,
        warnings,
        stats,
    }
}

/// Run the three parsers concurrently
#[cfg(feature = "rayon")]
fn parse_sources(test: &str, sequences: &str, zwj: &str) -> [ParseOutput; 3] {
    let (test_out, (sequences_out, zwj_out)) = rayon::join(
        || TestFileParser.parse(test),
        || {
            rayon::join(
                || SequencesFileParser.parse(sequences),
                || ZwjFileParser.parse(zwj),
            )
        },
    );
    [test_out, sequences_out, zwj_out]
}

/// Run the three parsers one after another (fallback when rayon is not available)
#[cfg(not(feature = "rayon"))]
fn parse_sources(test: &str, sequences: &str, zwj: &str) -> [ParseOutput; 3] {
    [
        TestFileParser.parse(test),
        SequencesFileParser.parse(sequences),
        ZwjFileParser.parse(zwj),
    ]
}
