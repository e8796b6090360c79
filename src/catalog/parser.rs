//! Line parsers for the emoji registry files
//!
//! Each file format gets one stateless parser implementing [`LineParser`]:
//!
//! | Parser | Line grammar | Name |
//! |--------|--------------|------|
//! | [`TestFileParser`] | `CODEPOINTS ; STATUS # CHAR VERSION NAME` | text after the version token |
//! | [`SequencesFileParser`] | `CODEPOINTS ; TYPE ; NAME` | third field |
//! | [`ZwjFileParser`] | `CODEPOINTS ; TYPE ; NAME` | third field |
//!
//! Blank lines and `#` comments are skipped silently. Any other line that
//! cannot be turned into a record is skipped with a [`ParseWarning`]; a bad
//! line never aborts the rest of the file.
//!
//! # Example
//!
//! ```
//! use emoji_catalog::{LineParser, TestFileParser};
//!
//! let input = "1F600 ; fully-qualified # 😀 E1.0 grinning face\n\
//!              INVALID LINE\n\
//!              1F603 ; fully-qualified # 😃 E0.6 grinning face with big eyes";
//!
//! let output = TestFileParser.parse(input);
//! assert_eq!(output.records.len(), 2);
//! assert_eq!(output.warnings.len(), 1);
//! assert_eq!(output.warnings[0].line_number, 2);
//! ```

use super::error::{ParseWarning, WarningKind};
use super::name::extract_test_name;
use super::pattern_cache::{match_fields, LineGrammar};
use super::record::{EmojiRecord, Source};

/// Records and skipped-line diagnostics from one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutput {
    /// Parsed records, in file order
    pub records: Vec<EmojiRecord>,
    /// One entry per skipped non-comment line
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutput {
    /// True if no line was skipped
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A parser for one registry file format
pub trait LineParser {
    /// Which file this parser reads
    fn source(&self) -> Source;

    /// Parse one non-blank, non-comment line
    fn parse_line(&self, line: &str) -> Result<EmojiRecord, WarningKind>;

    /// Parse a whole file
    fn parse(&self, text: &str) -> ParseOutput {
        let mut output = ParseOutput::default();

        for (index, line) in text.lines().enumerate() {
            if is_skippable(line) {
                continue;
            }

            match self.parse_line(line) {
                Ok(record) => output.records.push(record),
                Err(kind) => {
                    let warning = ParseWarning::new(kind, index + 1, line);
                    log_warn!("{}: skipping {}", self.source(), warning);
                    output.warnings.push(warning);
                }
            }
        }

        log_info!(
            "Parsed {} emojis from {} ({} lines skipped)",
            output.records.len(),
            self.source(),
            output.warnings.len()
        );
        output
    }

    /// Parse a whole file, discarding diagnostics
    fn parse_records(&self, text: &str) -> Vec<EmojiRecord> {
        self.parse(text).records
    }
}

/// Parser for `emoji-test.txt`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestFileParser;

impl LineParser for TestFileParser {
    fn source(&self) -> Source {
        Source::TestFile
    }

    fn parse_line(&self, line: &str) -> Result<EmojiRecord, WarningKind> {
        let fields =
            match_fields(LineGrammar::StatusComment, line).ok_or(WarningKind::MalformedLine)?;
        let name = extract_test_name(fields.rest.trim());
        build_record(fields.code_points, &name, self.source())
    }
}

/// Parser for `emoji-sequences.txt`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencesFileParser;

impl LineParser for SequencesFileParser {
    fn source(&self) -> Source {
        Source::SequencesFile
    }

    fn parse_line(&self, line: &str) -> Result<EmojiRecord, WarningKind> {
        parse_semicolon_line(line, self.source())
    }
}

/// Parser for `emoji-zwj-sequences.txt`
///
/// Same grammar as [`SequencesFileParser`]; the joiner `200D` is an ordinary
/// code point token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZwjFileParser;

impl LineParser for ZwjFileParser {
    fn source(&self) -> Source {
        Source::ZwjFile
    }

    fn parse_line(&self, line: &str) -> Result<EmojiRecord, WarningKind> {
        parse_semicolon_line(line, self.source())
    }
}

/// The parser for a given source file
pub fn parser_for(source: Source) -> &'static dyn LineParser {
    match source {
        Source::TestFile => &TestFileParser,
        Source::SequencesFile => &SequencesFileParser,
        Source::ZwjFile => &ZwjFileParser,
    }
}

/// Parse `emoji-test.txt` content
pub fn parse_test_file(text: &str) -> Vec<EmojiRecord> {
    TestFileParser.parse_records(text)
}

/// Parse `emoji-sequences.txt` content
pub fn parse_sequences_file(text: &str) -> Vec<EmojiRecord> {
    SequencesFileParser.parse_records(text)
}

/// Parse `emoji-zwj-sequences.txt` content
pub fn parse_zwj_file(text: &str) -> Vec<EmojiRecord> {
    ZwjFileParser.parse_records(text)
}

#[inline]
fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn parse_semicolon_line(line: &str, source: Source) -> Result<EmojiRecord, WarningKind> {
    let fields =
        match_fields(LineGrammar::SemicolonFields, line).ok_or(WarningKind::MalformedLine)?;
    build_record(fields.code_points, fields.rest.trim(), source)
}

fn build_record(
    code_points: &str,
    name: &str,
    source: Source,
) -> Result<EmojiRecord, WarningKind> {
    if name.trim().is_empty() {
        return Err(WarningKind::MissingName);
    }
    EmojiRecord::new(code_points.split_whitespace(), name, source).map_err(WarningKind::from)
}
