//! Raw text of the three registry files
//!
//! Fetching the files from unicode.org is left to the caller; see
//! [`Source::upstream_url`]. [`SourceTexts::load_dir`] reads them from a
//! local directory using their canonical file names.

use super::error::CatalogError;
use super::pipeline::{parse_all_with_report, ParseReport};
use super::record::Source;
use std::fs;
use std::path::Path;

/// Contents of `emoji-test.txt`, `emoji-sequences.txt` and
/// `emoji-zwj-sequences.txt`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTexts {
    /// `emoji-test.txt`
    pub test: String,
    /// `emoji-sequences.txt`
    pub sequences: String,
    /// `emoji-zwj-sequences.txt`
    pub zwj: String,
}

impl SourceTexts {
    /// Wrap already-retrieved file contents
    pub fn new(
        test: impl Into<String>,
        sequences: impl Into<String>,
        zwj: impl Into<String>,
    ) -> Self {
        Self {
            test: test.into(),
            sequences: sequences.into(),
            zwj: zwj.into(),
        }
    }

    /// Read all three files from `dir`
    ///
    /// Every file must exist and be valid UTF-8; the first failure is returned.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let read = |source: Source| {
            let path = dir.join(source.file_name());
            log_debug!("reading {}", path.display());
            fs::read_to_string(&path).map_err(|e| CatalogError::Io {
                path: path.display().to_string(),
                source: e,
            })
        };

        Ok(Self {
            test: read(Source::TestFile)?,
            sequences: read(Source::SequencesFile)?,
            zwj: read(Source::ZwjFile)?,
        })
    }

    /// Text for one source
    pub fn get(&self, source: Source) -> &str {
        match source {
            Source::TestFile => &self.test,
            Source::SequencesFile => &self.sequences,
            Source::ZwjFile => &self.zwj,
        }
    }

    /// Parse and merge all three texts
    pub fn parse(&self) -> ParseReport {
        parse_all_with_report(&self.test, &self.sequences, &self.zwj)
    }
}
