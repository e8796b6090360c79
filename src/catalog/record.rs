//! Emoji records
//!
//! An [`EmojiRecord`] is created from one line of one registry file and is
//! never mutated afterwards. All derived fields (key, character, UTF-8
//! rendering, byte size) are computed once, in [`EmojiRecord::new`].

use super::codec::{self, Encoded};
use super::error::EncodingError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL of the published registry files
pub const UPSTREAM_BASE_URL: &str = "https://www.unicode.org/Public/emoji/latest/";

/// Which registry file a record was parsed from
///
/// The declaration order is the merge priority used by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    /// `emoji-test.txt`
    #[serde(rename = "emoji-test.txt")]
    TestFile,
    /// `emoji-sequences.txt`
    #[serde(rename = "emoji-sequences.txt")]
    SequencesFile,
    /// `emoji-zwj-sequences.txt`
    #[serde(rename = "emoji-zwj-sequences.txt")]
    ZwjFile,
}

impl Source {
    /// All sources, in merge priority order
    pub const ALL: [Source; 3] = [Source::TestFile, Source::SequencesFile, Source::ZwjFile];

    /// Canonical file name
    pub fn file_name(self) -> &'static str {
        match self {
            Self::TestFile => "emoji-test.txt",
            Self::SequencesFile => "emoji-sequences.txt",
            Self::ZwjFile => "emoji-zwj-sequences.txt",
        }
    }

    /// Where unicode.org publishes the latest version of this file
    pub fn upstream_url(self) -> String {
        format!("{}{}", UPSTREAM_BASE_URL, self.file_name())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// One emoji from a registry file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiRecord {
    code_points: Vec<String>,
    code_point_key: String,
    code_point_count: usize,
    character: String,
    utf8_escaped: String,
    byte_size: usize,
    name: String,
    source: Source,
}

impl EmojiRecord {
    /// Build a record from hex code point tokens
    ///
    /// Tokens are uppercased; the name is trimmed. Fails if any token is not
    /// a valid Unicode scalar value or the sequence is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use emoji_catalog::{EmojiRecord, Source};
    ///
    /// let record = EmojiRecord::new(["1f600"], "grinning face", Source::TestFile).unwrap();
    /// assert_eq!(record.code_point_key(), "U+1F600");
    /// assert_eq!(record.character(), "😀");
    /// assert_eq!(record.byte_size(), 4);
    /// ```
    pub fn new<I, S>(code_points: I, name: &str, source: Source) -> Result<Self, EncodingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let code_points: Vec<String> = code_points
            .into_iter()
            .map(|cp| cp.as_ref().to_ascii_uppercase())
            .collect();

        let Encoded {
            character,
            utf8_escaped,
            byte_size,
        } = codec::encode(&code_points)?;

        Ok(Self {
            code_point_key: code_point_key(&code_points),
            code_point_count: code_points.len(),
            code_points,
            character,
            utf8_escaped,
            byte_size,
            name: name.trim().to_string(),
            source,
        })
    }

    /// Hex tokens, uppercase, in input order
    pub fn code_points(&self) -> &[String] {
        &self.code_points
    }

    /// Canonical key, e.g. `U+1F468 U+200D U+1F373`
    pub fn code_point_key(&self) -> &str {
        &self.code_point_key
    }

    /// Number of code points
    pub fn code_point_count(&self) -> usize {
        self.code_point_count
    }

    /// The decoded emoji
    pub fn character(&self) -> &str {
        &self.character
    }

    /// `\xHH` rendering of the UTF-8 bytes of [`character`](Self::character)
    pub fn utf8_escaped(&self) -> &str {
        &self.utf8_escaped
    }

    /// Number of UTF-8 bytes in [`character`](Self::character)
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File the record was parsed from
    pub fn source(&self) -> Source {
        self.source
    }
}

impl fmt::Display for EmojiRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.code_point_key, self.character, self.name
        )
    }
}

/// Join tokens as `U+XXXX` separated by single spaces
pub fn code_point_key<S: AsRef<str>>(code_points: &[S]) -> String {
    let mut key = String::with_capacity(code_points.len() * 8);
    for (i, cp) in code_points.iter().enumerate() {
        if i > 0 {
            key.push(' ');
        }
        key.push_str("U+");
        key.push_str(cp.as_ref());
    }
    key
}
