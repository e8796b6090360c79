//! Merged, deduplicated record set
//!
//! The registry concatenates parser output in a fixed priority order
//! (test file, then sequences, then ZWJ sequences) and keeps the first record
//! seen for every code point key. The result keeps insertion order; it is
//! never sorted here.

use super::record::{EmojiRecord, Source};
use hashbrown::HashMap;

type KeyIndex = HashMap<String, usize, ahash::RandomState>;

/// The canonical record set
#[derive(Debug, Clone, Default)]
pub struct Registry {
    records: Vec<EmojiRecord>,
    index: KeyIndex,
    duplicates_dropped: usize,
}

impl Registry {
    /// Merge the three parser outputs in priority order
    ///
    /// ```
    /// use emoji_catalog::{EmojiRecord, Registry, Source};
    ///
    /// let test = vec![EmojiRecord::new(["1F600"], "grinning face", Source::TestFile).unwrap()];
    /// let other = EmojiRecord::new(["1F600"], "other name", Source::SequencesFile).unwrap();
    /// let sequences = vec![other];
    ///
    /// let registry = Registry::build(test, sequences, Vec::new());
    /// assert_eq!(registry.len(), 1);
    /// assert_eq!(registry.records()[0].source(), Source::TestFile);
    /// ```
    pub fn build(
        test: Vec<EmojiRecord>,
        sequences: Vec<EmojiRecord>,
        zwj: Vec<EmojiRecord>,
    ) -> Self {
        let registry = Self::from_records(test.into_iter().chain(sequences).chain(zwj));
        log_info!(
            "Total unique emojis: {} ({} duplicates dropped)",
            registry.len(),
            registry.duplicates_dropped
        );
        registry
    }

    /// Deduplicate records in the order given, keeping first occurrences
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = EmojiRecord>,
    {
        let iter = records.into_iter();
        let (lower, _) = iter.size_hint();

        let mut registry = Self {
            records: Vec::with_capacity(lower),
            index: KeyIndex::with_capacity_and_hasher(lower, ahash::RandomState::new()),
            duplicates_dropped: 0,
        };

        for record in iter {
            if registry.index.contains_key(record.code_point_key()) {
                log_debug!(
                    "dropping duplicate {} from {}",
                    record.code_point_key(),
                    record.source()
                );
                registry.duplicates_dropped += 1;
                continue;
            }
            registry
                .index
                .insert(record.code_point_key().to_string(), registry.records.len());
            registry.records.push(record);
        }

        registry
    }

    /// Records in first-occurrence order
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Take the records out of the registry
    pub fn into_records(self) -> Vec<EmojiRecord> {
        self.records
    }

    /// Iterate over the records
    pub fn iter(&self) -> std::slice::Iter<'_, EmojiRecord> {
        self.records.iter()
    }

    /// Number of unique records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its code point key (`U+1F600`)
    pub fn get(&self, key: &str) -> Option<&EmojiRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    /// True if a record with this key exists
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// How many later duplicates were discarded while building
    pub fn duplicates_dropped(&self) -> usize {
        self.duplicates_dropped
    }

    /// Number of kept records that came from `source`
    pub fn count_by_source(&self, source: Source) -> usize {
        self.records.iter().filter(|r| r.source() == source).count()
    }
}

impl PartialEq for Registry {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for Registry {}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a EmojiRecord;
    type IntoIter = std::slice::Iter<'a, EmojiRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cps: &[&str], name: &str, source: Source) -> EmojiRecord {
        EmojiRecord::new(cps, name, source).unwrap()
    }

    #[test]
    fn test_priority_order() {
        let keycap = ["0023", "FE0F", "20E3"];
        let test = vec![record(&["1F600"], "from test", Source::TestFile)];
        let sequences = vec![
            record(&["1F600"], "from sequences", Source::SequencesFile),
            record(&keycap, "keycap: #", Source::SequencesFile),
        ];
        let zwj = vec![
            record(&keycap, "dup keycap", Source::ZwjFile),
            record(&["1F468", "200D", "1F373"], "man cook", Source::ZwjFile),
        ];

        let registry = Registry::build(test, sequences, zwj);
        let names: Vec<&str> = registry.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["from test", "keycap: #", "man cook"]);
        assert_eq!(registry.duplicates_dropped(), 2);
        assert_eq!(registry.count_by_source(Source::TestFile), 1);
        assert_eq!(registry.count_by_source(Source::SequencesFile), 1);
        assert_eq!(registry.count_by_source(Source::ZwjFile), 1);
    }

    #[test]
    fn test_duplicates_within_one_source() {
        let test = vec![
            record(&["1F600"], "first", Source::TestFile),
            record(&["1F600"], "second", Source::TestFile),
        ];
        let registry = Registry::build(test, Vec::new(), Vec::new());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.records()[0].name(), "first");
    }

    #[test]
    fn test_lookup() {
        let cook = ["1F468", "200D", "1F373"];
        let registry = Registry::build(
            vec![record(&["1F600"], "grinning face", Source::TestFile)],
            Vec::new(),
            vec![record(&cook, "man cook", Source::ZwjFile)],
        );
        let found = registry.get("U+1F468 U+200D U+1F373").unwrap();
        assert_eq!(found.name(), "man cook");
        assert!(registry.contains("U+1F600"));
        assert!(!registry.contains("U+1F601"));
        assert!(registry.get("1F600").is_none());
    }

    #[test]
    fn test_empty() {
        let registry = Registry::build(Vec::new(), Vec::new(), Vec::new());
        assert!(registry.is_empty());
        assert_eq!(registry.duplicates_dropped(), 0);
        assert!(registry.into_records().is_empty());
    }
}
