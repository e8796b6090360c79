//! Property-based tests using proptest
//!
//! These tests check the codec, registry and query engine against randomly
//! generated code point sequences and record sets.

use emoji_catalog::catalog::codec::code_points_of;
use emoji_catalog::catalog::natural::natural_cmp;
use emoji_catalog::{
    encode, escape_utf8, filter, paginate, sort, unescape_utf8, EmojiRecord, Registry,
    SortDirection, SortKey, Source,
};
use proptest::prelude::*;
use std::cmp::Ordering;

/// A valid scalar value rendered as an uppercase hex token
fn code_point_token() -> impl Strategy<Value = String> {
    any::<char>().prop_map(|c| format!("{:04X}", c as u32))
}

fn code_point_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(code_point_token(), 1..6)
}

fn make_record((cps, name, source): (Vec<String>, String, usize)) -> EmojiRecord {
    EmojiRecord::new(cps, &name, Source::ALL[source]).unwrap()
}

fn record_strategy() -> impl Strategy<Value = EmojiRecord> {
    let cps = code_point_sequence();
    let name = "[a-z]{1,8}( [a-z]{1,8}){0,2}";
    (cps, name, 0usize..3).prop_map(make_record)
}

fn records_strategy() -> impl Strategy<Value = Vec<EmojiRecord>> {
    prop::collection::vec(record_strategy(), 0..40)
}

// =============================================================================
// Codec Properties
// =============================================================================

proptest! {
    /// Decoding the escape string reproduces the UTF-8 bytes of the character
    #[test]
    fn test_escape_round_trip(cps in code_point_sequence()) {
        let encoded = encode(&cps).unwrap();
        let bytes = unescape_utf8(&encoded.utf8_escaped).unwrap();
        prop_assert_eq!(bytes.as_slice(), encoded.character.as_bytes());
        prop_assert_eq!(encoded.byte_size, bytes.len());
    }

    /// Every byte is escaped as exactly four characters
    #[test]
    fn test_escape_length(text in "\\PC{0,16}") {
        prop_assert_eq!(escape_utf8(&text).len(), text.len() * 4);
    }

    /// Lowercase tokens encode the same as uppercase ones
    #[test]
    fn test_token_case_insensitive(cps in code_point_sequence()) {
        let lower: Vec<String> = cps.iter().map(|cp| cp.to_lowercase()).collect();
        prop_assert_eq!(encode(&lower).unwrap(), encode(&cps).unwrap());
    }

    /// A record's character decodes back to its code point tokens
    #[test]
    fn test_character_round_trip(record in record_strategy()) {
        let decoded = code_points_of(record.character());
        prop_assert_eq!(decoded.as_slice(), record.code_points());
    }
}

// =============================================================================
// Registry Properties
// =============================================================================

proptest! {
    /// Building twice from the same input gives the same registry
    #[test]
    fn test_registry_idempotent(
        test in records_strategy(),
        sequences in records_strategy(),
        zwj in records_strategy(),
    ) {
        let a = Registry::build(test.clone(), sequences.clone(), zwj.clone());
        let b = Registry::build(test, sequences, zwj);
        prop_assert_eq!(a.records(), b.records());
    }

    /// Keys are unique and every input key is represented by its first occurrence
    #[test]
    fn test_registry_first_occurrence_wins(records in records_strategy()) {
        let registry = Registry::from_records(records.clone());
        let dropped = registry.duplicates_dropped();
        prop_assert_eq!(registry.len() + dropped, records.len());

        for record in &records {
            let kept = registry.get(record.code_point_key()).unwrap();
            let first = records
                .iter()
                .find(|r| r.code_point_key() == record.code_point_key())
                .unwrap();
            prop_assert_eq!(kept, first);
        }
    }
}

// =============================================================================
// Query Properties
// =============================================================================

proptest! {
    /// Filtering returns a subsequence of the input
    #[test]
    fn test_filter_is_subsequence(records in records_strategy(), q in "[a-z ]{0,4}") {
        let found = filter(&records, &q);
        let mut rest = records.iter();
        for record in found {
            prop_assert!(rest.any(|r| std::ptr::eq(r, record)));
        }
    }

    /// Sorting is stable: ties keep their input order in both directions
    #[test]
    fn test_sort_stable(records in records_strategy(), key in 0usize..5, descending: bool) {
        let key = SortKey::ALL[key];
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };

        let mut expected: Vec<&EmojiRecord> = records.iter().collect();
        let mut sorted = expected.clone();
        sort(&mut sorted, key, direction);
        expected.sort_by(|a, b| direction.apply(key.compare(a, b)));
        prop_assert_eq!(sorted, expected);
    }

    /// Pages tile the input without gaps or overlap
    #[test]
    fn test_pages_cover_input(len in 0usize..600, page_size in 1usize..300) {
        let items: Vec<usize> = (0..len).collect();
        let total_pages = paginate(&items, 1, page_size).pagination.total_pages;

        let mut seen = Vec::new();
        for page_number in 1..=total_pages {
            let page = paginate(&items, page_number, page_size);
            prop_assert_eq!(page.pagination.page_number, page_number);
            let pagination = page.pagination;
            prop_assert_eq!(page.items.len(), pagination.end_index + 1 - pagination.start_index);
            seen.extend_from_slice(page.items);
        }
        prop_assert_eq!(seen, items);
    }

    /// Out-of-range page numbers land on the nearest valid page
    #[test]
    fn test_page_clamp(len in 0usize..100, page_size in 1usize..20, page in 0usize..50) {
        let items: Vec<usize> = (0..len).collect();
        let pagination = paginate(&items, page, page_size).pagination;
        prop_assert!(pagination.page_number >= 1);
        prop_assert!(pagination.page_number <= pagination.total_pages.max(1));
    }

    /// Natural order agrees with numeric order on plain numbers
    #[test]
    fn test_natural_numbers(a in 0u64..100_000, b in 0u64..100_000) {
        let ord = natural_cmp(&format!("U+{}", a), &format!("U+{}", b));
        prop_assert_eq!(ord, a.cmp(&b));
    }

    /// Natural order is antisymmetric
    #[test]
    fn test_natural_antisymmetric(a in "[0-9A-F+ U]{0,12}", b in "[0-9A-F+ U]{0,12}") {
        prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
        prop_assert_eq!(natural_cmp(&a, &a), Ordering::Equal);
    }
}
