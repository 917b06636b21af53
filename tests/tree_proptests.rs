//! Property-based tests for the suffix tree engine.
//!
//! Uses a direct substring scan over the inserted keys as the oracle:
//! for any query, an id is in the search result iff the query occurs in
//! that key. Strategies keep alphabets small so keys overlap heavily,
//! which is where the generalized construction earns its keep.

use std::collections::BTreeSet;

use proptest::prelude::*;
use sfxi::tree::SuffixTree;

// ============================================================================
//  Strategies
// ============================================================================

/// Keys over a 4-letter alphabet, 1-24 elements long.
fn small_alphabet_keys(max_count: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'd']), 1..=24),
        1..=max_count,
    )
}

/// Keys over integer elements 0..200, up to 100 elements long.
fn integer_keys(max_count: usize) -> impl Strategy<Value = Vec<Vec<u16>>> {
    prop::collection::vec(prop::collection::vec(0u16..200, 1..=100), 1..=max_count)
}

/// Queries drawn from the same alphabet as the keys, including ones that
/// match nothing.
fn byte_queries(max_count: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'd', b'e']), 1..=8),
        1..=max_count,
    )
}

// ============================================================================
//  Oracle
// ============================================================================

fn occurs_in<E: PartialEq>(needle: &[E], haystack: &[E]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|w| w == needle)
}

fn expected_ids<E: PartialEq>(keys: &[Vec<E>], q: &[E]) -> BTreeSet<u32> {
    keys.iter()
        .enumerate()
        .filter(|(_, key)| occurs_in(q, key))
        .map(|(idx, _)| idx as u32)
        .collect()
}

fn build_tree<E: Ord + Clone>(keys: &[Vec<E>]) -> SuffixTree<E, u32> {
    let mut tree = SuffixTree::new();
    for (idx, key) in keys.iter().enumerate() {
        tree.put(key.clone(), idx as u32).unwrap();
    }
    tree
}

// ============================================================================
//  Properties
// ============================================================================

proptest! {
    /// Every substring of every key finds that key's id, and never an id
    /// whose key lacks the substring.
    #[test]
    fn prop_substring_completeness_and_soundness(keys in small_alphabet_keys(6)) {
        let tree = build_tree(&keys);

        for key in &keys {
            for i in 0..key.len() {
                for j in (i + 1)..=key.len() {
                    let q = &key[i..j];
                    prop_assert_eq!(tree.search(q), expected_ids(&keys, q));
                }
            }
        }
    }

    /// Arbitrary queries (matching or not) agree with the oracle.
    #[test]
    fn prop_search_matches_oracle(
        keys in small_alphabet_keys(6),
        queries in byte_queries(16),
    ) {
        let tree = build_tree(&keys);

        for q in &queries {
            prop_assert_eq!(tree.search(q), expected_ids(&keys, q));
        }
    }

    /// Capped searches never exceed the cap and only return true matches.
    #[test]
    fn prop_cap_honoured(
        keys in small_alphabet_keys(8),
        q in prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c', b'd']), 1..=4),
        cap in 0i32..5,
    ) {
        let tree = build_tree(&keys);
        let capped = tree.search_capped(&q, cap);
        let full = expected_ids(&keys, &q);

        prop_assert!(capped.len() <= cap as usize);
        prop_assert!(capped.is_subset(&full));
        // the cap only truncates, it never hides available matches
        prop_assert_eq!(capped.len(), full.len().min(cap as usize));
    }

    /// After compute_count, totals equal exhaustive search sizes.
    #[test]
    fn prop_count_consistency(
        keys in small_alphabet_keys(6),
        queries in byte_queries(12),
    ) {
        let mut tree = build_tree(&keys);
        tree.compute_count();

        for q in &queries {
            let counted = tree.search_with_count(q, 2).unwrap();
            let full = tree.search(q);
            prop_assert_eq!(counted.total, full.len());
            prop_assert!(counted.matches.is_subset(&full));
        }
    }

    /// Inserting the same (key, id) twice is observably the same as once.
    #[test]
    fn prop_double_insertion_idempotent(keys in small_alphabet_keys(4)) {
        let tree_once = build_tree(&keys);

        let mut tree_twice = SuffixTree::new();
        for (idx, key) in keys.iter().enumerate() {
            tree_twice.put(key.clone(), idx as u32).unwrap();
            tree_twice.put(key.clone(), idx as u32).unwrap();
        }

        for key in &keys {
            for i in 0..key.len() {
                for j in (i + 1)..=key.len() {
                    let q = &key[i..j];
                    prop_assert_eq!(tree_once.search(q), tree_twice.search(q));
                }
            }
        }
    }

    /// Integer elements behave exactly like bytes (exercises the
    /// ordering-derived equality with a wider domain).
    #[test]
    fn prop_integer_elements(keys in integer_keys(4)) {
        let tree = build_tree(&keys);

        for key in &keys {
            // sample the substring grid to keep runtime sane
            for i in (0..key.len()).step_by(7) {
                for j in ((i + 1)..=key.len()).step_by(5) {
                    let q = &key[i..j];
                    prop_assert_eq!(tree.search(q), expected_ids(&keys, q));
                }
            }
        }
    }
}
