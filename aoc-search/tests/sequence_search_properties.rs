//! Property-based tests for vocabulary decomposition
//!
//! **Feature: sequence-search**

use aoc_search::sequence_search::{
    DecompositionSession, Vocabulary, count_all, count_decompositions, is_decomposable,
    par_count_each,
};
use proptest::prelude::*;

/// Tries every token at every position, no memo.
fn brute_force_count(target: &str, tokens: &[String]) -> u64 {
    if target.is_empty() {
        return 1;
    }
    tokens
        .iter()
        .filter_map(|token| target.strip_prefix(token.as_str()))
        .map(|rest| brute_force_count(rest, tokens))
        .sum()
}

fn tokens() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{1,4}", 1..7)
}

fn target() -> impl Strategy<Value = String> {
    "[abc]{0,12}"
}

fn unique(tokens: &[String]) -> Vec<String> {
    let mut tokens = tokens.to_vec();
    tokens.sort();
    tokens.dedup();
    tokens
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// **Feature: sequence-search, Property 1: Counts match exhaustive search**
    /// *For any* vocabulary and target, the memoized count equals the number
    /// of token sequences found by trying every token at every position.
    #[test]
    fn prop_count_matches_brute_force(tokens in tokens(), target in target()) {
        let vocab = Vocabulary::new(tokens.iter().cloned()).unwrap();
        let expected = brute_force_count(&target, &unique(&tokens));
        prop_assert_eq!(count_decompositions(&target, &vocab), expected);
    }

    /// **Feature: sequence-search, Property 2: Feasibility agrees with counting**
    /// *For any* vocabulary and target, the target is decomposable exactly
    /// when it has a positive count.
    #[test]
    fn prop_feasibility_agrees_with_count(tokens in tokens(), target in target()) {
        let vocab = Vocabulary::new(tokens).unwrap();
        prop_assert_eq!(
            is_decomposable(&target, &vocab),
            count_decompositions(&target, &vocab) > 0
        );
    }

    /// **Feature: sequence-search, Property 3: Concatenations decompose**
    /// *For any* sequence of vocabulary tokens, their concatenation is
    /// decomposable with at least one way.
    #[test]
    fn prop_concatenation_decomposes(
        tokens in tokens(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let target: String = picks.iter().map(|pick| pick.get(&tokens).as_str()).collect();
        let vocab = Vocabulary::new(tokens).unwrap();
        prop_assert!(is_decomposable(&target, &vocab));
        prop_assert!(count_decompositions(&target, &vocab) >= 1);
    }

    /// **Feature: sequence-search, Property 4: Shared sessions**
    /// *For any* batch of targets, counting them through one session gives
    /// the same counts as fresh sessions and leaves the vocabulary untouched.
    #[test]
    fn prop_session_matches_fresh(
        tokens in tokens(),
        targets in prop::collection::vec(target(), 1..8),
    ) {
        let vocab = Vocabulary::new(tokens).unwrap();
        let session = DecompositionSession::new(vocab.clone());

        let mut total = 0u64;
        for target in &targets {
            let count = session.count(target);
            prop_assert_eq!(count, count_decompositions(target, &vocab));
            total += count;
        }
        prop_assert_eq!(count_all(&targets, &vocab), total);
        prop_assert_eq!(session.vocabulary(), &vocab);
    }

    /// **Feature: sequence-search, Property 5: Parallel counting**
    /// *For any* batch of targets, counting on the rayon pool returns the
    /// sequential counts in input order.
    #[test]
    fn prop_parallel_matches_sequential(
        tokens in tokens(),
        targets in prop::collection::vec(target(), 0..24),
    ) {
        let vocab = Vocabulary::new(tokens).unwrap();
        let sequential: Vec<u64> = targets
            .iter()
            .map(|target| count_decompositions(target, &vocab))
            .collect();
        prop_assert_eq!(par_count_each(&targets, &vocab), sequential);
    }
}
