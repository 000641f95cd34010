//! Property tests for the relevance scorer.
//!
//! 1. Result length never exceeds the limit.
//! 2. Scores are non-increasing; equal scores keep list order.
//! 3. Under the full walk, exactly the candidates sharing a character with the
//!    query are ranked.
//! 4. A query equal to a candidate (any case) earns both literal bonuses.
//! 5. The best suggestion in relevance mode is labelled 100%.
//! 6. The stepped walk never yields a substring the full walk misses.

use fruit_suggest::app::search::{
    CONTAINS_BONUS, DisplayMode, EXACT_BONUS, NgramWalk, Scorer, ngrams, stepped_ngrams,
};
use fruit_suggest::app::state::suggestions_from;
use proptest::prelude::*;
use std::collections::HashSet;

// ── Helpers ─────────────────────────────────────────────────────────────

fn walk_strategy() -> impl Strategy<Value = NgramWalk> {
    prop_oneof![Just(NgramWalk::Full), Just(NgramWalk::Stepped)]
}

fn candidates_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z]{1,10}", 0..12)
}

fn query_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,6}"
}

fn shares_char(a: &str, b: &str) -> bool {
    let a: HashSet<char> = a.to_lowercase().chars().collect();
    b.to_lowercase().chars().any(|c| a.contains(&c))
}

proptest! {
    #[test]
    fn limit_bounds_length(
        query in query_strategy(),
        cands in candidates_strategy(),
        limit in 1usize..6,
        walk in walk_strategy(),
    ) {
        let ranked = Scorer::new(walk).rank(&query, cands.iter().map(String::as_str), Some(limit));
        prop_assert!(ranked.len() <= limit);
        let unbounded = Scorer::new(walk).rank(&query, cands.iter().map(String::as_str), None);
        prop_assert!(unbounded.len() <= cands.len());
        prop_assert_eq!(&unbounded[..ranked.len()], &ranked[..]);
    }

    #[test]
    fn ordering_is_stable_and_descending(
        query in query_strategy(),
        cands in candidates_strategy(),
        walk in walk_strategy(),
    ) {
        let ranked = Scorer::new(walk).rank(&query, cands.iter().map(String::as_str), None);
        for w in ranked.windows(2) {
            prop_assert!(w[0].score >= w[1].score);
            if w[0].score == w[1].score {
                prop_assert!(w[0].index < w[1].index);
            }
        }
    }

    #[test]
    fn ranked_set_is_exactly_overlapping_candidates(
        query in query_strategy(),
        cands in candidates_strategy(),
    ) {
        // Full walk only: the stepped walk can skip a shared character
        // ("abc" yields a, bc, c and never a lone "b").
        let ranked = Scorer::new(NgramWalk::Full).rank(&query, cands.iter().map(String::as_str), None);
        let got: HashSet<&str> = ranked.iter().map(|s| s.candidate).collect();
        let want: HashSet<&str> = cands
            .iter()
            .map(String::as_str)
            .filter(|c| shares_char(&query, c))
            .collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn exact_match_earns_both_bonuses(cand in "[a-zA-Z]{1,10}", walk in walk_strategy()) {
        let scorer = Scorer::new(walk);
        let b = scorer.explain(&cand.to_uppercase(), &cand);
        prop_assert_eq!(b.exact, EXACT_BONUS);
        prop_assert_eq!(b.containment, CONTAINS_BONUS);
        prop_assert!(b.total() > EXACT_BONUS + CONTAINS_BONUS);
    }

    #[test]
    fn best_suggestion_is_full_relevance(
        query in query_strategy(),
        cands in candidates_strategy(),
    ) {
        let ranked = Scorer::default().sort_relevance(
            &query,
            cands.iter().map(String::as_str),
            None,
            DisplayMode::Scored,
        );
        let items = suggestions_from(&ranked);
        prop_assert_eq!(items.len(), ranked.len());
        if let Some(first) = items.first() {
            prop_assert!(first.label.ends_with(" (100%)"));
        }
    }

    #[test]
    fn stepped_grams_are_substrings(s in "[a-z🥑]{0,12}") {
        let full = ngrams(&s);
        for g in stepped_ngrams(&s) {
            prop_assert!(full.contains(g));
        }
    }
}
