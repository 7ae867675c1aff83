/// Property-based tests for the word checks
use std::collections::HashMap;

use proptest::prelude::*;

use crate::error::RejectionReason;
use crate::game_state::{GameSession, is_possible};
use crate::test_gens;

fn always_real(_: &str) -> bool {
    true
}

fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for letter in word.chars() {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}

/// Reference rule: some letter is used more often than the root has it, or
/// the candidate uses every root letter exactly
fn exceeds_or_exhausts(candidate: &str, root: &str) -> bool {
    let wanted = letter_counts(candidate);
    let available = letter_counts(root);
    let exceeds = wanted
        .iter()
        .any(|(letter, count)| *count > available.get(letter).copied().unwrap_or(0));
    exceeds || wanted == available
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: anything of two characters or fewer after trimming is too short,
    /// whatever the root and whatever has been played
    #[test]
    fn prop_short_candidates_rejected(
        root in test_gens::root_word(),
        candidate in test_gens::short_candidate(),
    ) {
        let session = GameSession::with_root_word(&root);
        prop_assert_eq!(
            session.validate(&candidate, &always_real),
            Err(RejectionReason::TooShort),
            "'{}' should be too short for root '{}'", candidate, root
        );
    }

    /// Property: every accepted word is rejected as a duplicate afterwards,
    /// in any letter case
    #[test]
    fn prop_accepted_words_become_duplicates((root, subwords) in test_gens::root_with_subwords()) {
        let mut session = GameSession::with_root_word(&root);
        for word in &subwords {
            if session.used_words().contains(word) {
                continue;
            }
            prop_assert!(session.accept(word, &always_real).is_ok(),
                "'{}' is a strict sub-multiset of '{}'", word, root);
        }

        for word in &subwords {
            prop_assert_eq!(
                session.validate(word, &always_real),
                Err(RejectionReason::Duplicate)
            );
            prop_assert_eq!(
                session.validate(&word.to_uppercase(), &always_real),
                Err(RejectionReason::Duplicate)
            );
        }
    }

    /// Property: NotPossible exactly when the candidate needs a letter the root
    /// cannot supply, or would use up the whole root
    #[test]
    fn prop_not_possible_matches_letter_counts(
        root in test_gens::small_alphabet_word(),
        candidate in test_gens::small_alphabet_word(),
    ) {
        let expected = exceeds_or_exhausts(&candidate, &root);
        prop_assert_eq!(!is_possible(&candidate, &root), expected);

        let session = GameSession::with_root_word(&root);
        let result = session.validate(&candidate, &always_real);
        if expected {
            prop_assert_eq!(result, Err(RejectionReason::NotPossible));
        } else {
            prop_assert!(result.is_ok(), "'{}' from '{}' gave {:?}", candidate, root, result);
        }
    }

    /// Property: whatever is submitted, used words stay strict sub-multisets of
    /// the root and the score is the sum of their lengths
    #[test]
    fn prop_accept_preserves_session_invariant(
        root in test_gens::small_alphabet_word(),
        candidates in prop::collection::vec(test_gens::small_alphabet_word(), 0..20),
    ) {
        let mut session = GameSession::with_root_word(&root);
        for candidate in &candidates {
            let _ = session.accept(candidate, &always_real);
        }

        for word in session.used_words() {
            prop_assert!(word.chars().count() > 2);
            prop_assert!(!exceeds_or_exhausts(word, &root));
        }
        let total: usize = session.used_words().iter().map(|w| w.chars().count()).sum();
        prop_assert_eq!(session.score(), total);
    }
}
