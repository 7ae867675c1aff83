// Proptest generators for root words and candidates.

use proptest::prelude::*;

/// Any lowercase root word of playable size
pub fn root_word() -> impl Strategy<Value = String> {
    "[a-z]{3,10}"
}

/// Zero to two letters, possibly padded with spaces
pub fn short_candidate() -> impl Strategy<Value = String> {
    (" {0,2}", "[a-zA-Z]{0,2}", " {0,2}").prop_map(|(lead, word, trail)| format!("{lead}{word}{trail}"))
}

/// Words over a five-letter alphabet, so that roots and candidates often
/// share letters and both outcomes of the multiset check show up
pub fn small_alphabet_word() -> impl Strategy<Value = String> {
    "[a-e]{3,8}"
}

/// A root word and up to four shuffled strict sub-multisets of it, each at
/// least three letters and at least one letter shorter than the root
pub fn root_with_subwords() -> impl Strategy<Value = (String, Vec<String>)> {
    "[a-z]{4,10}".prop_flat_map(|root| {
        let letters: Vec<char> = root.chars().collect();
        let n = letters.len();
        let subword = prop::sample::subsequence(letters, 3..n)
            .prop_shuffle()
            .prop_map(|chars| chars.into_iter().collect::<String>());
        (Just(root), prop::collection::vec(subword, 1..5))
    })
}
