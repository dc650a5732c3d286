pub mod bleu;
pub mod edit_distance;
pub mod rouge;
pub mod ser;
pub mod wer;

pub use bleu::*;
pub use edit_distance::*;
pub use rouge::*;
pub use ser::*;
pub use wer::*;

/// Lowercased whitespace tokenization shared by the word-level metrics.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(|s| s.to_lowercase()).collect()
}

/// Levenshtein distance over arbitrary equatable sequences (two-row
/// Wagner-Fischer). Used at the word level by WER.
pub(crate) fn sequence_edit_distance<T: Eq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, item_a) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, item_b) in b.iter().enumerate() {
            let cost = if item_a == item_b { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
