/// Type alias for an n-gram (its tokens joined with single spaces)
pub type NGram = String;

/// Extracts contiguous n-grams from a word sequence
///
/// For example, with N=2 (bigrams):
/// - Input words: ["a", "b", "c"]
/// - Output N-grams: ["a b", "b c"]
///
/// # Arguments
/// * `words` - Ordered token sequence
/// * `n` - N-gram size; 0 and 1 both return the words unchanged
///
/// # Returns
/// One n-gram per start index, in ascending start order
/// (`words.len() - n + 1` of them, or none when `n > words.len()`)
///
/// # Example
/// ```
/// use ngrams::sequence::ngrams;
///
/// let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// assert_eq!(ngrams(&words, 2), vec!["a b", "b c"]);
/// ```
pub fn ngrams(words: &[String], n: usize) -> Vec<NGram> {
    if n <= 1 {
        return words.to_vec();
    }

    // Sliding window of size N; windows() yields nothing when n > len
    let grams: Vec<NGram> = words.windows(n).map(|window| window.join(" ")).collect();

    tracing::trace!(n, words = words.len(), ngrams = grams.len(), "extracted n-grams");

    grams
}
