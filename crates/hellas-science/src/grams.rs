//! N-gram windows

/// Consecutive windows of `n` items
///
/// Yields nothing when `n` is zero or longer than the input.
///
/// # Example
/// ```rust
/// use hellas_science::ngrams;
///
/// let words = ["the", "quick", "brown", "fox"];
/// let trigrams: Vec<_> = ngrams(&words, 3).collect();
/// assert_eq!(trigrams, vec![&["the", "quick", "brown"][..], &["quick", "brown", "fox"][..]]);
/// ```
pub fn ngrams<T>(items: &[T], n: usize) -> impl Iterator<Item = &[T]> {
    // `windows` panics on zero, and an empty range gives the same result
    let usable = if n == 0 { &items[..0] } else { items };
    usable.windows(n.max(1))
}

/// Consecutive pairs
///
/// Same as `ngrams(items, 2)`, returned as tuples.
pub fn bigrams<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items.iter().zip(items.iter().skip(1))
}

/// Character n-grams of a string
#[must_use]
pub fn char_ngrams(text: &str, n: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    ngrams(&chars, n).map(|w| w.iter().collect()).collect()
}
