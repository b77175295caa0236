//! Progressive word hints.
//!
//! Answers are split on runs of whitespace; a hint of `n` words is the first
//! `n` words joined back together with single spaces.

/// Split an answer into its words.
pub fn split_words(answer: &str) -> impl Iterator<Item = &str> {
    answer.split_whitespace()
}

/// Number of words in an answer.
///
/// # Examples
///
/// ```
/// use picture_quiz_core::word_count;
///
/// assert_eq!(word_count("Việt Nam"), 2);
/// assert_eq!(word_count("  Phong   trào "), 2);
/// ```
pub fn word_count(answer: &str) -> usize {
    split_words(answer).count()
}

/// The first `revealed` words of `answer`.
///
/// Returns an empty string when `revealed == 0`. Asking for more words than
/// the answer has returns the whole answer, normalized to single spaces.
///
/// # Examples
///
/// ```
/// use picture_quiz_core::progressive_hint;
///
/// let answer = "Phong trào Cần Vương";
/// assert_eq!(progressive_hint(answer, 0), "");
/// assert_eq!(progressive_hint(answer, 1), "Phong");
/// assert_eq!(progressive_hint(answer, 2), "Phong trào");
/// assert_eq!(progressive_hint(answer, 4), "Phong trào Cần Vương");
/// ```
pub fn progressive_hint(answer: &str, revealed: usize) -> String {
    let mut out = String::new();
    progressive_hint_into(answer, revealed, &mut out);
    out
}

/// Write the first `revealed` words of `answer` into `out`, replacing its contents.
///
/// Lets the view reuse one buffer across frames.
pub fn progressive_hint_into(answer: &str, revealed: usize, out: &mut String) {
    out.clear();
    for (i, word) in split_words(answer).take(revealed).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
}
