//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// `"1 train"`, `"3 trains"`
pub fn count_of(count: usize, word: &str) -> String {
    format!("{count} {}", pluralize(word, count))
}
