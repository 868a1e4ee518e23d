//! Input normalization.
//!
//! Converts raw player input into the letter stream the interpreter reads.

/// Normalizes player input.
pub struct InputNormalizer;

impl InputNormalizer {
    /// Normalizes a raw input string.
    ///
    /// - Folds to lowercase
    /// - Drops every char that is not a lowercase letter afterwards
    ///   (spaces, digits, punctuation, caseless symbols)
    ///
    /// Normalizing an already-normalized string returns it unchanged.
    #[must_use]
    pub fn normalize(input: &str) -> String {
        input
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| c.is_lowercase())
            .collect()
    }

    /// Returns true if the string is already in normalized form.
    #[must_use]
    pub fn is_normalized(input: &str) -> bool {
        input.chars().all(char::is_lowercase)
    }
}
