//! Small text helpers for user-facing notices.

/// Return the plural form of a word based on the count.
///
/// Naive English pluralization (appends `s`); counts of zero and one both
/// take the singular, matching the wording of admin notices.
pub fn pluralize(count: u64, word: &str) -> String {
    if count <= 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular() {
        assert_eq!(pluralize(0, "actor"), "actor");
        assert_eq!(pluralize(1, "actor"), "actor");
    }

    #[test]
    fn test_plural() {
        assert_eq!(pluralize(2, "actor"), "actors");
        assert_eq!(pluralize(100, "actor"), "actors");
    }
}
