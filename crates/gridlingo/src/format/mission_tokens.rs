//! # Mission Tokenization
//!
//! Missions are lowercased, and split into maximal runs of ``[a-z]``.
//! Everything else (digits, punctuation, whitespace, non-ascii letters)
//! separates tokens and is discarded.

use std::sync::LazyLock;

use regex::Regex;

/// The token pattern, applied to lowercased missions.
pub const MISSION_TOKEN_PATTERN: &str = "[a-z]+";

static MISSION_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MISSION_TOKEN_PATTERN).expect("valid mission token pattern"));

/// Split a mission into normalized tokens.
///
/// ## Arguments
/// * `mission` - the free-form instruction text.
///
/// ## Returns
/// The lowercase alphabetic runs of `mission`, in order.
pub fn tokenize(mission: &str) -> Vec<String> {
    let lowered = mission.to_lowercase();
    MISSION_TOKEN_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Go to the RED ball 2!"),
            vec!["go", "to", "the", "red", "ball"]
        );

        assert_eq!(
            tokenize("pick up the key, then open the door"),
            vec!["pick", "up", "the", "key", "then", "open", "the", "door"]
        );

        assert_eq!(tokenize("put4the_box\tnext-to\nyou"), vec![
            "put", "the", "box", "next", "to", "you"
        ]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  42 ?! ").is_empty());
    }

    #[test]
    fn test_tokenize_non_ascii_separates() {
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
    }
}
