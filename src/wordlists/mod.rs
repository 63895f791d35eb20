//! Password lists
//!
//! The built-in demonstration list and loaders for user-supplied lists.

pub mod loader;

/// Built-in demonstration list (11 six-letter passwords)
pub const DEFAULT_PASSWORDS: &[&str] = &[
    "answer", "stones", "rounds", "pulled", "access", "closet", "weaken", "weaker", "defeat",
    "higher", "copies",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::likeness;

    #[test]
    fn default_list_size() {
        assert_eq!(DEFAULT_PASSWORDS.len(), 11);
    }

    #[test]
    fn default_list_shares_one_length() {
        for &word in DEFAULT_PASSWORDS {
            assert_eq!(word.len(), 6, "Password '{word}' is not 6 letters");
        }
    }

    #[test]
    fn default_list_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DEFAULT_PASSWORDS.iter().collect();
        assert_eq!(unique.len(), DEFAULT_PASSWORDS.len());
    }

    #[test]
    fn default_list_near_twins() {
        // weaken/weaker differ only in the last letter
        assert_eq!(likeness("weaken", "weaker").unwrap(), 5);
    }
}
