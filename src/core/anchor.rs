//! In-page anchor identifiers
//!
//! Navigation links point at `#<anchor>` and each section exposes the same
//! anchor as its DOM id. Both sides derive it from the navigation label with
//! [`anchor_id`], so a label and its section can only disagree if the label
//! itself changes.

/// Apostrophe-like characters stripped from labels (ASCII, typographic and
/// the Uzbek modifier letters used in "o'" / "g'").
const APOSTROPHES: [char; 4] = ['\'', '\u{2019}', '\u{02BB}', '\u{02BC}'];

/// Derive the anchor identifier for a navigation label.
///
/// Lowercases, drops apostrophes and joins whitespace-separated words with
/// single hyphens.
///
/// ```
/// use studytrack::core::anchor_id;
///
/// assert_eq!(anchor_id("AI Capabilities"), "ai-capabilities");
/// assert_eq!(anchor_id("Bosh sahifa"), "bosh-sahifa");
/// ```
pub fn anchor_id(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| !APOSTROPHES.contains(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Link target for a navigation label (`#` followed by the anchor id)
pub fn anchor_href(label: &str) -> String {
    format!("#{}", anchor_id(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(anchor_id("AI Capabilities"), "ai-capabilities");
        assert_eq!(anchor_id("Xizmatlar"), "xizmatlar");
        assert_eq!(anchor_id("AI imkoniyatlari"), "ai-imkoniyatlari");
    }

    #[test]
    fn test_removes_apostrophes() {
        assert_eq!(anchor_id("Students' Corner"), "students-corner");
        assert_eq!(anchor_id("Bog\u{2019}lanish"), "boglanish");
        assert_eq!(anchor_id("Qo\u{02BB}llab"), "qollab");
    }

    #[test]
    fn test_every_space_becomes_a_hyphen() {
        assert_eq!(anchor_id("Home Page Top"), "home-page-top");
    }

    #[test]
    fn test_collapses_and_trims_whitespace() {
        assert_eq!(anchor_id("  Bosh   sahifa "), "bosh-sahifa");
        assert_eq!(anchor_id("Our\tServices"), "our-services");
    }

    #[test]
    fn test_empty_label() {
        assert_eq!(anchor_id(""), "");
        assert_eq!(anchor_href(""), "#");
    }

    #[test]
    fn test_href_prefix() {
        assert_eq!(anchor_href("AI Capabilities"), "#ai-capabilities");
    }
}
