//! Line patterns shared by structure rules
//!
//! Classifies single lines as markdown headings or bold subsection labels.
//! Patterns are tested against the raw line: an indented line is not a
//! heading and not a label.

use regex::Regex;
use std::sync::OnceLock;

fn heading_re() -> &'static Regex {
    static HEADING_RE: OnceLock<Regex> = OnceLock::new();
    // Match # through ###### followed by whitespace
    HEADING_RE.get_or_init(|| Regex::new(r"^(#{1,6})\s").unwrap())
}

fn bold_label_re() -> &'static Regex {
    static BOLD_LABEL_RE: OnceLock<Regex> = OnceLock::new();
    // Match **Text:** with nothing else on the line
    BOLD_LABEL_RE.get_or_init(|| Regex::new(r"^\*\*[^*]+:\*\*$").unwrap())
}

/// Heading level (1-6) of an ATX heading line, or `None`
pub fn heading_level(line: &str) -> Option<u8> {
    heading_re().captures(line).map(|caps| caps[1].len() as u8)
}

/// True if `line` is a heading at `level` or shallower
///
/// With `level = 2`, both `# Title` and `## Section` close a section while
/// `### Detail` does not.
pub fn closes_section(line: &str, level: u8) -> bool {
    heading_level(line).is_some_and(|found| found <= level)
}

/// True if `line` looks like a bold subsection label such as `**Notes:**`
pub fn is_bold_label(line: &str) -> bool {
    bold_label_re().is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level("# Title"), Some(1));
        assert_eq!(heading_level("## 🎯 ACTION ITEMS"), Some(2));
        assert_eq!(heading_level("###\tTabbed"), Some(3));
        assert_eq!(heading_level("##NoSpace"), None);
        assert_eq!(heading_level("  ## Indented"), None);
        assert_eq!(heading_level("####### Seven"), None);
        assert_eq!(heading_level("plain text"), None);
    }

    #[test]
    fn test_closes_section() {
        assert!(closes_section("## NEXT", 2));
        assert!(closes_section("# Top", 2));
        assert!(!closes_section("### Deeper", 2));
        assert!(!closes_section("**Bold:**", 2));
    }

    #[test]
    fn test_bold_label() {
        assert!(is_bold_label("**Notes:**"));
        assert!(is_bold_label("**Extra Section:**"));
        assert!(!is_bold_label("**Notes**"));
        assert!(!is_bold_label("**Notes:** trailing"));
        assert!(!is_bold_label("- **Notes:**"));
        assert!(!is_bold_label(" **Notes:**"));
        assert!(!is_bold_label("**:**"));
        assert!(!is_bold_label("***Nested:***"));
    }
}
