//! Named extractors for the user-agent segments we rewrite.
//!
//! Each pattern lives behind its own function so a structured user-agent
//! model can replace it without touching the rewriting code.

use std::ops::Range;

/// Marker the brand token is inserted in front of.
pub const MOBILE_MARKER: &str = "Mobile/";

lazy_static::lazy_static! {
    static ref WEBKIT_VERSION: regex::Regex =
        regex::Regex::new(r"AppleWebKit/([^ ]+) ").expect("valid webkit pattern");
    static ref PLATFORM_DESCRIPTOR: regex::Regex =
        regex::Regex::new(r"\([^)]+\)").expect("valid platform pattern");
    static ref BRAND_MOBILE_SECTION: regex::Regex =
        regex::Regex::new(r" FxiOS/[^ ]+ Mobile/[^ ]+").expect("valid mobile section pattern");
}

/// The WebKit version token, e.g. `605.1.15` in `AppleWebKit/605.1.15 `.
pub fn webkit_version(user_agent: &str) -> Option<&str> {
    WEBKIT_VERSION
        .captures(user_agent)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Byte offset of the first `Mobile/`.
pub fn mobile_marker_offset(user_agent: &str) -> Option<usize> {
    user_agent.find(MOBILE_MARKER)
}

/// Range of the first parenthesized platform descriptor, parentheses included.
pub fn platform_descriptor(user_agent: &str) -> Option<Range<usize>> {
    PLATFORM_DESCRIPTOR.find(user_agent).map(|m| m.range())
}

/// Range of the ` FxiOS/<v> Mobile/<v>` section, leading space included.
pub fn brand_mobile_section(user_agent: &str) -> Option<Range<usize>> {
    BRAND_MOBILE_SECTION.find(user_agent).map(|m| m.range())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAFARI_IOS: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148 Version/14.0";

    #[test]
    fn webkit_needs_trailing_space() {
        assert_eq!(webkit_version(SAFARI_IOS), Some("605.1.15"));
        assert_eq!(webkit_version("Mozilla/5.0 AppleWebKit/605.1.15"), None);
        assert_eq!(webkit_version("Mozilla/5.0 Gecko/20100101"), None);
    }

    #[test]
    fn first_platform_only() {
        let range = platform_descriptor(SAFARI_IOS).unwrap();
        assert_eq!(&SAFARI_IOS[range], "(iPhone; CPU iPhone OS 14_0)");
        assert_eq!(platform_descriptor("Mozilla/5.0 ()"), None);
    }

    #[test]
    fn mobile_offset() {
        let offset = mobile_marker_offset(SAFARI_IOS).unwrap();
        assert!(SAFARI_IOS[offset..].starts_with("Mobile/15E148"));
        assert_eq!(mobile_marker_offset("Mozilla/5.0 (Macintosh)"), None);
    }

    #[test]
    fn brand_section_requires_adjacent_marker() {
        let ua = "Gecko) FxiOS/30.0b1 Mobile/15E148 Version/14.0";
        let range = brand_mobile_section(ua).unwrap();
        assert_eq!(&ua[range], " FxiOS/30.0b1 Mobile/15E148");
        assert_eq!(brand_mobile_section("Gecko) Mobile/15E148"), None);
    }
}
