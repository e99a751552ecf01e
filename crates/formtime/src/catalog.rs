//! Static catalog of named formatter presets.
//!
//! The catalog is the explicit mapping from preset key to formatting rule
//! that replaces dynamic lookup against a formatting library's constants.
//! Keys are kebab-case and matched exactly.

use std::borrow::Cow;

use crate::format::FormatRule;

/// Preset name reported for the default ISO specification.
pub const DEFAULT_PRESET: &str = "iso";

/// Known presets and their formatting rules, in catalog order.
const PRESETS: &[(&str, FormatRule)] = &[
    ("iso", FormatRule::Iso),
    ("iso-date", FormatRule::Pattern(Cow::Borrowed("%Y-%m-%d"))),
    ("basic-iso-date", FormatRule::Pattern(Cow::Borrowed("%Y%m%d"))),
    ("iso-ordinal-date", FormatRule::Pattern(Cow::Borrowed("%Y-%j"))),
    ("iso-week-date", FormatRule::Pattern(Cow::Borrowed("%G-W%V-%u"))),
    ("iso-time", FormatRule::Pattern(Cow::Borrowed("%H:%M:%S"))),
    ("iso-date-time", FormatRule::Pattern(Cow::Borrowed("%Y-%m-%dT%H:%M:%S"))),
    (
        "iso-offset-date-time",
        FormatRule::Pattern(Cow::Borrowed("%Y-%m-%dT%H:%M:%S%:z")),
    ),
    ("iso-zoned-date-time", FormatRule::ZonedIso),
    ("iso-instant", FormatRule::Instant),
    ("rfc-2822", FormatRule::Rfc2822),
];

/// Looks up a preset by name.
pub fn lookup(name: &str) -> Option<FormatRule> {
    PRESETS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, rule)| rule.clone())
}

/// Iterates the catalog's preset names in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_preset() {
        assert_eq!(lookup("iso"), Some(FormatRule::Iso));
        assert_eq!(lookup("iso-instant"), Some(FormatRule::Instant));
        assert_eq!(
            lookup("iso-date"),
            Some(FormatRule::Pattern(Cow::Borrowed("%Y-%m-%d")))
        );
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(lookup("ISO"), None);
        assert_eq!(lookup("iso_date"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn default_preset_is_in_catalog() {
        assert!(names().any(|name| name == DEFAULT_PRESET));
    }
}
