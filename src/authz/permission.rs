//! Wildcard permission parsing and implication matching.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AuthzError;

/// The subpart that matches anything in its position.
const WILDCARD_TOKEN: &str = "*";
/// Delimiter between parts (levels).
const PART_DIVIDER: char = ':';
/// Delimiter between subparts within a part.
const SUBPART_DIVIDER: char = ',';

/// A multi-level permission supporting wildcard matching.
///
/// A permission string is a sequence of `:`-delimited *parts*, each of which
/// is a `,`-delimited set of *subparts*. By convention the levels are
/// `domain:action:instance`, but any number of levels is allowed:
///
/// - `"newsletter:edit"` — the `edit` action in the `newsletter` domain
/// - `"newsletter:view,edit,create"` — several actions at once
/// - `"newsletter:*"` — every action in the domain
/// - `"newsletter:edit:12,13"` — instance-level access
/// - `"*"` — everything
///
/// The core operation is [`implies`](Self::implies): "does this granted
/// permission cover that requested permission". A grant covers a request when
/// each requested part is matched by the corresponding granted part (superset
/// of subparts, or a `*` subpart), with a shorter grant implying any longer
/// request (`"newsletter"` implies `"newsletter:edit:12"`).
///
/// Instances are immutable once parsed. By default the string is lower-cased
/// at parse time; pass `case_sensitive = true` to [`parse`](Self::parse) (or
/// use a case-sensitive [`WildcardPermissionResolver`]) to preserve case and
/// compare byte-exact.
///
/// [`WildcardPermissionResolver`]: super::WildcardPermissionResolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPermission {
    /// Ordered parts; each part is an insertion-ordered set of subparts.
    /// Subpart order is irrelevant for equality but preserved for display.
    parts: Vec<IndexSet<String>>,
}

impl WildcardPermission {
    /// Parse a permission string.
    ///
    /// Empty subparts (consecutive `,` delimiters) are dropped, but every
    /// part must keep at least one subpart: a string that is empty, blank,
    /// or contains a part consisting only of delimiters (`"::,,::,:"`,
    /// `"a::b"`, `"a:,,:b"`) is rejected with
    /// [`AuthzError::InvalidPermissionString`]. A malformed grant is never
    /// silently collapsed into a broader one.
    ///
    /// Whitespace is trimmed around the whole string only; whitespace inside
    /// a part is significant, so `"read, write"` holds the subparts `read`
    /// and ` write`.
    pub fn parse(text: &str, case_sensitive: bool) -> Result<Self, AuthzError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AuthzError::invalid_permission(
                "permission string cannot be empty or blank",
            ));
        }

        let normalized = if case_sensitive {
            trimmed.to_string()
        } else {
            trimmed.to_lowercase()
        };

        let mut parts: Vec<IndexSet<String>> = Vec::new();
        for part in normalized.split(PART_DIVIDER) {
            let subparts: IndexSet<String> = part
                .split(SUBPART_DIVIDER)
                .filter(|subpart| !subpart.is_empty())
                .map(str::to_string)
                .collect();
            if subparts.is_empty() {
                return Err(AuthzError::invalid_permission(format!(
                    "permission string \"{text}\" contains a part with only delimiters"
                )));
            }
            parts.push(subparts);
        }

        Ok(Self { parts })
    }

    /// Returns true if this (granted) permission covers `other` (the
    /// requested permission).
    ///
    /// Each requested part must be matched by the granted part at the same
    /// index: either the granted part contains the `*` wildcard, or it is a
    /// superset of the requested subparts. A grant with fewer parts than the
    /// request places no constraint on the extra levels and matches them
    /// implicitly. A grant with *more* parts than the request only matches if
    /// every surplus part is a wildcard (`"one:two"` does not imply `"one"`,
    /// but `"one:*"` does).
    pub fn implies(&self, other: &WildcardPermission) -> bool {
        let mut i = 0;
        for other_part in &other.parts {
            // A shorter grant has run out of constraints: every further
            // requested part is implicitly covered.
            let Some(part) = self.parts.get(i) else {
                return true;
            };
            if !part.contains(WILDCARD_TOKEN) && !part.is_superset(other_part) {
                return false;
            }
            i += 1;
        }

        // The grant is longer than the request: the surplus parts must all
        // be wildcards.
        self.parts[i..]
            .iter()
            .all(|part| part.contains(WILDCARD_TOKEN))
    }

    /// The parsed parts, for diagnostics and display.
    pub fn parts(&self) -> &[IndexSet<String>] {
        &self.parts
    }
}

impl fmt::Display for WildcardPermission {
    /// Canonical `:`/`,`-joined form. Round-trips through
    /// [`parse`](Self::parse): subparts appear in first-seen order, and the
    /// text is already case-folded if the permission was parsed
    /// case-insensitively.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, "{PART_DIVIDER}")?;
            }
            for (j, subpart) in part.iter().enumerate() {
                if j > 0 {
                    write!(f, "{SUBPART_DIVIDER}")?;
                }
                f.write_str(subpart)?;
            }
        }
        Ok(())
    }
}

impl FromStr for WildcardPermission {
    type Err = AuthzError;

    /// Parse with the default (case-insensitive) mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, false)
    }
}

impl Serialize for WildcardPermission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WildcardPermission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn perm(text: &str) -> WildcardPermission {
        text.parse().expect("permission should parse")
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(":")]
    #[case(",")]
    #[case("::,,::,:")]
    #[case("a::b")]
    #[case("a:,,:b")]
    #[case("a:")]
    #[case(":a")]
    fn test_invalid_strings_rejected(#[case] input: &str) {
        let result = WildcardPermission::parse(input, false);
        assert!(matches!(
            result,
            Err(AuthzError::InvalidPermissionString(_))
        ));
    }

    #[test]
    fn test_empty_interior_part_is_not_collapsed() {
        // "a::b" must not silently become "a:b"; accepting it would widen
        // the grant, so it is rejected outright.
        assert!(WildcardPermission::parse("a:,,:b", false).is_err());
        assert!(WildcardPermission::parse("a::b", false).is_err());
    }

    #[test]
    fn test_subparts_are_not_trimmed() {
        // Whitespace inside a part is significant: " write" and "write" are
        // distinct subparts.
        let spaced = perm("newsletter:read, write");
        let tight = perm("newsletter:read,write");
        assert_ne!(spaced, tight);
        assert!(!tight.implies(&spaced));
        assert!(spaced.implies(&perm("newsletter:read")));
    }

    #[test]
    fn test_named_permissions() {
        // Same word.
        assert!(perm("something").implies(&perm("something")));

        // Different case is identical in the default mode.
        assert!(perm("something").implies(&perm("SOMETHING")));
        assert!(perm("SOMETHING").implies(&perm("something")));

        // Different word never matches.
        assert!(!perm("something").implies(&perm("else")));
        assert!(!perm("else").implies(&perm("something")));
    }

    #[test]
    fn test_case_sensitive_mode() {
        let upper = WildcardPermission::parse("BLAHBLAH", true).unwrap();
        let mixed = WildcardPermission::parse("bLAHBLAH", true).unwrap();
        let lower = WildcardPermission::parse("blahblah", true).unwrap();

        assert!(upper.implies(&upper));
        assert!(!upper.implies(&mixed));
        assert!(!mixed.implies(&upper));
        assert!(!upper.implies(&lower));

        // Original case is preserved in the canonical form.
        assert_eq!(upper.to_string(), "BLAHBLAH");
    }

    #[test]
    fn test_default_mode_lowercases() {
        assert_eq!(perm("Foo:*").to_string(), "foo:*");
    }

    #[test]
    fn test_subpart_lists() {
        assert!(perm("one,two").implies(&perm("one")));
        assert!(!perm("one").implies(&perm("one,two")));

        assert!(perm("one,two,three").implies(&perm("one,three")));
        assert!(!perm("one,three").implies(&perm("one,two,three")));

        let p1 = perm("one,two:one,two,three");
        let p2 = perm("one:three");
        let p3 = perm("one:two,three");
        assert!(p1.implies(&p2));
        assert!(!p2.implies(&p1));
        assert!(p1.implies(&p3));
        assert!(!p2.implies(&p3));
        assert!(p3.implies(&p2));

        assert!(perm("one,two,three:one,two,three:one,two").implies(&perm("one:three:two")));
        assert!(!perm("one:three:two").implies(&perm("one,two,three:one,two,three:one,two")));
    }

    #[test]
    fn test_shorter_grant_implies_longer_request() {
        let p1 = perm("one");
        let p2 = perm("one:two,three,four");
        let p3 = perm("one:two,three,four:five:six:seven");
        assert!(p1.implies(&p2));
        assert!(p1.implies(&p3));
        assert!(!p2.implies(&p1));
        assert!(!p3.implies(&p1));
        assert!(p2.implies(&p3));
    }

    #[test]
    fn test_subpart_order_is_irrelevant_for_equality() {
        assert_eq!(perm("one,two:three,four"), perm("two,one:four,three"));
        assert_ne!(perm("one,two:three"), perm("one,two:three,four"));
    }

    #[test]
    fn test_universal_wildcard() {
        let all = perm("*");
        for requested in [
            "one",
            "one:two",
            "one,two:three,four",
            "one,two:three,four,five:six:seven,eight",
        ] {
            assert!(all.implies(&perm(requested)), "\"*\" should imply {requested:?}");
        }
    }

    #[rstest]
    #[case("newsletter:*")]
    #[case("newsletter:*:*")]
    #[case("newsletter:*:*:*")]
    #[case("newsletter")]
    fn test_trailing_wildcards_cover_the_domain(#[case] granted: &str) {
        let granted = perm(granted);
        for requested in [
            "newsletter:read",
            "newsletter:read,write",
            "newsletter:*",
            "newsletter:*:*",
            "newsletter:*:read",
            "newsletter:write:*",
            "newsletter:read,write:*",
            "newsletter",
        ] {
            assert!(
                granted.implies(&perm(requested)),
                "{granted} should imply {requested:?}"
            );
        }
    }

    #[test]
    fn test_inner_wildcard() {
        let p1 = perm("newsletter:*:read");
        assert!(p1.implies(&perm("newsletter:123:read")));
        assert!(p1.implies(&perm("newsletter:123:read:write")));
        assert!(!p1.implies(&perm("newsletter:123,456:read,write")));
        assert!(!p1.implies(&perm("newsletter:read")));
        assert!(!p1.implies(&perm("newsletter:read,write")));

        let p2 = perm("newsletter:*:read:*");
        assert!(p2.implies(&perm("newsletter:123:read")));
        assert!(p2.implies(&perm("newsletter:123:read:write")));
    }

    #[test]
    fn test_wildcard_left_termination() {
        let p1 = perm("one");
        let p2 = perm("one:*");
        let p3 = perm("one:*:*");
        let p4 = perm("one:read");

        assert!(p1.implies(&p2));
        assert!(p1.implies(&p3));
        assert!(p1.implies(&p4));

        assert!(p2.implies(&p1));
        assert!(p2.implies(&p3));
        assert!(p2.implies(&p4));

        assert!(p3.implies(&p1));
        assert!(p3.implies(&p2));
        assert!(p3.implies(&p4));

        // Extra non-wildcard parts on the grant do not imply a shorter request.
        assert!(!p4.implies(&p1));
        assert!(!p4.implies(&p2));
        assert!(!p4.implies(&p3));
    }

    #[rstest]
    #[case("*")]
    #[case("one")]
    #[case("one:two")]
    #[case("one,two:three,four")]
    #[case("one,two:three,four,five:six:seven,eight")]
    fn test_to_string_round_trips(#[case] text: &str) {
        let p = perm(text);
        assert_eq!(p.to_string(), text);
        assert_eq!(perm(&p.to_string()), p);
    }

    #[test]
    fn test_implies_is_reflexive() {
        for text in ["*", "one", "one:two", "one,two:three,four", "a:b:c:d,e"] {
            let p = perm(text);
            assert!(p.implies(&p), "{text:?} should imply itself");
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let p = perm("newsletter:edit,view:*");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"newsletter:edit,view:*\"");
        let back: WildcardPermission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_serde_rejects_invalid_text() {
        let result: Result<WildcardPermission, _> = serde_json::from_str("\"::,,::,:\"");
        assert!(result.is_err());
    }
}
