//! Go identifier sanitization.

use crate::go::reserved::is_reserved;

/// Identifier returned when nothing of the input survives sanitization.
const PLACEHOLDER: &str = "_v";

/// Makes a valid Go identifier out of any string.
///
/// Underscores mark word boundaries and are consumed: the following kept
/// character is uppercased. ASCII letters and digits are kept; every other
/// character, including non-ASCII ones, is dropped silently. The first kept
/// character has its case forced from `first_upper`, producing the exported
/// or unexported CamelCase form. If nothing survives, the fixed placeholder
/// `"_v"` is returned, and a result colliding with a reserved Go word gets a
/// trailing `'_'`.
///
/// Known latent defect, kept for compatibility: an input whose first
/// surviving character is a digit yields an identifier starting with a
/// digit, which Go rejects.
#[must_use]
pub fn goify(input: &str, first_upper: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut first_written = false;
    let mut next_upper = false;
    for c in input.chars() {
        if c == '_' {
            next_upper = true;
        } else if c.is_ascii_alphanumeric() {
            let c = if !first_written {
                first_written = true;
                next_upper = false;
                if first_upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            } else if next_upper {
                next_upper = false;
                c.to_ascii_uppercase()
            } else {
                c
            };
            out.push(c);
        }
    }
    if out.is_empty() {
        return PLACEHOLDER.to_string();
    }
    if is_reserved(&out) {
        out.push('_');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore_marks_word_boundary() {
        assert_eq!(goify("user_id", true), "UserId");
        assert_eq!(goify("user_id", false), "userId");
        assert_eq!(goify("created_at_time", true), "CreatedAtTime");
    }

    #[test]
    fn test_first_character_case_follows_flag() {
        assert_eq!(goify("account", true), "Account");
        assert_eq!(goify("Account", false), "account");
        assert_eq!(goify("ACCOUNT", true), "ACCOUNT");
    }

    #[test]
    fn test_interior_case_is_preserved() {
        assert_eq!(goify("orderID", false), "orderID");
        assert_eq!(goify("HTMLBody", true), "HTMLBody");
    }

    #[test]
    fn test_other_characters_are_dropped() {
        assert_eq!(goify("order-id", false), "orderid");
        assert_eq!(goify("a b\tc", true), "Abc");
        assert_eq!(goify("vnd.app+json", false), "vndappjson");
        // Non-ASCII drops like any other symbol.
        assert_eq!(goify("prix_€_total", false), "prixTotal");
    }

    #[test]
    fn test_empty_survivor_yields_placeholder() {
        assert_eq!(goify("", true), "_v");
        assert_eq!(goify("___", false), "_v");
        assert_eq!(goify("!@#$", true), "_v");
    }

    #[test]
    fn test_reserved_word_gets_suffix() {
        assert_eq!(goify("type", false), "type_");
        assert_eq!(goify("struct", false), "struct_");
        assert_eq!(goify("int", false), "int_");
        // Exported forms do not collide, so no suffix.
        assert_eq!(goify("type", true), "Type");
    }

    #[test]
    fn test_reserved_table_gap_is_not_suffixed() {
        assert_eq!(goify("bool", false), "bool");
    }

    #[test]
    fn test_leading_digit_is_kept() {
        // Latent defect carried over: Go rejects this identifier.
        assert_eq!(goify("3d", false), "3d");
        assert_eq!(goify("3d", true), "3d");
    }

    #[test]
    fn test_deterministic() {
        for _ in 0..3 {
            assert_eq!(goify("user_id", true), "UserId");
        }
    }

    #[test]
    fn test_totality_over_assorted_inputs() {
        for input in ["", "_", "a", "9", "hello world", "___x___", "\u{1F980}"] {
            for flag in [true, false] {
                let out = goify(input, flag);
                assert!(!out.is_empty(), "goify({input:?}, {flag}) was empty");
            }
        }
    }
}
