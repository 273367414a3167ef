//! Trailing window modifiers: `+N` (warn N days ahead) and `*N` (repeat N days after).

use once_cell::sync::Lazy;
use regex::Regex;

static WARNING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" \+([0-9]+)$").unwrap());
static REPEAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r" \*([0-9]+)$").unwrap());

/// Window sizes found at the end of a pattern. `None` means the suffix was absent,
/// which is not the same as an explicit `+0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub warning: Option<u32>,
    pub repeat: Option<u32>,
}

impl Modifiers {
    /// Strips the modifiers from `pattern`, returning them with the bare body.
    ///
    /// The warning suffix is looked for first; the repeat suffix is then looked
    /// for on what remains, so `"Nov 22 *3 +5"` yields both but `"Nov 22 +5 *3"`
    /// only yields the repeat.
    pub fn split(pattern: &str) -> (Self, &str) {
        let mut body = pattern;
        let mut modifiers = Self::default();

        if let Some((days, rest)) = extract_warning(body) {
            modifiers.warning = Some(days);
            body = rest;
        }
        if let Some((days, rest)) = extract_repeat(body) {
            modifiers.repeat = Some(days);
            body = rest;
        }
        (modifiers, body)
    }
}

/// `"Mar 01 +5"` -> `Some((5, "Mar 01"))`. Anything but a digit run right before
/// the end of the string leaves the pattern alone.
pub fn extract_warning(body: &str) -> Option<(u32, &str)> {
    extract_suffix(&WARNING_RE, body)
}

/// `"Nov 27 *5"` -> `Some((5, "Nov 27"))`.
pub fn extract_repeat(body: &str) -> Option<(u32, &str)> {
    extract_suffix(&REPEAT_RE, body)
}

fn extract_suffix<'a>(re: &Regex, body: &'a str) -> Option<(u32, &'a str)> {
    let caps = re.captures(body)?;
    // A run too long for u32 is left in place, same as a malformed suffix.
    let days = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let start = caps.get(0)?.start();
    Some((days, &body[..start]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_is_extracted() {
        assert_eq!(extract_warning("Mar 01 +5"), Some((5, "Mar 01")));
        assert_eq!(extract_warning("Dec 01 +30"), Some((30, "Dec 01")));
    }

    #[test]
    fn malformed_warning_is_not_extracted() {
        assert_eq!(extract_warning("Mar 01 +x"), None);
        assert_eq!(extract_warning("Mar 01 +"), None);
        assert_eq!(extract_warning("Mar 01 +5x"), None);
        assert_eq!(extract_warning("Mar 01+5"), None);
        assert_eq!(extract_warning("Mar 01 +99999999999"), None);
    }

    #[test]
    fn repeat_is_extracted() {
        assert_eq!(extract_repeat("Nov 27 *5"), Some((5, "Nov 27")));
        assert_eq!(extract_repeat("Nov 27 +5"), None);
    }

    #[test]
    fn zero_is_distinct_from_absent() {
        let (m, body) = Modifiers::split("Jan 10 +0");
        assert_eq!(m.warning, Some(0));
        assert_eq!(m.repeat, None);
        assert_eq!(body, "Jan 10");

        let (m, body) = Modifiers::split("Jan 10");
        assert_eq!(m, Modifiers::default());
        assert_eq!(body, "Jan 10");
    }

    #[test]
    fn warning_is_stripped_before_repeat() {
        let (m, body) = Modifiers::split("Nov 22 *3 +5");
        assert_eq!(m.warning, Some(5));
        assert_eq!(m.repeat, Some(3));
        assert_eq!(body, "Nov 22");

        let (m, body) = Modifiers::split("Nov 22 +5 *3");
        assert_eq!(m.warning, None);
        assert_eq!(m.repeat, Some(3));
        assert_eq!(body, "Nov 22 +5");
    }

    #[test]
    fn modifier_only_pattern_is_left_alone() {
        assert_eq!(Modifiers::split("+5"), (Modifiers::default(), "+5"));
        assert_eq!(Modifiers::split(""), (Modifiers::default(), ""));
    }
}
