use alloc::format;
use core::fmt;

use regex::Regex;

// -----------------------------------------------------------------------------
// PathPattern

/// The address filter of a discovery handler.
///
/// A [`Regex`](PathPattern::Regex) pattern must match the whole canonical
/// address string, so `actors\[1\]` does not match `pipeline.actors[1]`
/// while `.*actors\[1\]` does.
#[derive(Clone, Default)]
pub enum PathPattern {
    /// Accepts every address, regardless of inversion.
    #[default]
    MatchAll,
    /// Accepts addresses whose full text matches the expression.
    Regex(Regex),
}

impl PathPattern {
    /// Compiles `pattern` as a whole-string expression.
    ///
    /// `pattern` must be a valid expression on its own; it is checked
    /// before being anchored.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_discovery::access::Path;
    /// use vc_discovery::discovery::PathPattern;
    ///
    /// let pattern = PathPattern::regex(r".*actors\[1\]").unwrap();
    /// let address = Path::parse("pipeline.actors[1]").unwrap().to_string();
    ///
    /// assert!(pattern.matches(&address, false));
    /// assert!(!pattern.matches(&address, true));
    /// assert!(!PathPattern::regex(r"actors\[1\]").unwrap().matches(&address, false));
    /// assert!(PathPattern::regex("a)|(b").is_err());
    /// ```
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        // `a)|(b` would otherwise balance against the anchoring group.
        Regex::new(pattern)?;
        Regex::new(&format!("^(?:{pattern})$")).map(Self::Regex)
    }

    #[inline]
    pub fn is_match_all(&self) -> bool {
        matches!(self, Self::MatchAll)
    }

    /// Tests the canonical text of a [`Path`](crate::access::Path); `invert` negates a regex
    /// result.
    pub fn matches(&self, address: &str, invert: bool) -> bool {
        match self {
            Self::MatchAll => true,
            Self::Regex(regex) => regex.is_match(address) != invert,
        }
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchAll => f.write_str("MatchAll"),
            Self::Regex(regex) => f.debug_tuple("Regex").field(&regex.as_str()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PathPattern;

    #[test]
    fn patterns_are_validated_before_anchoring() {
        assert!(PathPattern::regex("a)|(b").is_err());
        assert!(PathPattern::regex("(a").is_err());

        let pattern = PathPattern::regex("a|b").unwrap();
        assert!(pattern.matches("a", false));
        assert!(!pattern.matches("ab", false));
        assert!(!pattern.matches("pipeline.actors[1].jb", false));
    }

    #[test]
    fn match_all_ignores_inversion() {
        assert!(PathPattern::MatchAll.matches("anything", true));
        assert!(PathPattern::default().is_match_all());
    }
}
