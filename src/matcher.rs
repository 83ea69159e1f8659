//! The two compiled regex matchers the formatters are handed:
//! `ignore_regex` and `function_regex`. Kept behind a trait so the core
//! never depends on a concrete regex engine, the same way `git-reabsorb`'s
//! `patch` module stays decoupled from `git` itself.

/// A compiled pattern matcher over a byte slice.
pub trait Matcher {
    /// Search `bytes[offset..offset + length]` for a match.
    ///
    /// Returns the byte offset of the match (within the searched window,
    /// i.e. `>= 0`) on success, or `None` if there is no match.
    fn search(&self, bytes: &[u8], offset: usize, length: usize) -> Option<usize>;
}

/// A [`Matcher`] backed by a compiled `regex::bytes::Regex`.
#[derive(Debug, Clone)]
pub struct RegexMatcher(regex::bytes::Regex);

impl RegexMatcher {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self(regex::bytes::Regex::new(pattern)?))
    }
}

impl Matcher for RegexMatcher {
    fn search(&self, bytes: &[u8], offset: usize, length: usize) -> Option<usize> {
        let end = offset.checked_add(length)?;
        let window = bytes.get(offset..end)?;
        self.0.find(window).map(|m| m.start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_within_window_only() {
        let m = RegexMatcher::new(r"^fn ").unwrap();
        let line = b"fn main() {\nextra";
        assert!(m.search(line, 0, 11).is_some());
    }

    #[test]
    fn out_of_range_window_is_no_match() {
        let m = RegexMatcher::new(r"x").unwrap();
        let line = b"abc";
        assert!(m.search(line, 0, 100).is_none());
    }

    #[test]
    fn regex_search_failure_is_no_match_not_error() {
        // A pattern that legitimately never matches behaves identically to
        // an engine-level search failure from the core's point of view
        // both surface as "no match," never an error.
        let m = RegexMatcher::new(r"zzz_never_matches_zzz").unwrap();
        assert!(m.search(b"hello world\n", 0, 12).is_none());
    }
}
