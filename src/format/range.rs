//! Line-range rendering for hunk headers.
//!
//! Both styles must reproduce the source's exact conventions for empty
//! (zero-line) ranges because downstream patch tools parse them.

/// Classic context-diff range rendering for real (origin-1) numbers `(ta, tb)`.
#[must_use]
pub fn context_range(ta: i64, tb: i64) -> String {
    if tb <= ta {
        format!("{tb}")
    } else {
        format!("{ta},{tb}")
    }
}

/// Unified-diff range rendering for real (origin-1) numbers `(ta, tb)`.
#[must_use]
pub fn unified_range(ta: i64, tb: i64) -> String {
    if tb <= ta {
        if tb < ta {
            format!("{tb},0")
        } else {
            format!("{tb}")
        }
    } else {
        format!("{ta},{}", tb - ta + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_style_empty_range_prints_before_line() {
        assert_eq!(context_range(5, 4), "4");
    }

    #[test]
    fn context_style_nonempty_range_prints_pair() {
        assert_eq!(context_range(1, 5), "1,5");
    }

    #[test]
    fn unified_style_empty_range_prints_zero_length() {
        assert_eq!(unified_range(5, 4), "4,0");
    }

    #[test]
    fn unified_style_single_line_range_omits_length() {
        assert_eq!(unified_range(5, 5), "5");
    }

    #[test]
    fn unified_style_multi_line_range_prints_start_and_length() {
        assert_eq!(unified_range(1, 5), "1,5");
        assert_eq!(unified_range(10, 12), "10,3");
    }
}
