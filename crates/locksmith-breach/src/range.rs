//! Parsing of k-anonymity range responses.
//!
//! The range endpoint returns one `HEXSUFFIX:COUNT` record per line. Suffix
//! comparison is case-insensitive; the service uppercases, local digests are
//! rendered lowercase.

use locksmith_core::BreachResult;

/// Match a local digest suffix against a range-response body.
///
/// Lines without a `:` separator or with a non-numeric count are skipped.
/// Returns [`BreachResult::clean`] when the suffix is absent.
#[must_use]
pub fn match_suffix(body: &str, suffix: &str) -> BreachResult {
    for line in body.lines() {
        let Some((candidate, count)) = line.trim().split_once(':') else {
            continue;
        };

        if candidate.eq_ignore_ascii_case(suffix) {
            let risk_score = count.trim().parse().unwrap_or(0);
            return BreachResult {
                is_pwned: true,
                risk_score,
            };
        }
    }

    BreachResult::clean()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "003D68EB55068C33ACE09247EE4C639306B:3\r\n\
                        012C192B2F16F82EA0EB9EF18D9D539B0DD:1\r\n\
                        1E4C9B93F3F0682250B6CF8331B7EE68FD8:3861493\r\n";

    #[test]
    fn test_suffix_found() {
        let result = match_suffix(BODY, "1e4c9b93f3f0682250b6cf8331b7ee68fd8");
        assert!(result.is_pwned);
        assert_eq!(result.risk_score, 3_861_493);
    }

    #[test]
    fn test_suffix_absent() {
        let result = match_suffix(BODY, "fffffffffffffffffffffffffffffffffff");
        assert!(!result.is_pwned);
        assert_eq!(result.risk_score, 0);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let upper = match_suffix(BODY, "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
        let lower = match_suffix(BODY, "1e4c9b93f3f0682250b6cf8331b7ee68fd8");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_garbage_lines_are_skipped() {
        let body = "not a record\n\n1E4C9B93F3F0682250B6CF8331B7EE68FD8:42\nAAAA";
        let result = match_suffix(body, "1e4c9b93f3f0682250b6cf8331b7ee68fd8");
        assert!(result.is_pwned);
        assert_eq!(result.risk_score, 42);
    }

    #[test]
    fn test_non_numeric_count_scores_zero() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:many";
        let result = match_suffix(body, "1e4c9b93f3f0682250b6cf8331b7ee68fd8");
        assert!(result.is_pwned);
        assert_eq!(result.risk_score, 0);
    }

    #[test]
    fn test_empty_body() {
        let result = match_suffix("", "1e4c9b93f3f0682250b6cf8331b7ee68fd8");
        assert!(!result.is_pwned);
    }
}
