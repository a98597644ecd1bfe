//! Token estimation heuristics
//!
//! Both strategies work on the character count of the text, which is the
//! same unit the chunker budgets in.

/// Tokens per character assumed by the legacy estimate
pub const DEFAULT_LEGACY_TOKENS_PER_CHAR: f64 = 0.35;

/// Characters per token assumed by the modern estimate
pub const DEFAULT_MODERN_CHARS_PER_TOKEN: f64 = 4.0;

/// Character count of `text` (Unicode scalar values, not bytes)
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Estimation heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenStrategy {
    /// `ceil(chars * tokens_per_char)`
    Legacy,
    /// `ceil(chars / chars_per_token)`
    Modern,
}

impl TokenStrategy {
    pub const ALL: [TokenStrategy; 2] = [TokenStrategy::Legacy, TokenStrategy::Modern];
}

/// Both estimates for one piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenEstimate {
    pub modern: usize,
    pub legacy: usize,
}

/// Character-ratio token estimator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenEstimator {
    pub legacy_tokens_per_char: f64,
    pub modern_chars_per_token: f64,
}

impl TokenEstimator {
    pub fn new(legacy_tokens_per_char: f64, modern_chars_per_token: f64) -> Self {
        Self {
            legacy_tokens_per_char,
            modern_chars_per_token,
        }
    }

    pub fn estimate(&self, strategy: TokenStrategy, text: &str) -> usize {
        self.estimate_chars(strategy, char_len(text))
    }

    /// Estimate from an already measured character count
    pub fn estimate_chars(&self, strategy: TokenStrategy, chars: usize) -> usize {
        if chars == 0 {
            return 0;
        }

        let raw = match strategy {
            TokenStrategy::Legacy => chars as f64 * self.legacy_tokens_per_char,
            TokenStrategy::Modern => chars as f64 / self.modern_chars_per_token,
        };
        raw.ceil() as usize
    }

    /// Run both strategies over the same text
    pub fn estimate_both(&self, text: &str) -> TokenEstimate {
        let chars = char_len(text);
        TokenEstimate {
            modern: self.estimate_chars(TokenStrategy::Modern, chars),
            legacy: self.estimate_chars(TokenStrategy::Legacy, chars),
        }
    }
}

impl Default for TokenEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_LEGACY_TOKENS_PER_CHAR, DEFAULT_MODERN_CHARS_PER_TOKEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tokens_empty() {
        let estimator = TokenEstimator::default();
        assert_eq!(estimator.estimate(TokenStrategy::Legacy, ""), 0);
        assert_eq!(estimator.estimate(TokenStrategy::Modern, ""), 0);
        assert_eq!(estimator.estimate_both(""), TokenEstimate::default());
    }

    #[test]
    fn test_estimate_rounds_up() {
        let estimator = TokenEstimator::default();
        assert_eq!(estimator.estimate(TokenStrategy::Modern, "a"), 1);
        assert_eq!(estimator.estimate(TokenStrategy::Modern, "test"), 1);
        assert_eq!(estimator.estimate(TokenStrategy::Modern, "hello"), 2);
        assert_eq!(estimator.estimate(TokenStrategy::Legacy, "a"), 1);
    }

    #[test]
    fn test_four_thousand_char_prompt() {
        let text = "x".repeat(4000);
        let estimate = TokenEstimator::default().estimate_both(&text);
        assert_eq!(estimate.legacy, 1400);
        assert_eq!(estimate.modern, 1000);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let text = "é".repeat(8);
        assert_eq!(text.len(), 16);
        assert_eq!(char_len(&text), 8);
        assert_eq!(
            TokenEstimator::default().estimate(TokenStrategy::Modern, &text),
            2
        );
    }

    #[test]
    fn test_monotonic_in_length() {
        let estimator = TokenEstimator::default();
        for strategy in TokenStrategy::ALL {
            let mut previous = 0;
            for chars in 0..=3000 {
                let current = estimator.estimate_chars(strategy, chars);
                assert!(
                    current >= previous,
                    "{:?} not monotonic at {} chars",
                    strategy,
                    chars
                );
                previous = current;
            }
        }
    }

    #[test]
    fn test_custom_ratios() {
        let estimator = TokenEstimator::new(0.5, 2.0);
        assert_eq!(estimator.estimate(TokenStrategy::Legacy, "abcd"), 2);
        assert_eq!(estimator.estimate(TokenStrategy::Modern, "abcde"), 3);
    }
}
