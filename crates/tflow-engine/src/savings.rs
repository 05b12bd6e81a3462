//! Tokens-saved accounting for hosts that keep running totals

use tflow_core::OptimizationResult;

/// Whitespace-separated token count
pub fn simple_token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Tokens saved by replacing `original` with `optimized`, never negative
pub fn tokens_saved(original: &str, optimized: &str) -> usize {
    simple_token_count(original).saturating_sub(simple_token_count(optimized))
}

/// Text a host should substitute: the optimized text, or the original when empty
pub fn effective_output<'a>(result: &'a OptimizationResult, original: &'a str) -> &'a str {
    if result.optimized.is_empty() {
        original
    } else {
        &result.optimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize;

    #[test]
    fn test_simple_token_count() {
        assert_eq!(simple_token_count("  one two\tthree\n"), 3);
        assert_eq!(simple_token_count(""), 0);
    }

    #[test]
    fn test_tokens_saved_is_never_negative() {
        assert_eq!(tokens_saved("a b c d", "a b"), 2);
        assert_eq!(tokens_saved("a", "a b c"), 0);
    }

    #[test]
    fn test_effective_output_falls_back() {
        let blank = "   \n  ";
        let result = optimize(blank);
        assert_eq!(effective_output(&result, blank), blank);

        let text = "I just wanted to ask if you could please help me create a summary";
        let result = optimize(text);
        assert_eq!(effective_output(&result, text), result.optimized);
    }
}
