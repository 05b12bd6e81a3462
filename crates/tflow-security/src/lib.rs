//! Secret detection and masking for code-like lines

pub mod redactor;
pub mod rule;

pub use redactor::{MaskOutcome, MaskingProfile, Redactor};
pub use rule::SecretRule;

/// Mask secrets in one line with the standard rule list
pub fn detect_and_mask_secrets(line: &str, line_number: usize) -> MaskOutcome {
    use std::sync::LazyLock;

    static STANDARD: LazyLock<Redactor> = LazyLock::new(Redactor::new);
    STANDARD.detect_and_mask(line, line_number)
}
