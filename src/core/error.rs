use std::borrow::Cow;

/// Everything that can go wrong while turning the parameters into a range estimate.
///
/// None of these are fatal: the interactive session re-prompts on the first two
/// and abandons the current estimate on the last one.
#[derive(Debug, thiserror::Error)]
pub enum EstimationError {
    /// A value is not a number or lies outside of its physical domain.
    #[error("invalid {parameter}: {reason}")]
    InvalidInput { parameter: &'static str, reason: Cow<'static, str> },

    /// Unknown vehicle profile key.
    #[error("unknown vehicle profile `{key}`, expected one of: {expected}")]
    NotFound { key: String, expected: String },

    /// A denominator is zero or negative.
    #[error("cannot estimate the range: {quantity} must be positive, got {value}")]
    DivisionGuard { quantity: &'static str, value: String },
}

impl EstimationError {
    pub fn invalid_input(parameter: &'static str, reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidInput { parameter, reason: reason.into() }
    }

    pub fn division_guard(quantity: &'static str, value: impl ToString) -> Self {
        Self::DivisionGuard { quantity, value: value.to_string() }
    }

    /// Whether asking the user again may fix the error.
    pub const fn is_recoverable_by_prompt(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::NotFound { .. })
    }
}
