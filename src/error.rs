use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("invalid argument: exponent must be non-negative, got {0}")]
    NegativeExponent(i64),

    #[error("invalid argument: exponent {0} is too large")]
    ExponentTooLarge(u64),

    #[error("invalid argument: C({n}, {k}) is undefined because k > n")]
    ChooseOutOfRange { n: u64, k: u64 },

    #[error("internal error: total for exponent {exponent} came out negative")]
    NegativeTotal { exponent: u64 },
}

impl CountError {
    /// Caller misuse, as opposed to a bug in the formula.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NegativeExponent(_)
                | Self::ExponentTooLarge(_)
                | Self::ChooseOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CountError>;
