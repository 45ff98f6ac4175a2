use calculator_sdk::CalculatorError;

/// Domain-level errors for calculator operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("`{argument}` is not a finite number: {value}")]
    NonFinite { argument: &'static str, value: f64 },

    #[error("`numbers[{index}]` is not a finite number: {value}")]
    NonFiniteElement { index: usize, value: f64 },

    #[error("divisor cannot be zero")]
    DivisionByZero,

    #[error("cannot average an empty sequence")]
    EmptyInput,
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NonFinite { .. } | DomainError::NonFiniteElement { .. } => {
                Self::InvalidArgument(e.to_string())
            }
            DomainError::DivisionByZero => Self::DivisionByZero,
            DomainError::EmptyInput => Self::EmptyInput,
        }
    }
}
