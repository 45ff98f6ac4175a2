/// Errors for calculator operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("divisor cannot be zero")]
    DivisionByZero,

    #[error("cannot average an empty sequence")]
    EmptyInput,
}
