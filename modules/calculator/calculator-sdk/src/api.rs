//! Calculator API trait
//!
//! Contract trait for the calculator. Every method is synchronous and
//! side-effect free.

use crate::error::CalculatorError;
use crate::models::Operation;

/// Calculator API trait
///
/// Arithmetic over finite `f64` values. Non-finite inputs are rejected with
/// [`CalculatorError::InvalidArgument`] instead of propagating NaN or Infinity.
pub trait CalculatorClient: Send + Sync {
    /// Add two numbers and return the sum.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidArgument`] if either input is NaN or infinite.
    fn add(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidArgument`] if either input is NaN or infinite.
    fn subtract(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Multiply two numbers.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidArgument`] if either input is NaN or infinite.
    fn multiply(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidArgument`] if either input is NaN or infinite,
    /// [`CalculatorError::DivisionByZero`] if `b` is zero.
    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError>;

    /// Arithmetic mean of `numbers`.
    ///
    /// # Errors
    /// [`CalculatorError::EmptyInput`] if `numbers` is empty,
    /// [`CalculatorError::InvalidArgument`] if any element is NaN or infinite.
    fn average(&self, numbers: &[f64]) -> Result<f64, CalculatorError>;

    /// Apply a binary [`Operation`] to `a` and `b`.
    ///
    /// # Errors
    /// Same as the method `op` dispatches to.
    fn evaluate(&self, op: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
        }
    }
}
