//! Domain service for calculator
//!
//! Wraps the pure operations with module configuration and tracing.

use calculator_sdk::Operation;
use tracing::debug;

use crate::config::CalculatorConfig;

use super::error::DomainError;
use super::ops;

/// Domain service that performs calculator operations.
///
/// Stateless apart from its configuration, so it can be cloned and shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalculatorConfig,
}

impl Service {
    /// Create a new service with the given configuration.
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Add two numbers and return the sum.
    ///
    /// # Errors
    /// [`DomainError::NonFinite`] if either input is NaN or infinite.
    pub fn add(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        self.evaluate(Operation::Add, a, b)
    }

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// [`DomainError::NonFinite`] if either input is NaN or infinite.
    pub fn subtract(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        self.evaluate(Operation::Subtract, a, b)
    }

    /// Multiply two numbers.
    ///
    /// # Errors
    /// [`DomainError::NonFinite`] if either input is NaN or infinite.
    pub fn multiply(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        self.evaluate(Operation::Multiply, a, b)
    }

    /// Divide `a` by `b`.
    ///
    /// # Errors
    /// [`DomainError::NonFinite`] if either input is NaN or infinite,
    /// [`DomainError::DivisionByZero`] if `b` is zero.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        self.evaluate(Operation::Divide, a, b)
    }

    /// Apply a binary operation.
    ///
    /// # Errors
    /// Same as the operation `op` dispatches to.
    #[allow(clippy::unused_self)]
    pub fn evaluate(&self, op: Operation, a: f64, b: f64) -> Result<f64, DomainError> {
        let name = op.as_str();
        debug!(a, b, "performing {name}");
        ops::evaluate(op, a, b)
    }

    /// Arithmetic mean of `numbers`, summed with the configured strategy.
    ///
    /// # Errors
    /// [`DomainError::EmptyInput`] if `numbers` is empty,
    /// [`DomainError::NonFiniteElement`] if any element is NaN or infinite.
    pub fn average(&self, numbers: &[f64]) -> Result<f64, DomainError> {
        let summation = self.config.summation;
        debug!(len = numbers.len(), ?summation, "performing average");
        ops::average(numbers, summation)
    }
}
