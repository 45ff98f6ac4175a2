//! Calculator Module
//!
//! Arithmetic over finite `f64` values: four binary operations plus the
//! arithmetic mean. Inputs that are NaN or infinite are rejected, division by
//! zero and averaging an empty sequence fail with their own error kinds.
//!
//! ## Architecture
//!
//! - `domain/ops.rs` - Pure operations and summation
//! - `domain/service.rs` - Configured, traced service over the operations
//! - `local_client.rs` - In-process `CalculatorClient` implementation
//! - `config.rs` - Module configuration
//!
//! The free functions at the crate root are the stateless surface and use
//! naive summation for `average`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use calculator_sdk::{CalculatorClient, CalculatorError, Operation};

mod config;
pub use config::{CalculatorConfig, Summation};

mod local_client;
pub use local_client::CalculatorLocalClient;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;
pub use domain::Service;

/// Returns `a + b`.
///
/// # Errors
/// [`CalculatorError::InvalidArgument`] if either input is NaN or infinite.
pub fn add(a: f64, b: f64) -> Result<f64, CalculatorError> {
    Ok(domain::ops::add(a, b)?)
}

/// Returns `a - b`.
///
/// # Errors
/// [`CalculatorError::InvalidArgument`] if either input is NaN or infinite.
pub fn subtract(a: f64, b: f64) -> Result<f64, CalculatorError> {
    Ok(domain::ops::subtract(a, b)?)
}

/// Returns `a * b`.
///
/// # Errors
/// [`CalculatorError::InvalidArgument`] if either input is NaN or infinite.
pub fn multiply(a: f64, b: f64) -> Result<f64, CalculatorError> {
    Ok(domain::ops::multiply(a, b)?)
}

/// Returns `a / b`.
///
/// # Errors
/// [`CalculatorError::InvalidArgument`] if either input is NaN or infinite,
/// [`CalculatorError::DivisionByZero`] if `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, CalculatorError> {
    Ok(domain::ops::divide(a, b)?)
}

/// Returns the arithmetic mean of `numbers`.
///
/// # Errors
/// [`CalculatorError::EmptyInput`] if `numbers` is empty,
/// [`CalculatorError::InvalidArgument`] if any element is NaN or infinite.
pub fn average(numbers: &[f64]) -> Result<f64, CalculatorError> {
    Ok(domain::ops::average(numbers, Summation::Naive)?)
}
