//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorClient`)
//! - Error types (`CalculatorError`)
//! - Operation model (`Operation`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, Operation};
//!
//! let sum = client.add(2.0, 3.0)?;
//! let quotient = client.evaluate(Operation::Divide, 10.0, 2.0)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::CalculatorClient;

mod error;
pub use error::CalculatorError;

pub mod models;
pub use models::Operation;
