//! Domain layer for calculator module
//!
//! Contains the arithmetic operations, their error type, and the service
//! that exposes them.

pub mod error;
pub mod ops;
pub mod service;

pub use error::DomainError;
pub use service::Service;
