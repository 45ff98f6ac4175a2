//! Local (in-process) client for the calculator module

use std::sync::Arc;

use calculator_sdk::{CalculatorClient, CalculatorError};

use crate::domain::Service;

/// `CalculatorClient` implementation that calls the domain [`Service`]
/// directly and converts domain errors into SDK errors.
#[derive(Clone)]
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorClient for CalculatorLocalClient {
    fn add(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.add(a, b).map_err(Into::into)
    }

    fn subtract(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.subtract(a, b).map_err(Into::into)
    }

    fn multiply(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.multiply(a, b).map_err(Into::into)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.divide(a, b).map_err(Into::into)
    }

    fn average(&self, numbers: &[f64]) -> Result<f64, CalculatorError> {
        self.service.average(numbers).map_err(Into::into)
    }
}
