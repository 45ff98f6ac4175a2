//! Configuration for the calculator module.

use serde::{Deserialize, Serialize};

/// Module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// How `average` accumulates its sum.
    pub summation: Summation,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            summation: Summation::Naive,
        }
    }
}

/// Summation strategy used by `average`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Summation {
    /// Left-to-right `f64` addition.
    #[default]
    Naive,
    /// Neumaier compensated summation.
    Compensated,
}
