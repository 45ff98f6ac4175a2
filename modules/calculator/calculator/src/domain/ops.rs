//! Pure arithmetic operations.
//!
//! Every function validates that its inputs are finite before computing.
//! Results follow IEEE-754 double precision: finite inputs can still
//! overflow to an infinite result, which is returned as is.

use calculator_sdk::Operation;

use crate::config::Summation;

use super::error::DomainError;

fn ensure_finite(argument: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { argument, value })
    }
}

/// Returns `a + b`.
///
/// # Errors
/// [`DomainError::NonFinite`] if either input is NaN or infinite.
pub fn add(a: f64, b: f64) -> Result<f64, DomainError> {
    Ok(ensure_finite("a", a)? + ensure_finite("b", b)?)
}

/// Returns `a - b`.
///
/// # Errors
/// [`DomainError::NonFinite`] if either input is NaN or infinite.
pub fn subtract(a: f64, b: f64) -> Result<f64, DomainError> {
    Ok(ensure_finite("a", a)? - ensure_finite("b", b)?)
}

/// Returns `a * b`.
///
/// # Errors
/// [`DomainError::NonFinite`] if either input is NaN or infinite.
pub fn multiply(a: f64, b: f64) -> Result<f64, DomainError> {
    Ok(ensure_finite("a", a)? * ensure_finite("b", b)?)
}

/// Returns `a / b`.
///
/// Both operands are validated before the divisor is checked, so
/// `divide(NaN, 0.0)` reports the invalid argument.
///
/// # Errors
/// [`DomainError::NonFinite`] if either input is NaN or infinite,
/// [`DomainError::DivisionByZero`] if `b` is `0.0` or `-0.0`.
pub fn divide(a: f64, b: f64) -> Result<f64, DomainError> {
    let a = ensure_finite("a", a)?;
    let b = ensure_finite("b", b)?;
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}

/// Applies a binary [`Operation`].
///
/// # Errors
/// Same as the function `op` dispatches to.
pub fn evaluate(op: Operation, a: f64, b: f64) -> Result<f64, DomainError> {
    match op {
        Operation::Add => add(a, b),
        Operation::Subtract => subtract(a, b),
        Operation::Multiply => multiply(a, b),
        Operation::Divide => divide(a, b),
    }
}

/// Returns the arithmetic mean of `numbers`.
///
/// # Errors
/// [`DomainError::EmptyInput`] if `numbers` is empty,
/// [`DomainError::NonFiniteElement`] naming the first NaN or infinite element.
pub fn average(numbers: &[f64], summation: Summation) -> Result<f64, DomainError> {
    if numbers.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    if let Some((index, &value)) = numbers.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        return Err(DomainError::NonFiniteElement { index, value });
    }
    let sum = match summation {
        Summation::Naive => numbers.iter().sum::<f64>(),
        Summation::Compensated => compensated_sum(numbers),
    };
    // Exact for any slice shorter than 2^53 elements.
    #[allow(clippy::cast_precision_loss)]
    let len = numbers.len() as f64;
    Ok(sum / len)
}

/// Neumaier compensated summation.
///
/// Carries a running compensation term so low-order bits lost in each
/// addition are recovered, including when the addend is larger in magnitude
/// than the running sum. Once the running sum overflows the compensation is
/// dropped and the infinite sum is returned; combining the two would give NaN.
#[must_use]
pub fn compensated_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if !t.is_finite() {
            return t;
        }
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 9] = [0.0, -0.0, 1.0, -1.0, 2.5, -7.25, 1e-300, 1e300, 123_456.789];

    #[test]
    fn test_binary_ops_match_native_arithmetic() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(add(a, b).unwrap(), a + b);
                assert_eq!(subtract(a, b).unwrap(), a - b);
                assert_eq!(multiply(a, b).unwrap(), a * b);
                if b != 0.0 {
                    assert_eq!(divide(a, b).unwrap(), a / b);
                }
            }
        }
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            for op in Operation::ALL {
                assert!(matches!(
                    evaluate(op, bad, 1.0),
                    Err(DomainError::NonFinite { argument: "a", .. })
                ));
                assert!(matches!(
                    evaluate(op, 1.0, bad),
                    Err(DomainError::NonFinite { argument: "b", .. })
                ));
            }
        }
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(10.0, 0.0), Err(DomainError::DivisionByZero));
        assert_eq!(divide(10.0, -0.0), Err(DomainError::DivisionByZero));
        assert_eq!(divide(0.0, 0.0), Err(DomainError::DivisionByZero));
    }

    #[test]
    fn test_divide_validates_before_zero_check() {
        assert!(matches!(
            divide(f64::NAN, 0.0),
            Err(DomainError::NonFinite { argument: "a", .. })
        ));
    }

    #[test]
    fn test_overflow_is_not_an_error() {
        assert_eq!(multiply(f64::MAX, 2.0).unwrap(), f64::INFINITY);
        assert_eq!(add(f64::MAX, f64::MAX).unwrap(), f64::INFINITY);
        assert_eq!(divide(f64::MAX, 1e-300).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_average_empty() {
        assert_eq!(average(&[], Summation::Naive), Err(DomainError::EmptyInput));
        assert_eq!(
            average(&[], Summation::Compensated),
            Err(DomainError::EmptyInput)
        );
    }

    #[test]
    fn test_average_reports_first_bad_index() {
        let data = [1.0, 2.0, f64::INFINITY, f64::NAN];
        assert!(matches!(
            average(&data, Summation::Naive),
            Err(DomainError::NonFiniteElement { index: 2, .. })
        ));
    }

    #[test]
    fn test_average_naive_is_sum_over_len() {
        let data = [0.1, 0.2, 0.3, 1e-9, -4.5];
        let expected = data.iter().sum::<f64>() / 5.0;
        assert_eq!(average(&data, Summation::Naive).unwrap(), expected);
    }

    #[test]
    fn test_compensated_recovers_cancelled_bits() {
        let data = [1e100, 1.0, -1e100];
        assert_eq!(average(&data, Summation::Naive).unwrap(), 0.0);
        assert_eq!(average(&data, Summation::Compensated).unwrap(), 1.0 / 3.0);
    }

    #[test]
    fn test_compensated_overflow_is_infinite_not_nan() {
        let data = [f64::MAX, f64::MAX, -f64::MAX];
        assert_eq!(compensated_sum(&data), f64::INFINITY);
        assert_eq!(
            average(&data, Summation::Compensated).unwrap(),
            f64::INFINITY
        );
    }

    #[test]
    fn test_compensated_sum_small_values() {
        let data = [0.1; 10];
        assert!((compensated_sum(&data) - 1.0).abs() < 1e-15);
        assert_eq!(compensated_sum(&[]), 0.0);
    }
}
