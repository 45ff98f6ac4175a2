#![no_main]

use calculator::{CalculatorClient, CalculatorConfig, CalculatorLocalClient, Operation, Service, Summation};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    // Interpret input as a stream of little-endian f64 values
    let numbers: Vec<f64> = data
        .chunks_exact(8)
        .filter_map(|chunk| chunk.try_into().ok().map(f64::from_le_bytes))
        .collect();

    if let [a, b, ..] = numbers[..] {
        for op in Operation::ALL {
            if let Ok(value) = calculator::domain::ops::evaluate(op, a, b) {
                assert!(!value.is_nan(), "{a} {op} {b} produced NaN");
            }
        }
    }

    for summation in [Summation::Naive, Summation::Compensated] {
        let client = CalculatorLocalClient::new(Arc::new(Service::new(CalculatorConfig { summation })));
        if let Ok(mean) = client.average(&numbers) {
            assert!(!mean.is_nan(), "average produced NaN for {numbers:?}");
        }
    }
});
