use crate::core::RttError;

/// Arithmetic mean. Fails on an empty sequence.
pub fn mean(values: &[f64]) -> Result<f64, RttError> {
    if values.is_empty() {
        return Err(RttError::InsufficientData { needed: 1, got: 0 });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation with the unbiased `n - 1` denominator.
///
/// Two-pass: the mean is computed first, then the squared residuals.
pub fn stdev(values: &[f64]) -> Result<f64, RttError> {
    let n = values.len();
    if n < 2 {
        return Err(RttError::InsufficientData { needed: 2, got: n });
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Ok((ss / (n - 1) as f64).sqrt())
}
