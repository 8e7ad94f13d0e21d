//! Accuracy of forecasts against observed values
//!
//! All functions compare two aligned, equal-length sequences: `measured`
//! (the forecast) and `actual` (what was observed).

use crate::{checked_div, MathError, Result};

/// Relative error of a single forecast, `|measured - actual| / |actual|`
pub fn relative_error_value(measured: f64, actual: f64) -> Result<f64> {
    checked_div((measured - actual).abs(), actual.abs(), "relative error")
}

/// Pairwise relative errors of aligned sequences
///
/// ```
/// use forecast_math::accuracy::relative_error;
///
/// assert_eq!(relative_error(&[100.0], &[80.0]).unwrap(), vec![0.25]);
/// assert_eq!(relative_error(&[80.0], &[100.0]).unwrap(), vec![0.2]);
/// ```
pub fn relative_error(measured: &[f64], actual: &[f64]) -> Result<Vec<f64>> {
    ensure_aligned(measured, actual)?;

    measured
        .iter()
        .zip(actual)
        .map(|(&m, &a)| relative_error_value(m, a))
        .collect()
}

/// Mean of the pairwise relative errors (MAPE expressed as a ratio)
pub fn mean_relative_error(measured: &[f64], actual: &[f64]) -> Result<f64> {
    ensure_non_empty(measured)?;
    let errors = relative_error(measured, actual)?;

    Ok(errors.iter().sum::<f64>() / errors.len() as f64)
}

/// Mean absolute error of aligned sequences
pub fn mean_absolute_error(measured: &[f64], actual: &[f64]) -> Result<f64> {
    ensure_non_empty(measured)?;
    ensure_aligned(measured, actual)?;

    let sum: f64 = measured
        .iter()
        .zip(actual)
        .map(|(m, a)| (m - a).abs())
        .sum();

    Ok(sum / measured.len() as f64)
}

fn ensure_aligned(measured: &[f64], actual: &[f64]) -> Result<()> {
    if measured.len() != actual.len() {
        return Err(MathError::InvalidInput(format!(
            "Measured length ({}) doesn't match actual length ({})",
            measured.len(),
            actual.len()
        )));
    }
    Ok(())
}

fn ensure_non_empty(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "At least one value is needed for an average error".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_relative_error_is_asymmetric() {
        assert_eq!(relative_error(&[100.0], &[80.0]).unwrap(), vec![0.25]);
        assert_eq!(relative_error(&[80.0], &[100.0]).unwrap(), vec![0.2]);
    }

    #[test]
    fn test_relative_error_pairwise() {
        let errors = relative_error(&[110.0, 90.0, 50.0], &[100.0, 100.0, -50.0]).unwrap();

        assert_relative_eq!(errors[0], 0.1, max_relative = 1e-12);
        assert_relative_eq!(errors[1], 0.1, max_relative = 1e-12);
        assert_relative_eq!(errors[2], 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_relative_error_zero_actual() {
        let err = relative_error(&[1.0, 2.0], &[1.0, 0.0]).unwrap_err();
        assert!(matches!(err, MathError::DegenerateInput(_)));
    }

    #[test]
    fn test_relative_error_length_mismatch() {
        let err = relative_error(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
    }

    #[test]
    fn test_relative_error_empty() {
        assert!(relative_error(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_mean_relative_error() {
        let mre = mean_relative_error(&[110.0, 80.0], &[100.0, 100.0]).unwrap();
        assert_relative_eq!(mre, 0.15, max_relative = 1e-12);

        assert!(matches!(
            mean_relative_error(&[], &[]),
            Err(MathError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_mean_absolute_error() {
        let mae = mean_absolute_error(&[12.0, 18.0, 33.0], &[10.0, 20.0, 30.0]).unwrap();
        assert_relative_eq!(mae, 7.0 / 3.0, max_relative = 1e-12);

        assert!(mean_absolute_error(&[1.0], &[1.0, 2.0]).is_err());
    }
}
