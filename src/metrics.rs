//! Regression-quality metrics
//!
//! The four statistics reported by the metrics annotator: mean absolute
//! error, mean squared error, explained variance score and R². Zero-variance
//! edge cases follow the usual scoring convention: a perfect prediction of a
//! constant target scores 1.0, an imperfect one scores 0.0.

use crate::error::{ChartError, Result};

/// Mean absolute error between true and predicted values
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate(y_true, y_pred)?;
    let n = y_true.len() as f64;
    Ok(y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p).abs())
        .sum::<f64>()
        / n)
}

/// Mean squared error between true and predicted values
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate(y_true, y_pred)?;
    let n = y_true.len() as f64;
    Ok(y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum::<f64>()
        / n)
}

/// Explained variance score: 1 - Var(y_true - y_pred) / Var(y_true)
pub fn explained_variance_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate(y_true, y_pred)?;
    let residuals: Vec<f64> = y_true.iter().zip(y_pred).map(|(t, p)| t - p).collect();
    let num = variance(&residuals);
    let den = variance(y_true);
    Ok(score_ratio(num, den))
}

/// Coefficient of determination: 1 - SS_res / SS_tot
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    validate(y_true, y_pred)?;
    let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| (t - p) * (t - p))
        .sum();
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean) * (t - mean)).sum();
    Ok(score_ratio(ss_res, ss_tot))
}

fn validate(y_true: &[f64], y_pred: &[f64]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(ChartError::LengthMismatch {
            left: y_true.len(),
            right: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(ChartError::InsufficientData(
            "metric inputs are empty".to_string(),
        ));
    }
    Ok(())
}

/// 1 - num/den, with the zero-denominator convention
fn score_ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        if num == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - num / den
    }
}

/// Population variance
fn variance(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n
}

#[cfg(test)]
mod tests {
    use super::*;

    const Y_TRUE: [f64; 4] = [3.0, -0.5, 2.0, 7.0];
    const Y_PRED: [f64; 4] = [2.5, 0.0, 2.0, 8.0];

    #[test]
    fn test_mae() {
        let mae = mean_absolute_error(&Y_TRUE, &Y_PRED).unwrap();
        assert!((mae - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mse() {
        let mse = mean_squared_error(&Y_TRUE, &Y_PRED).unwrap();
        assert!((mse - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_r2() {
        let r2 = r2_score(&Y_TRUE, &Y_PRED).unwrap();
        assert!((r2 - 0.9486081370449679).abs() < 1e-12);
    }

    #[test]
    fn test_explained_variance() {
        let evs = explained_variance_score(&Y_TRUE, &Y_PRED).unwrap();
        assert!((evs - 0.9571734475374732).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_prediction() {
        let y = [1.0, 2.0, 3.0];
        assert_eq!(mean_absolute_error(&y, &y).unwrap(), 0.0);
        assert_eq!(mean_squared_error(&y, &y).unwrap(), 0.0);
        assert_eq!(explained_variance_score(&y, &y).unwrap(), 1.0);
        assert_eq!(r2_score(&y, &y).unwrap(), 1.0);
    }

    #[test]
    fn test_constant_target() {
        let y = [4.0, 4.0, 4.0];
        assert_eq!(r2_score(&y, &y).unwrap(), 1.0);
        assert_eq!(r2_score(&y, &[4.0, 4.0, 5.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            r2_score(&[1.0], &[1.0, 2.0]),
            Err(ChartError::LengthMismatch { left: 1, right: 2 })
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            mean_absolute_error(&[], &[]),
            Err(ChartError::InsufficientData(_))
        ));
    }
}
