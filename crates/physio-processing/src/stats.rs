//! Scalar statistics and normalization helpers

use physio_core::{PhysioError, PhysioResult, SignalStats};

/// Z-score normalize a sequence to zero mean and unit variance.
///
/// Uses population statistics of the input itself, so the output scale
/// is relative to the current batch rather than a fixed calibration
/// baseline. A constant sequence has no defined z-score and is
/// rejected instead of producing NaNs.
pub fn zscore(data: &[f64]) -> PhysioResult<Vec<f64>> {
    if data.is_empty() {
        return Err(PhysioError::InvalidInput {
            reason: "cannot z-score an empty sequence".to_string(),
        });
    }

    let stats = SignalStats::calculate(data);
    if stats.std_dev == 0.0 {
        return Err(PhysioError::DegenerateSignal {
            reason: "zero variance input, z-score undefined".to_string(),
        });
    }

    Ok(data.iter().map(|x| (x - stats.mean) / stats.std_dev).collect())
}

/// Root-sum-of-squares: sqrt of the sum of squared samples
pub fn root_sum_squares(data: &[f64]) -> f64 {
    data.iter().map(|x| x * x).sum::<f64>().sqrt()
}
