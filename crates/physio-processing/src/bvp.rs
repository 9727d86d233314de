//! BVP (blood volume pulse) cleaning and feature extraction

use crate::filters::bandpass_filter;
use crate::stats::{root_sum_squares, zscore};
use crate::pipeline::FeatureMap;
use physio_core::{Channel, PhysioError, PhysioResult, SignalStats};

/// Pulsatile frequency band for a 30-240 BPM heart rate range
const BVP_LOW_CUTOFF_HZ: f64 = 0.5;
const BVP_HIGH_CUTOFF_HZ: f64 = 4.0;

/// Clean a raw BVP sequence: z-score, then 2nd-order Butterworth
/// bandpass 0.5-4 Hz at the registry sampling rate (64 Hz).
///
/// Output length equals input length. Empty input is rejected rather
/// than handed to the filter.
pub fn clean_bvp(samples: &[f64]) -> PhysioResult<Vec<f64>> {
    if samples.is_empty() {
        return Err(PhysioError::InvalidInput {
            reason: "empty BVP sequence".to_string(),
        });
    }

    let normalized = zscore(samples)?;
    bandpass_filter(
        &normalized,
        BVP_LOW_CUTOFF_HZ,
        BVP_HIGH_CUTOFF_HZ,
        Channel::Bvp.sampling_rate(),
    )
}

/// Extract summary features from a cleaned BVP sequence.
///
/// Pure reduction: no side effects, input untouched. `PPG_var` carries
/// the standard deviation under the original field name.
pub fn bvp_features(cleaned: &[f64]) -> FeatureMap {
    let mut features = FeatureMap::new();
    if cleaned.is_empty() {
        return features;
    }

    let stats = SignalStats::calculate(cleaned);

    features.insert("PPG_Mean".to_string(), stats.mean);
    features.insert("PPG_var".to_string(), stats.std_dev);
    features.insert("PPG_median".to_string(), stats.median);
    features.insert("PPG_min".to_string(), stats.min);
    features.insert("PPG_max_min_diff".to_string(), stats.max - stats.min);
    features.insert("PPG_rss".to_string(), root_sum_squares(cleaned));
    features.insert(
        "PPG_amplitude".to_string(),
        peak_amplitude(cleaned, stats.mean),
    );
    features.insert(
        "PPG_baseline_shift".to_string(),
        baseline_shift(cleaned),
    );

    features
}

/// Indices of local maxima: samples exceeding both immediate neighbors
pub fn detect_peaks(data: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    for i in 1..data.len().saturating_sub(1) {
        if data[i] > data[i - 1] && data[i] > data[i + 1] {
            peaks.push(i);
        }
    }
    peaks
}

/// Average peak height above the signal mean; 0.0 when no peaks exist
fn peak_amplitude(data: &[f64], baseline: f64) -> f64 {
    let peaks = detect_peaks(data);
    if peaks.is_empty() {
        return 0.0;
    }

    let total: f64 = peaks.iter().map(|&i| data[i] - baseline).sum();
    total / peaks.len() as f64
}

/// Mean of the second half minus mean of the first half.
///
/// Odd lengths give the second half the extra sample.
fn baseline_shift(data: &[f64]) -> f64 {
    let mid = data.len() / 2;
    let (first, second) = data.split_at(mid);
    if first.is_empty() || second.is_empty() {
        return 0.0;
    }

    let first_mean = first.iter().sum::<f64>() / first.len() as f64;
    let second_mean = second.iter().sum::<f64>() / second.len() as f64;
    second_mean - first_mean
}
