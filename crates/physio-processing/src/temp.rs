//! Temperature feature extraction and spectral diagnostics

use crate::pipeline::FeatureMap;
use physio_core::SignalStats;
use rustfft::{num_complex::Complex, FftPlanner};

/// Extract temperature features from a raw sequence, prefix `Temp_`.
///
/// Temperature is not cleaned; the raw samples are reduced directly.
/// `Temp_Var` actually carries the standard deviation — a known naming
/// defect kept for downstream compatibility.
pub fn temp_features(samples: &[f64]) -> FeatureMap {
    let mut features = FeatureMap::new();
    if samples.is_empty() {
        return features;
    }

    let stats = SignalStats::calculate(samples);
    features.insert("Temp_Mean".to_string(), stats.mean);
    features.insert("Temp_Var".to_string(), stats.std_dev);
    features
}

/// FFT-based frequency summary of a sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralSummary {
    /// Power-weighted mean frequency in Hz (DC excluded)
    pub mean_frequency: f64,
    /// Frequency below which half the spectral power lies, in Hz
    pub median_frequency: f64,
}

/// Spectral diagnostic for temperature traces.
///
/// Computed but not merged into the response map; available for
/// inspection alongside the surfaced features.
pub fn temp_spectral(samples: &[f64], sampling_rate: f64) -> Option<SpectralSummary> {
    if samples.len() < 4 || sampling_rate <= 0.0 {
        return None;
    }

    let fft_size = samples.len().next_power_of_two();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_size);

    let mut buffer: Vec<Complex<f64>> = samples
        .iter()
        .map(|&x| Complex::new(x, 0.0))
        .collect();
    buffer.resize(fft_size, Complex::new(0.0, 0.0));

    fft.process(&mut buffer);

    // Power spectrum over positive frequencies
    let power_spectrum: Vec<f64> = buffer[0..fft_size / 2]
        .iter()
        .map(|c| c.norm_sqr())
        .collect();

    let freq_resolution = sampling_rate / fft_size as f64;

    // Mean frequency skips the DC bin so the baseline level does not
    // dominate a near-constant trace
    let mut sum_freq = 0.0;
    let mut sum_power = 0.0;
    for (i, &power) in power_spectrum.iter().enumerate().skip(1) {
        sum_freq += i as f64 * freq_resolution * power;
        sum_power += power;
    }
    if sum_power == 0.0 {
        return None;
    }
    let mean_frequency = sum_freq / sum_power;

    let total_power: f64 = power_spectrum.iter().sum();
    let half_power = total_power / 2.0;
    let mut cumulative = 0.0;
    let mut median_frequency = 0.0;
    for (i, &power) in power_spectrum.iter().enumerate() {
        cumulative += power;
        if cumulative >= half_power {
            median_frequency = i as f64 * freq_resolution;
            break;
        }
    }

    Some(SpectralSummary {
        mean_frequency,
        median_frequency,
    })
}
