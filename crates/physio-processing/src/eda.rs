//! EDA (electrodermal activity) cleaning, decomposition, and features

use crate::filters::lowpass_filter;
use crate::pipeline::FeatureMap;
use crate::stats::zscore;
use physio_core::{Channel, PhysioResult, SignalStats};

/// Boundary between the slow conductance level and fast responses
const TONIC_CUTOFF_HZ: f64 = 0.05;

/// Tonic/phasic decomposition of one EDA sequence
#[derive(Debug, Clone, PartialEq)]
pub struct EdaComponents {
    /// Slow-varying baseline conductance level
    pub tonic: Vec<f64>,
    /// Fast sympathetic-response component
    pub phasic: Vec<f64>,
}

/// Clean a raw EDA sequence: z-score, then split into tonic and phasic
/// components at the registry sampling rate (4 Hz).
///
/// The tonic component is a 2nd-order Butterworth lowpass of the
/// normalized signal; the phasic component is the residual, so the two
/// sum back to the normalized input. Empty input yields two empty
/// sequences without error.
pub fn clean_eda(samples: &[f64]) -> PhysioResult<EdaComponents> {
    if samples.is_empty() {
        return Ok(EdaComponents {
            tonic: Vec::new(),
            phasic: Vec::new(),
        });
    }

    let normalized = zscore(samples)?;
    let tonic = lowpass_filter(&normalized, TONIC_CUTOFF_HZ, Channel::Eda.sampling_rate())?;
    let phasic = normalized
        .iter()
        .zip(&tonic)
        .map(|(x, t)| x - t)
        .collect();

    Ok(EdaComponents { tonic, phasic })
}

/// Features of the tonic (skin conductance level) component, prefix `EDL_`
pub fn tonic_features(tonic: &[f64]) -> FeatureMap {
    component_features("EDL", tonic)
}

/// Features of the phasic (skin conductance response) component, prefix `EDR_`
pub fn phasic_features(phasic: &[f64]) -> FeatureMap {
    component_features("EDR", phasic)
}

fn component_features(prefix: &str, data: &[f64]) -> FeatureMap {
    let mut features = FeatureMap::new();
    if data.is_empty() {
        // Empty component: omit the keys rather than emit NaNs
        return features;
    }

    let stats = SignalStats::calculate(data);
    features.insert(format!("{}_Mean", prefix), stats.mean);
    features.insert(format!("{}_var", prefix), stats.variance);
    features.insert(format!("{}_std", prefix), stats.std_dev);
    features.insert(format!("{}_median", prefix), stats.median);
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_eda(n: usize) -> Vec<f64> {
        // Slow drift plus occasional response-like bumps at 4 Hz
        (0..n)
            .map(|i| {
                let t = i as f64 / 4.0;
                2.0 + 0.01 * t + 0.3 * (2.0 * std::f64::consts::PI * 0.2 * t).sin()
            })
            .collect()
    }

    #[test]
    fn test_empty_eda_yields_empty_components() {
        let components = clean_eda(&[]).unwrap();
        assert!(components.tonic.is_empty());
        assert!(components.phasic.is_empty());
    }

    #[test]
    fn test_component_lengths_match_input() {
        let raw = synthetic_eda(240);
        let components = clean_eda(&raw).unwrap();
        assert_eq!(components.tonic.len(), raw.len());
        assert_eq!(components.phasic.len(), raw.len());
    }

    #[test]
    fn test_components_sum_to_normalized_signal() {
        let raw = synthetic_eda(240);
        let normalized = zscore(&raw).unwrap();
        let components = clean_eda(&raw).unwrap();

        for i in 0..raw.len() {
            let reconstructed = components.tonic[i] + components.phasic[i];
            assert!((reconstructed - normalized[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tonic_is_smoother_than_phasic() {
        let raw = synthetic_eda(480);
        let components = clean_eda(&raw).unwrap();

        let roughness = |data: &[f64]| {
            data.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>()
        };
        assert!(roughness(&components.tonic) < roughness(&components.phasic));
    }

    #[test]
    fn test_feature_key_prefixes() {
        let components = clean_eda(&synthetic_eda(120)).unwrap();

        let edl = tonic_features(&components.tonic);
        let edr = phasic_features(&components.phasic);

        assert!(edl.keys().all(|k| k.starts_with("EDL_")));
        assert!(edr.keys().all(|k| k.starts_with("EDR_")));
        assert_eq!(edl.len(), 4);
        assert_eq!(edr.len(), 4);
    }

    #[test]
    fn test_empty_component_omits_keys() {
        assert!(tonic_features(&[]).is_empty());
        assert!(phasic_features(&[]).is_empty());
    }

    #[test]
    fn test_var_is_square_of_std() {
        let components = clean_eda(&synthetic_eda(120)).unwrap();
        let edl = tonic_features(&components.tonic);
        assert!((edl["EDL_var"] - edl["EDL_std"] * edl["EDL_std"]).abs() < 1e-12);
    }
}
