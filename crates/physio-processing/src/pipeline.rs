//! Request-level pipeline: dispatch channels to cleaners and extractors

use crate::bvp::{bvp_features, clean_bvp};
use crate::eda::{clean_eda, phasic_features, tonic_features};
use crate::temp::temp_features;
use physio_core::{Channel, ChannelSignal, PhysioError};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Flat feature-name → scalar map returned per request
pub type FeatureMap = BTreeMap<String, f64>;

/// One request's optional channel arrays.
///
/// Unknown fields are silently ignored; a missing or null field means
/// the channel was not supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProcessRequest {
    #[serde(rename = "BVP", default)]
    pub bvp: Option<Vec<f64>>,
    #[serde(rename = "EDA", default)]
    pub eda: Option<Vec<f64>>,
    #[serde(rename = "TEMP", default)]
    pub temp: Option<Vec<f64>>,
    #[serde(rename = "ECG", default)]
    pub ecg: Option<Vec<f64>>,
}

/// Run every supplied channel through its cleaner and extractor and
/// merge the prefixed features into one flat map.
///
/// Channels run in fixed order (BVP, EDA, TEMP, ECG). An empty array
/// is treated the same as an absent field. A failure in one channel is
/// logged and that channel's features omitted; the remaining channels
/// still run. No recognized channel present yields an empty map.
pub fn process(request: ProcessRequest) -> FeatureMap {
    let mut response = FeatureMap::new();

    if let Some(signal) = supplied(Channel::Bvp, request.bvp) {
        match clean_bvp(&signal.samples) {
            Ok(cleaned) => {
                response.extend(bvp_features(&cleaned));
            }
            Err(error) => log_channel_failure(&signal, &error),
        }
    }

    if let Some(signal) = supplied(Channel::Eda, request.eda) {
        match clean_eda(&signal.samples) {
            Ok(components) => {
                response.extend(tonic_features(&components.tonic));
                response.extend(phasic_features(&components.phasic));
            }
            Err(error) => log_channel_failure(&signal, &error),
        }
    }

    if let Some(signal) = supplied(Channel::Temp, request.temp) {
        response.extend(temp_features(&signal.samples));
    }

    if let Some(signal) = supplied(Channel::Ecg, request.ecg) {
        // ECG is accepted but produces no cleaning or features
        debug!(
            signal = %signal.id,
            samples = signal.len(),
            "ECG channel supplied, passthrough only"
        );
    }

    response
}

/// Wrap a supplied channel array into a signal entity.
///
/// An empty array is indistinguishable from an absent field here; only
/// a non-empty array counts as supplied.
fn supplied(channel: Channel, samples: Option<Vec<f64>>) -> Option<ChannelSignal> {
    let samples = samples?;
    if samples.is_empty() {
        return None;
    }

    let signal = ChannelSignal::new(channel, samples);
    debug!(
        signal = %signal.id,
        channel = %signal.channel,
        samples = signal.len(),
        "processing channel"
    );
    Some(signal)
}

fn log_channel_failure(signal: &ChannelSignal, error: &PhysioError) {
    warn!(
        signal = %signal.id,
        channel = %signal.channel,
        %error,
        "channel processing failed, omitting its features"
    );
}
