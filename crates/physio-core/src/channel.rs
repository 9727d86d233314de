//! Channel classification and metadata registry
//!
//! Fixed per-channel sampling rates and units, compiled into the
//! process. The table is read-only; every downstream stage consults it.

use crate::error::{PhysioError, PhysioResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physiological channels recognized by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Blood volume pulse (photoplethysmography)
    Bvp,
    /// Electrodermal activity (skin conductance)
    Eda,
    /// EDA tonic component (skin conductance level)
    Edl,
    /// EDA phasic component (skin conductance response)
    Edr,
    /// Skin temperature
    Temp,
    /// Electrocardiogram-derived heart rate
    Ecg,
    /// Core body temperature estimate
    CoTemp,
    /// Physiological strain index
    Psi,
}

/// Immutable acquisition metadata for one channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelMetadata {
    /// Sampling rate in Hz
    pub sampling_rate: f64,
    /// Physical unit of the raw samples
    pub unit: &'static str,
}

impl Channel {
    /// All channels in the registry
    pub const ALL: [Channel; 8] = [
        Channel::Bvp,
        Channel::Eda,
        Channel::Edl,
        Channel::Edr,
        Channel::Temp,
        Channel::Ecg,
        Channel::CoTemp,
        Channel::Psi,
    ];

    /// Look up the registry entry for this channel
    pub fn metadata(&self) -> ChannelMetadata {
        match self {
            Channel::Bvp => ChannelMetadata { sampling_rate: 64.0, unit: "mV" },
            Channel::Eda => ChannelMetadata { sampling_rate: 4.0, unit: "uS" },
            Channel::Edl => ChannelMetadata { sampling_rate: 4.0, unit: "uS" },
            Channel::Edr => ChannelMetadata { sampling_rate: 4.0, unit: "uS" },
            Channel::Temp => ChannelMetadata { sampling_rate: 4.0, unit: "°C" },
            Channel::Ecg => ChannelMetadata { sampling_rate: 1.0, unit: "BPM" },
            Channel::CoTemp => ChannelMetadata { sampling_rate: 0.1, unit: "OtherUnit" },
            Channel::Psi => ChannelMetadata { sampling_rate: 1.0, unit: "OtherUnit" },
        }
    }

    /// Sampling rate shortcut
    pub fn sampling_rate(&self) -> f64 {
        self.metadata().sampling_rate
    }

    /// Wire name as it appears in request payloads
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Bvp => "BVP",
            Channel::Eda => "EDA",
            Channel::Edl => "EDL",
            Channel::Edr => "EDR",
            Channel::Temp => "TEMP",
            Channel::Ecg => "ECG",
            Channel::CoTemp => "CoTemp",
            Channel::Psi => "PSI",
        }
    }
}

impl FromStr for Channel {
    type Err = PhysioError;

    fn from_str(s: &str) -> PhysioResult<Self> {
        match s {
            "BVP" => Ok(Channel::Bvp),
            "EDA" => Ok(Channel::Eda),
            "EDL" => Ok(Channel::Edl),
            "EDR" => Ok(Channel::Edr),
            "TEMP" => Ok(Channel::Temp),
            "ECG" => Ok(Channel::Ecg),
            "CoTemp" => Ok(Channel::CoTemp),
            "PSI" => Ok(Channel::Psi),
            other => Err(PhysioError::UnknownChannel {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
