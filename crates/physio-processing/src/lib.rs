//! Physio-Processing: cleaning and feature extraction for physiological signals
//!
//! Per-channel cleaners (z-score + filtering/decomposition), feature
//! extractors, and the request-level pipeline orchestrator.

pub mod bvp;
pub mod eda;
pub mod filters;
pub mod pipeline;
pub mod stats;
pub mod temp;

pub use bvp::{bvp_features, clean_bvp};
pub use eda::{clean_eda, phasic_features, tonic_features, EdaComponents};
pub use filters::{bandpass_filter, lowpass_filter, Biquad};
pub use pipeline::{process, FeatureMap, ProcessRequest};
pub use stats::{root_sum_squares, zscore};
pub use temp::{temp_features, temp_spectral, SpectralSummary};
