//! ChannelSignal: container for one channel's raw samples
//!
//! Request-scoped; created from one request's payload and dropped when
//! the response is assembled. Never shared across requests.

use crate::channel::Channel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One channel's ordered samples as submitted in a single request
#[derive(Debug, Clone)]
pub struct ChannelSignal {
    /// Unique identifier for this signal instance
    pub id: Uuid,
    /// Channel the samples belong to
    pub channel: Channel,
    /// Raw sample sequence
    pub samples: Vec<f64>,
}

impl ChannelSignal {
    /// Create a new signal from a raw sample array
    pub fn new(channel: Channel, samples: Vec<f64>) -> Self {
        ChannelSignal {
            id: Uuid::new_v4(),
            channel,
            samples,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the signal carries no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sampling rate from the channel registry
    pub fn sampling_rate(&self) -> f64 {
        self.channel.sampling_rate()
    }

    /// Signal duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sampling_rate()
    }

    /// Basic statistics over the samples
    pub fn stats(&self) -> SignalStats {
        SignalStats::calculate(&self.samples)
    }
}

/// Basic statistics for a sample sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalStats {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl SignalStats {
    /// Population statistics over the sequence; zeros for empty input
    pub fn calculate(data: &[f64]) -> Self {
        if data.is_empty() {
            return Self {
                mean: 0.0,
                variance: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
                median: 0.0,
            };
        }

        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;

        let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        let min = data.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = data.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        let median = {
            let mut sorted = data.to_vec();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let mid = sorted.len() / 2;
            if sorted.len() % 2 == 0 {
                (sorted[mid - 1] + sorted[mid]) / 2.0
            } else {
                sorted[mid]
            }
        };

        Self {
            mean,
            variance,
            std_dev,
            min,
            max,
            median,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_creation() {
        let signal = ChannelSignal::new(Channel::Bvp, vec![0.0; 128]);

        assert_eq!(signal.len(), 128);
        assert_eq!(signal.sampling_rate(), 64.0);
        assert!((signal.duration() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_signal() {
        let signal = ChannelSignal::new(Channel::Eda, Vec::new());
        assert!(signal.is_empty());

        let stats = signal.stats();
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_stats_known_values() {
        let stats = SignalStats::calculate(&[1.0, 2.0, 3.0, 4.0, 5.0]);

        assert!((stats.mean - 3.0).abs() < 1e-12);
        assert!((stats.variance - 2.0).abs() < 1e-12);
        assert!((stats.min - 1.0).abs() < 1e-12);
        assert!((stats.max - 5.0).abs() < 1e-12);
        assert!((stats.median - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_median_even_length() {
        let stats = SignalStats::calculate(&[4.0, 1.0, 3.0, 2.0]);
        assert!((stats.median - 2.5).abs() < 1e-12);
    }
}
