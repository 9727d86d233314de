//! Physio-Core: Foundation types for physiological signal processing
//!
//! Channel registry, signal containers, and error types shared by the
//! cleaning/feature-extraction pipeline and the HTTP shell.

pub mod channel;
pub mod error;
pub mod signal;

pub use channel::{Channel, ChannelMetadata};
pub use error::{PhysioError, PhysioResult};
pub use signal::{ChannelSignal, SignalStats};
