//! Digital IIR filters built from biquad sections

use physio_core::{PhysioError, PhysioResult};

/// Single biquad section (2nd order, direct form II transposed state)
#[derive(Debug, Clone)]
pub struct Biquad {
    // y[n] = b0*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
}

impl Biquad {
    /// Design a 2nd-order Butterworth lowpass section
    pub fn lowpass(cutoff: f64, sampling_rate: f64) -> PhysioResult<Self> {
        validate_cutoff(cutoff, sampling_rate)?;

        // Pre-warp frequency for the bilinear transform
        let k = (std::f64::consts::PI * cutoff / sampling_rate).tan();
        let k2 = k * k;
        let norm = 1.0 / (k2 + std::f64::consts::SQRT_2 * k + 1.0);

        Ok(Biquad {
            b0: k2 * norm,
            b1: 2.0 * k2 * norm,
            b2: k2 * norm,
            a1: 2.0 * (k2 - 1.0) * norm,
            a2: (k2 - std::f64::consts::SQRT_2 * k + 1.0) * norm,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        })
    }

    /// Design a 2nd-order Butterworth highpass section
    pub fn highpass(cutoff: f64, sampling_rate: f64) -> PhysioResult<Self> {
        validate_cutoff(cutoff, sampling_rate)?;

        let k = (std::f64::consts::PI * cutoff / sampling_rate).tan();
        let k2 = k * k;
        let norm = 1.0 / (k2 + std::f64::consts::SQRT_2 * k + 1.0);

        Ok(Biquad {
            b0: norm,
            b1: -2.0 * norm,
            b2: norm,
            a1: 2.0 * (k2 - 1.0) * norm,
            a2: (k2 - std::f64::consts::SQRT_2 * k + 1.0) * norm,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        })
    }

    /// Run one sample through the section
    pub fn process_sample(&mut self, input: f64) -> f64 {
        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Filter a whole sequence, consuming the section's state
    pub fn apply(mut self, data: &[f64]) -> Vec<f64> {
        data.iter().map(|&x| self.process_sample(x)).collect()
    }

    /// Clear the filter state
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

fn validate_cutoff(cutoff: f64, sampling_rate: f64) -> PhysioResult<()> {
    if sampling_rate <= 0.0 {
        return Err(PhysioError::FilterDesign {
            message: format!("sampling rate must be positive, got {}", sampling_rate),
        });
    }
    if cutoff <= 0.0 || cutoff >= sampling_rate / 2.0 {
        return Err(PhysioError::FilterDesign {
            message: format!(
                "cutoff {}Hz must lie between 0 and the Nyquist frequency {}Hz",
                cutoff,
                sampling_rate / 2.0
            ),
        });
    }
    Ok(())
}

/// 2nd-order Butterworth bandpass: highpass then lowpass in cascade
pub fn bandpass_filter(
    data: &[f64],
    low_cutoff: f64,
    high_cutoff: f64,
    sampling_rate: f64,
) -> PhysioResult<Vec<f64>> {
    if low_cutoff >= high_cutoff {
        return Err(PhysioError::FilterDesign {
            message: format!(
                "low cutoff {}Hz must be below high cutoff {}Hz",
                low_cutoff, high_cutoff
            ),
        });
    }

    let highpass = Biquad::highpass(low_cutoff, sampling_rate)?;
    let lowpass = Biquad::lowpass(high_cutoff, sampling_rate)?;

    let passed = highpass.apply(data);
    Ok(lowpass.apply(&passed))
}

/// 2nd-order Butterworth lowpass over a whole sequence
pub fn lowpass_filter(data: &[f64], cutoff: f64, sampling_rate: f64) -> PhysioResult<Vec<f64>> {
    Ok(Biquad::lowpass(cutoff, sampling_rate)?.apply(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, sampling_rate: f64, n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * freq * i as f64 / sampling_rate).sin())
            .collect()
    }

    #[test]
    fn test_length_preserved() {
        let data = sine(1.2, 64.0, 256);
        let filtered = bandpass_filter(&data, 0.5, 4.0, 64.0).unwrap();
        assert_eq!(filtered.len(), data.len());
    }

    #[test]
    fn test_bandpass_rejects_dc() {
        let data = vec![1.0; 512];
        let filtered = bandpass_filter(&data, 0.5, 4.0, 64.0).unwrap();

        // After the transient, a constant input should be suppressed
        let tail_max = filtered[256..]
            .iter()
            .fold(0.0f64, |a, &b| a.max(b.abs()));
        assert!(tail_max < 0.05, "DC leak: {}", tail_max);
    }

    #[test]
    fn test_bandpass_passes_pulsatile_band() {
        // 1.2 Hz is inside the 0.5-4 Hz heart rate band
        let data = sine(1.2, 64.0, 1024);
        let filtered = bandpass_filter(&data, 0.5, 4.0, 64.0).unwrap();

        let tail_max = filtered[512..]
            .iter()
            .fold(0.0f64, |a, &b| a.max(b.abs()));
        assert!(tail_max > 0.5, "passband attenuated too much: {}", tail_max);
    }

    #[test]
    fn test_bandpass_attenuates_out_of_band() {
        // 10 Hz is well above the 4 Hz upper cutoff
        let data = sine(10.0, 64.0, 1024);
        let filtered = bandpass_filter(&data, 0.5, 4.0, 64.0).unwrap();

        let tail_max = filtered[512..]
            .iter()
            .fold(0.0f64, |a, &b| a.max(b.abs()));
        assert!(tail_max < 0.3, "stopband leak: {}", tail_max);
    }

    #[test]
    fn test_invalid_designs_rejected() {
        assert!(Biquad::lowpass(40.0, 64.0).is_err()); // above Nyquist
        assert!(Biquad::highpass(0.0, 64.0).is_err());
        assert!(bandpass_filter(&[1.0], 4.0, 0.5, 64.0).is_err()); // inverted band
    }

    #[test]
    fn test_reset_clears_state() {
        let mut biquad = Biquad::lowpass(4.0, 64.0).unwrap();
        for _ in 0..16 {
            biquad.process_sample(1.0);
        }
        biquad.reset();

        let from_reset = biquad.process_sample(1.0);
        let fresh = Biquad::lowpass(4.0, 64.0).unwrap().process_sample(1.0);
        assert!((from_reset - fresh).abs() < 1e-15);
    }
}
