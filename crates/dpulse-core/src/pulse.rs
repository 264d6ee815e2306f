//! Delta-like test pulse synthesis
//!
//! Generates an SDR-safe, delta-like pulse by taking the inverse FFT of a
//! flat spectrum. An all-ones frequency response transforms to a time-domain
//! impulse, which makes the pulse ideal for characterizing a receive chain:
//! feed it through the system under test, transform the output, and the
//! deviation from flat IS the frequency response.
//!
//! ## Pipeline
//!
//! ```text
//! ones(n) ──ifft──▶ impulse at 0 ──center?──▶ impulse at n/2
//!                                                  │
//!                       scale peak to amplitude ◀──┘
//!                                │
//!                   window? Hann taper + rescale
//! ```
//!
//! Two amplitude passes are deliberate: the Hann taper lowers the peak, so
//! the scaling runs again after windowing to restore the exact target. Keep
//! the amplitude at or below 1.0 when driving real transmitter hardware —
//! the generator itself does not enforce the ceiling.
//!
//! ## Example
//!
//! ```rust
//! use dpulse_core::pulse::{DeltaPulse, PulseConfig};
//!
//! let pulse = DeltaPulse::new(PulseConfig::default()).generate().unwrap();
//! assert_eq!(pulse.len(), 1024);
//! ```

use serde::{Deserialize, Serialize};

use crate::fft::{fft_shift, FftProcessor};
use crate::types::{complex_ops, Complex, DspError, DspResult, IQBuffer};
use crate::window::WindowType;

/// Delta-pulse generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulseConfig {
    /// Number of output samples (must be at least 1)
    pub num_samples: usize,
    /// Target peak magnitude. Keep at or below 1.0 for transmitter safety;
    /// a negative value is honored as a polarity flip.
    pub amplitude: f64,
    /// Apply a Hann taper to smooth the buffer edges. Without `center` the
    /// taper's zero endpoint lands on the impulse peak and nulls it, so
    /// windowing is only meaningful on a centered pulse.
    pub window: bool,
    /// Cyclically rotate the pulse so the peak sits at `num_samples / 2`
    /// instead of index 0.
    pub center: bool,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            num_samples: 1024,
            amplitude: 0.8,
            window: true,
            center: true,
        }
    }
}

/// Delta-like pulse generator.
///
/// Stateless: every call to [`generate`](DeltaPulse::generate) computes a
/// fresh buffer from the configuration alone, so identical configurations
/// always produce identical output.
#[derive(Debug, Clone)]
pub struct DeltaPulse {
    config: PulseConfig,
}

impl DeltaPulse {
    /// Create a generator with the given configuration.
    pub fn new(config: PulseConfig) -> Self {
        Self { config }
    }

    /// Create a generator with the reference defaults
    /// (1024 samples, amplitude 0.8, windowed, centered).
    pub fn with_defaults() -> Self {
        Self::new(PulseConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    /// Synthesize the pulse.
    ///
    /// Fails with [`DspError::InvalidLength`] when `num_samples` is zero;
    /// the check runs before any allocation, so there is no partial result.
    pub fn generate(&self) -> DspResult<IQBuffer> {
        let n = self.config.num_samples;
        if n < 1 {
            return Err(DspError::InvalidLength(n));
        }

        // Flat spectrum: all-ones transforms to an impulse at index 0.
        let mut samples = vec![Complex::new(1.0, 0.0); n];
        let mut processor = FftProcessor::new(n);
        processor.ifft_inplace(&mut samples);

        if self.config.center {
            samples = fft_shift(&samples);
        }

        complex_ops::scale_to_peak(&mut samples, self.config.amplitude);

        if self.config.window {
            let taper = WindowType::Hann.coefficients(n);
            for (s, &w) in samples.iter_mut().zip(taper.iter()) {
                *s *= w;
            }
            // The taper lowers the peak; restore the exact target.
            complex_ops::scale_to_peak(&mut samples, self.config.amplitude);
        }

        tracing::trace!(
            num_samples = n,
            window = self.config.window,
            center = self.config.center,
            "generated delta pulse"
        );
        Ok(samples)
    }
}

/// Convenience wrapper: synthesize a delta pulse in one call.
pub fn delta_pulse(
    num_samples: usize,
    amplitude: f64,
    window: bool,
    center: bool,
) -> DspResult<IQBuffer> {
    DeltaPulse::new(PulseConfig {
        num_samples,
        amplitude,
        window,
        center,
    })
    .generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_output_length() {
        for n in [1, 2, 7, 8, 64, 1024] {
            let pulse = delta_pulse(n, 0.8, true, true).unwrap();
            assert_eq!(pulse.len(), n);
        }
    }

    #[test]
    fn test_zero_length_is_invalid() {
        for (window, center) in [(false, false), (false, true), (true, false), (true, true)] {
            let result = delta_pulse(0, 0.8, window, center);
            assert_eq!(result.unwrap_err(), DspError::InvalidLength(0));
        }
    }

    #[test]
    fn test_peak_equals_amplitude() {
        for (window, center) in [(false, false), (false, true), (true, false), (true, true)] {
            let pulse = delta_pulse(256, 0.8, window, center).unwrap();
            let peak = complex_ops::peak_magnitude(&pulse);
            assert_relative_eq!(peak, 0.8, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_zero_amplitude_gives_silence() {
        for (window, center) in [(false, false), (true, true)] {
            let pulse = delta_pulse(128, 0.0, window, center).unwrap();
            for s in &pulse {
                assert_eq!(s.norm(), 0.0);
            }
        }
    }

    #[test]
    fn test_uncentered_peak_at_index_zero() {
        for n in [8, 64] {
            let pulse = delta_pulse(n, 1.0, false, false).unwrap();
            let (idx, _) = complex_ops::peak_sample(&pulse);
            assert_eq!(idx, 0);

            // The ideal impulse: full amplitude at zero phase, everything
            // else down at numerical noise.
            assert_relative_eq!(pulse[0].re, 1.0, max_relative = 1e-10);
            assert_relative_eq!(pulse[0].im, 0.0, epsilon = 1e-10);
            for s in &pulse[1..] {
                assert!(s.norm() < 1e-10, "sidelobe above numerical noise: {s}");
            }
        }
    }

    #[test]
    fn test_centered_peak_at_middle() {
        let pulse = delta_pulse(8, 1.0, false, true).unwrap();
        let (idx, _) = complex_ops::peak_sample(&pulse);
        assert_eq!(idx, 4);

        let pulse = delta_pulse(9, 1.0, false, true).unwrap();
        let (idx, _) = complex_ops::peak_sample(&pulse);
        assert_eq!(idx, 4);
    }

    #[test]
    fn test_windowed_centered_pulse() {
        let pulse = delta_pulse(256, 0.8, true, true).unwrap();
        let (idx, peak) = complex_ops::peak_sample(&pulse);
        assert_eq!(idx, 128);
        assert_relative_eq!(peak, 0.8, max_relative = 1e-9);

        // Hann endpoints are exactly zero.
        assert_eq!(pulse[0].norm(), 0.0);
        assert_eq!(pulse[255].norm(), 0.0);
    }

    #[test]
    fn test_single_sample_pulse() {
        for (window, center) in [(false, false), (false, true), (true, false), (true, true)] {
            let pulse = delta_pulse(1, 0.8, window, center).unwrap();
            assert_eq!(pulse.len(), 1);
            assert_relative_eq!(pulse[0].norm(), 0.8, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_negative_amplitude_flips_polarity() {
        let pulse = delta_pulse(16, -0.5, false, false).unwrap();
        assert_relative_eq!(pulse[0].re, -0.5, max_relative = 1e-10);
        assert_relative_eq!(complex_ops::peak_magnitude(&pulse), 0.5, max_relative = 1e-10);
    }

    #[test]
    fn test_deterministic_output() {
        let a = delta_pulse(512, 0.8, true, true).unwrap();
        let b = delta_pulse(512, 0.8, true, true).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_default_config() {
        let config = PulseConfig::default();
        assert_eq!(config.num_samples, 1024);
        assert_relative_eq!(config.amplitude, 0.8);
        assert!(config.window);
        assert!(config.center);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = PulseConfig {
            num_samples: 2048,
            amplitude: 0.5,
            window: false,
            center: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: PulseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
