//! Core types for test-signal generation
//!
//! This module defines the fundamental types used throughout the library,
//! particularly for representing complex I/Q (In-phase/Quadrature) samples.
//!
//! ## Understanding I/Q Samples
//!
//! In Software Defined Radio (SDR), signals are represented as complex numbers
//! where:
//! - **I (In-phase)**: The real component, aligned with a reference carrier
//! - **Q (Quadrature)**: The imaginary component, 90° out of phase
//!
//! A delta-like test pulse is just such a complex baseband sequence: energy
//! concentrated at (or near) a single time sample, used to characterize a
//! receiver's frequency response.

use num_complex::Complex64;

/// Type alias for complex numbers using f64 precision
pub type Complex = Complex64;

/// A single I/Q sample point
pub type IQSample = Complex64;

/// A floating point sample (for real-valued signals such as window taps)
pub type Sample = f64;

/// A buffer of I/Q samples
pub type IQBuffer = Vec<IQSample>;

/// Result type for signal-generation operations
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur during signal generation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DspError {
    #[error("invalid pulse length: {0}. Must be at least 1 sample")]
    InvalidLength(usize),
}

/// Helper functions for working with complex sample buffers
pub mod complex_ops {
    use super::*;

    /// Find the largest sample magnitude in a buffer.
    ///
    /// Returns 0.0 for an empty buffer.
    pub fn peak_magnitude(samples: &[IQSample]) -> f64 {
        samples.iter().map(|s| s.norm()).fold(0.0_f64, f64::max)
    }

    /// Find the index and magnitude of the largest sample.
    ///
    /// Ties resolve to the lowest index. Returns `(0, 0.0)` for an empty
    /// buffer.
    pub fn peak_sample(samples: &[IQSample]) -> (usize, f64) {
        let mut max_idx = 0;
        let mut max_mag = 0.0;
        for (i, s) in samples.iter().enumerate() {
            let mag = s.norm();
            if mag > max_mag {
                max_mag = mag;
                max_idx = i;
            }
        }
        (max_idx, max_mag)
    }

    /// Rescale a buffer so its peak magnitude equals `target`.
    ///
    /// When the current peak is exactly zero the buffer is left untouched;
    /// there is no meaningful scale factor for an all-zero signal.
    pub fn scale_to_peak(samples: &mut [IQSample], target: f64) {
        let max = peak_magnitude(samples);
        if max > 0.0 {
            let scale = target / max;
            for s in samples.iter_mut() {
                *s *= scale;
            }
        }
    }

    /// Compute the average power (mean |s|²) of a signal
    pub fn average_power(samples: &[IQSample]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().map(|s| s.norm_sqr()).sum::<f64>() / samples.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_peak_magnitude() {
        let samples = vec![
            Complex::new(0.5, 0.0),
            Complex::new(3.0, 4.0),
            Complex::new(0.0, -1.0),
        ];
        assert_relative_eq!(complex_ops::peak_magnitude(&samples), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_peak_sample_index() {
        let samples = vec![
            Complex::new(0.1, 0.0),
            Complex::new(0.0, 0.9),
            Complex::new(0.2, 0.0),
        ];
        let (idx, mag) = complex_ops::peak_sample(&samples);
        assert_eq!(idx, 1);
        assert_relative_eq!(mag, 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_to_peak() {
        let mut samples = vec![Complex::new(2.0, 0.0), Complex::new(0.0, 4.0)];
        complex_ops::scale_to_peak(&mut samples, 1.0);
        assert_relative_eq!(complex_ops::peak_magnitude(&samples), 1.0, epsilon = 1e-12);
        assert_relative_eq!(samples[0].re, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_to_peak_zero_signal() {
        let mut samples = vec![Complex::new(0.0, 0.0); 4];
        complex_ops::scale_to_peak(&mut samples, 1.0);
        for s in &samples {
            assert_eq!(s.norm(), 0.0);
        }
    }

    #[test]
    fn test_average_power() {
        let samples = vec![
            Complex::new(1.0, 0.0),
            Complex::new(0.0, 1.0),
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, -1.0),
        ];
        assert_relative_eq!(complex_ops::average_power(&samples), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_error_display() {
        let e = DspError::InvalidLength(0);
        assert!(e.to_string().contains("invalid pulse length"));
    }
}
