//! FFT utilities for pulse synthesis and spectrum inspection
//!
//! The delta-pulse generator is built on one identity: the inverse DFT of a
//! flat, all-ones spectrum is a time-domain impulse. This module wraps
//! `rustfft` with the small surface that identity needs — a planned
//! forward/inverse transform pair — plus the helpers a downstream consumer
//! uses to re-derive and inspect the spectrum of a generated pulse:
//!
//! ```text
//! flat spectrum ──ifft──▶ impulse ──(shift/window/scale)──▶ test pulse
//!                                        │
//!      magnitude / dB view ◀────fft──────┘   (verification path)
//! ```
//!
//! The inverse transform is normalized by `1/N`, so a forward transform
//! followed by an inverse transform reproduces the input.

use rustfft::{num_complex::Complex64, Fft, FftPlanner};
use std::fmt;
use std::sync::Arc;

use crate::types::IQSample;

/// Planned FFT pair for a fixed transform size.
pub struct FftProcessor {
    /// Transform size
    size: usize,
    /// Forward FFT instance
    fft_forward: Arc<dyn Fft<f64>>,
    /// Inverse FFT instance
    fft_inverse: Arc<dyn Fft<f64>>,
    /// Scratch buffer shared by both directions
    scratch: Vec<Complex64>,
}

impl fmt::Debug for FftProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftProcessor")
            .field("size", &self.size)
            .finish()
    }
}

impl FftProcessor {
    /// Create a new FFT processor for the given transform size.
    pub fn new(size: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft_forward = planner.plan_fft_forward(size);
        let fft_inverse = planner.plan_fft_inverse(size);
        let scratch_len = fft_forward
            .get_inplace_scratch_len()
            .max(fft_inverse.get_inplace_scratch_len());
        let scratch = vec![Complex64::new(0.0, 0.0); scratch_len];

        Self {
            size,
            fft_forward,
            fft_inverse,
            scratch,
        }
    }

    /// Get the transform size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the forward FFT in-place.
    pub fn fft_inplace(&mut self, buffer: &mut [Complex64]) {
        assert_eq!(buffer.len(), self.size);
        self.fft_forward
            .process_with_scratch(buffer, &mut self.scratch);
    }

    /// Compute the forward FFT, returning a new buffer.
    ///
    /// Inputs shorter than the transform size are zero-padded.
    pub fn fft(&mut self, input: &[IQSample]) -> Vec<Complex64> {
        let mut buffer: Vec<Complex64> = input.to_vec();
        buffer.resize(self.size, Complex64::new(0.0, 0.0));
        self.fft_inplace(&mut buffer);
        buffer
    }

    /// Compute the inverse FFT in-place, normalized by `1/N`.
    pub fn ifft_inplace(&mut self, buffer: &mut [Complex64]) {
        assert_eq!(buffer.len(), self.size);
        self.fft_inverse
            .process_with_scratch(buffer, &mut self.scratch);

        let scale = 1.0 / self.size as f64;
        for sample in buffer.iter_mut() {
            *sample *= scale;
        }
    }

    /// Compute the inverse FFT, returning a new buffer.
    pub fn ifft(&mut self, input: &[Complex64]) -> Vec<Complex64> {
        let mut buffer = input.to_vec();
        buffer.resize(self.size, Complex64::new(0.0, 0.0));
        self.ifft_inplace(&mut buffer);
        buffer
    }

    /// Compute the magnitude spectrum.
    pub fn magnitude_spectrum(spectrum: &[Complex64]) -> Vec<f64> {
        spectrum.iter().map(|c| c.norm()).collect()
    }

    /// Compute the power spectrum in dB, floored at -200 dB.
    pub fn power_spectrum_db(spectrum: &[Complex64]) -> Vec<f64> {
        spectrum
            .iter()
            .map(|c| {
                let power = c.norm_sqr();
                if power > 1e-20 {
                    10.0 * power.log10()
                } else {
                    -200.0
                }
            })
            .collect()
    }
}

/// Cyclic shift moving index 0 to the middle of the buffer.
///
/// This is the standard zero-to-center convention: the two halves are
/// swapped with the split at `ceil(n/2)`, so the old index 0 lands at
/// index `n / 2` for both even and odd lengths. Applying it to a
/// time-domain impulse moves the peak from the first sample to the middle
/// of the buffer.
pub fn fft_shift<T: Clone>(buffer: &[T]) -> Vec<T> {
    let n = buffer.len();
    let split = n.div_ceil(2);
    let mut shifted = Vec::with_capacity(n);
    shifted.extend_from_slice(&buffer[split..]);
    shifted.extend_from_slice(&buffer[..split]);
    shifted
}
