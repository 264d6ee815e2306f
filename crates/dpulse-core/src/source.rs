//! Test signal sources
//!
//! A common trait for the library's signal generators so hosts can hold
//! them behind one interface and create them by name. Two sources exist:
//!
//! - [`DeltaPulse`](crate::pulse::DeltaPulse) — the IFFT-synthesized,
//!   windowable delta-like pulse
//! - [`Impulse`] — the ideal single-spike reference it approximates
//!
//! Comparing the two through the same receive chain shows exactly what the
//! windowing trades away.

use serde::Serialize;
use std::fmt::Debug;

use crate::pulse::{DeltaPulse, PulseConfig};
use crate::types::{Complex, DspError, DspResult, IQBuffer};

/// Information about a signal source for display and discovery.
///
/// Not Deserialize since it contains static references.
#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    /// Short name (e.g., "DeltaPulse")
    pub name: &'static str,
    /// Full name (e.g., "IFFT Delta-Like Pulse")
    pub full_name: &'static str,
    /// Brief description
    pub description: &'static str,
    /// Key characteristics
    pub characteristics: &'static [&'static str],
}

/// The trait all test signal sources implement.
pub trait SignalSource: Debug + Send + Sync {
    /// Get information about this source
    fn info(&self) -> SourceInfo;

    /// Number of samples a call to [`generate`](SignalSource::generate)
    /// produces
    fn num_samples(&self) -> usize;

    /// Generate the signal buffer
    fn generate(&self) -> DspResult<IQBuffer>;
}

impl SignalSource for DeltaPulse {
    fn info(&self) -> SourceInfo {
        SourceInfo {
            name: "DeltaPulse",
            full_name: "IFFT Delta-Like Pulse",
            description: "Impulse synthesized from a flat spectrum, with optional \
                Hann taper and centering",
            characteristics: &[
                "Flat frequency response",
                "Energy concentrated in one sample",
                "Peak scaled to an exact target amplitude",
            ],
        }
    }

    fn num_samples(&self) -> usize {
        self.config().num_samples
    }

    fn generate(&self) -> DspResult<IQBuffer> {
        DeltaPulse::generate(self)
    }
}

/// Ideal time-domain impulse: full amplitude at index 0, zero elsewhere.
///
/// The mathematical reference the synthesized delta pulse approximates.
/// Unlike the synthesized pulse it has no transform noise floor, which
/// makes it the cleaner choice for pure software loopback tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    /// Number of output samples
    pub num_samples: usize,
    /// Spike amplitude
    pub amplitude: f64,
}

impl Impulse {
    /// Create an impulse source.
    pub fn new(num_samples: usize, amplitude: f64) -> Self {
        Self {
            num_samples,
            amplitude,
        }
    }
}

impl SignalSource for Impulse {
    fn info(&self) -> SourceInfo {
        SourceInfo {
            name: "Impulse",
            full_name: "Ideal Time-Domain Impulse",
            description: "Single spike at index 0, exactly zero elsewhere",
            characteristics: &[
                "No transform noise floor",
                "Not windowable (a taper would null the spike)",
            ],
        }
    }

    fn num_samples(&self) -> usize {
        self.num_samples
    }

    fn generate(&self) -> DspResult<IQBuffer> {
        if self.num_samples < 1 {
            return Err(DspError::InvalidLength(self.num_samples));
        }
        let mut samples = vec![Complex::new(0.0, 0.0); self.num_samples];
        samples[0] = Complex::new(self.amplitude, 0.0);
        Ok(samples)
    }
}

/// Factory for creating signal sources by name.
pub struct SourceFactory;

impl SourceFactory {
    /// List all available source names.
    pub fn list() -> Vec<&'static str> {
        vec!["delta-pulse", "impulse"]
    }

    /// Create a source by name with the reference default amplitude (0.8).
    ///
    /// Names are matched case-insensitively with `-`/`_` ignored.
    pub fn create(name: &str, num_samples: usize) -> Option<Box<dyn SignalSource>> {
        let normalized = name.to_lowercase().replace(['-', '_'], "");
        let source: Box<dyn SignalSource> = match normalized.as_str() {
            "deltapulse" | "delta" => Box::new(DeltaPulse::new(PulseConfig {
                num_samples,
                ..PulseConfig::default()
            })),
            "impulse" => Box::new(Impulse::new(num_samples, 0.8)),
            _ => return None,
        };
        tracing::debug!(name, num_samples, "created signal source");
        Some(source)
    }
}
