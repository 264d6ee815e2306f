//! # Delta-Pulse Test Signal Library
//!
//! Generates synthetic "delta-like" pulse waveforms for Software Defined
//! Radio (SDR) testing. The pulse is the inverse FFT of a flat spectrum —
//! a time-domain impulse — optionally Hann-tapered and re-centered, with
//! its peak scaled to an exact target amplitude so it can safely drive
//! transmitter hardware.
//!
//! ## Signal Flow
//!
//! ```text
//! ones(n) → IFFT → [center] → scale peak → [Hann taper → rescale] → I/Q
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dpulse_core::{DeltaPulse, PulseConfig};
//!
//! let pulse = DeltaPulse::new(PulseConfig {
//!     num_samples: 1024,
//!     amplitude: 0.8,
//!     window: true,
//!     center: true,
//! })
//! .generate()
//! .expect("valid configuration");
//!
//! assert_eq!(pulse.len(), 1024);
//! ```
//!
//! Sources can also be created by name through [`SourceFactory`] and
//! exported to a host radio framework through the C ABI in [`plugin`].

pub mod fft;
pub mod observe;
pub mod plugin;
pub mod pulse;
pub mod source;
pub mod types;
pub mod window;

pub use fft::{fft_shift, FftProcessor};
pub use pulse::{delta_pulse, DeltaPulse, PulseConfig};
pub use source::{Impulse, SignalSource, SourceFactory, SourceInfo};
pub use types::{Complex, DspError, DspResult, IQBuffer, IQSample, Sample};
pub use window::WindowType;
