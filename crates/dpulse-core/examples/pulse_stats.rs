//! Generate the reference delta pulse and print its time- and
//! frequency-domain statistics.
//!
//! ```bash
//! cargo run --example pulse_stats
//! ```

use dpulse_core::observe::{init_logging, LogConfig};
use dpulse_core::types::complex_ops;
use dpulse_core::{DeltaPulse, FftProcessor, PulseConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LogConfig::default());

    let config = PulseConfig::default();
    let pulse = DeltaPulse::new(config).generate()?;

    println!("Pulse length: {}", pulse.len());
    println!(
        "Max amplitude: {:.6}",
        complex_ops::peak_magnitude(&pulse)
    );

    println!("First 5 samples:");
    for (i, s) in pulse.iter().take(5).enumerate() {
        println!("  [{i}] {:.6} {:+.6}i", s.re, s.im);
    }

    let mid = pulse.len() / 2;
    println!("Center 5 samples:");
    for (i, s) in pulse[mid - 2..mid + 3].iter().enumerate() {
        println!("  [{}] {:.6} {:+.6}i", mid - 2 + i, s.re, s.im);
    }

    // Re-derive the spectrum the way a downstream analyzer would.
    let mut processor = FftProcessor::new(pulse.len());
    let spectrum = processor.fft(&pulse);
    let db = FftProcessor::power_spectrum_db(&spectrum);
    let max_db = db.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_db = db.iter().cloned().fold(f64::INFINITY, f64::min);
    println!("Spectrum span: {min_db:.1} dB .. {max_db:.1} dB");

    Ok(())
}
