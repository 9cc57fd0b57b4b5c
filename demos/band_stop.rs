//! Example: remove a band of frequencies from a noisy two-tone signal
//!
//! Builds one second of signal, removes bins 10-500 and prints the spectrum
//! peaks and the first few original/reconstructed samples side by side.
//!
//! Run with `RUST_LOG=debug cargo run --example band_stop` to see engine timings.

use spectral_edit::{GaussianNoise, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut session = Session::new(1000, 1.0)?;
    session.add_shift(1.0);
    session.add_noise(0.0, 1.0, 0.5, &mut GaussianNoise::from_entropy());
    session.add_sinusoid(1.0, 3.0, 0.0);
    session.add_sinusoid(3.0, 8.0, 5.0);

    let spectrum = session.analyze();
    println!("Spectrum ({} bins):", spectrum.bin_count());
    println!(
        "  Dominant bin: {} ({:.1} Hz)",
        spectrum.dominant_bin(),
        spectrum.bin_frequency(spectrum.dominant_bin())
    );
    println!("  Energy in bins 0-9:    {:.4}", spectrum.band_energy(0, 9));
    println!("  Energy in bins 10-500: {:.4}", spectrum.band_energy(10, 500));

    session.band_stop(10, 500)?;
    let original = session.samples().to_vec();
    let rebuilt = session.synthesize()?;

    println!("Reconstruction:");
    println!("  {:>8}  {:>10}  {:>10}", "time", "original", "filtered");
    for n in (0..original.len()).step_by(50) {
        println!(
            "  {:>8.3}  {:>10.4}  {:>10.4}",
            rebuilt.time()[n],
            original[n],
            rebuilt.samples()[n]
        );
    }

    Ok(())
}
