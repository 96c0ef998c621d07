//! Compute and print the bus load of a message configuration.
//!
//! Run with: cargo run --example busload [config.json]

use canload_rs::{BusConfig, Result, bus_load};

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => BusConfig::load_from_file(&path)?,
        None => BusConfig::default(),
    };

    println!(
        "{} messages at {} bit/s\n",
        config.messages.len(),
        config.baud_rate
    );
    println!(
        "{:>12} {:>10} {:>8} {:>18} {:>12}",
        "freq (Hz)", "bytes", "frames", "variant", "bits min..max"
    );
    for message in &config.messages {
        let len = canload_rs::FrameLength::compute(message.variant, message.payload_bytes);
        println!(
            "{:>12} {:>10} {:>8} {:>18} {:>8}..{}",
            message.frequency_hz,
            message.payload_bytes,
            message.frames_per_period,
            format!("{:?}", message.variant),
            len.min_bits,
            len.max_bits
        );
    }

    let load = bus_load(&config.messages, config.baud_rate)?;
    println!(
        "\nBus load: {:.2}% .. {:.2}% (avg {:.2}%)",
        load.min_percent,
        load.max_percent,
        load.avg_percent()
    );
    Ok(())
}
