//! Benchmarks for frame length calculation and bit-stream construction.
//!
//! Run with: cargo bench --bench frame_benchmark

use canload_rs::{FrameLength, FrameVariant, Message, RngBitSource, build_frame_with, bus_load};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Benchmark result for a single operation
struct BenchResult {
    name: String,
    duration: Duration,
    iterations: u32,
}

impl BenchResult {
    fn avg_ns(&self) -> f64 {
        self.duration.as_secs_f64() * 1e9 / self.iterations as f64
    }
}

/// Run a benchmark function multiple times and measure average time
fn bench<F: FnMut()>(name: &str, iterations: u32, mut f: F) -> BenchResult {
    // Warmup
    f();

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let duration = start.elapsed();

    BenchResult {
        name: name.to_string(),
        duration,
        iterations,
    }
}

fn main() {
    println!("=== canload-rs Frame Benchmark ===\n");

    let variants = [
        (FrameVariant::ClassicStandard, 8usize),
        (FrameVariant::ClassicExtended, 8),
        (FrameVariant::FdStandard, 64),
        (FrameVariant::FdExtended, 64),
    ];

    let mut results = Vec::new();

    for (variant, payload) in variants {
        results.push(bench(
            &format!("FrameLength::compute {variant:?}/{payload}B"),
            1_000_000,
            || {
                let _ = std::hint::black_box(FrameLength::compute(variant, payload));
            },
        ));
    }

    let mut source = RngBitSource(StdRng::seed_from_u64(1));
    for (variant, payload) in variants {
        results.push(bench(
            &format!("build_frame_with {variant:?}/{payload}B"),
            10_000,
            || {
                let _ = std::hint::black_box(build_frame_with(variant, payload, &mut source));
            },
        ));
    }

    // A realistic message table, recomputed per keystroke by a UI
    let messages: Vec<Message> = (0u32..100)
        .map(|i| {
            Message::new(
                10.0 + f64::from(i),
                (i as usize) % 9,
                1 + i % 3,
                if i % 2 == 0 {
                    FrameVariant::ClassicStandard
                } else {
                    FrameVariant::ClassicExtended
                },
            )
        })
        .collect();
    results.push(bench("bus_load over 100 messages", 100_000, || {
        let _ = std::hint::black_box(bus_load(&messages, 1_000_000).unwrap());
    }));

    println!("Results:");
    for result in &results {
        println!("  {:50} {:>12.1} ns/iter", result.name, result.avg_ns());
    }
}
