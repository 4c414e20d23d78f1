//! Timing comparison of serial and parallel evolution

use std::time::Instant;

use bounded_life::domain::{Algorithm, Density, Grid, generate_random};

fn benchmark(algorithm: Algorithm, size: usize, iterations: u32) -> anyhow::Result<f64> {
    let mut grid: Grid = generate_random(size, Density::ONE_THIRD)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid = algorithm.advance(&grid);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> anyhow::Result<()> {
    println!("=== Bounded Life Benchmark ===\n");

    let sizes = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Algorithm::Serial, size, iterations)?;
        let parallel_ms = benchmark(Algorithm::Parallel, size, iterations)?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    Ok(())
}
