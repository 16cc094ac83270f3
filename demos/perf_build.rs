//! Build-throughput demo over increasing point counts.
//!
//! Run with: cargo run --release --example perf_build

use arcgrid::AngularIndex;
use rand::Rng;
use rand::SeedableRng;
use std::f64::consts::TAU;
use std::time::Instant;

fn main() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for num_points in [10_000usize, 100_000, 1_000_000] {
        let angles: Vec<f64> = (0..num_points).map(|_| rng.random_range(0.0..TAU)).collect();
        let nodes: Vec<usize> = (0..angles.len()).collect();
        let payloads: Vec<usize> = nodes.clone();

        // Level chosen so cells stay in the same order of magnitude as points.
        let target_level = (num_points as f64).log2().floor() as u32;

        let start = Instant::now();
        let index = AngularIndex::new(0.0, 1.0, target_level, &nodes, &angles, &payloads);
        let elapsed = start.elapsed();

        println!(
            "{num_points:8} points, level {target_level:2}: built in {elapsed:.2?} ({:.1} Mpts/s)",
            num_points as f64 / elapsed.as_secs_f64() / 1e6
        );
        assert_eq!(index.len(), num_points);
    }
}
