//! Walks one radial band's cells at several levels.
//!
//! Run with: cargo run --example band_queries

use arcgrid::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use std::f64::consts::TAU;

fn main() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    // 64 nodes on the circle; payloads are the node ids themselves.
    let angles: Vec<f64> = (0..64).map(|_| rng.random_range(0.0..TAU)).collect();
    let nodes: Vec<usize> = (0..angles.len()).collect();
    let payloads: Vec<usize> = nodes.clone();

    // Bin at level 4 (16 cells) for the band [2.0, 3.0).
    let index = AngularIndex::new(2.0, 3.0, 4, &nodes, &angles, &payloads);
    println!(
        "band [{}, {}): {} points at level {}",
        index.r_min(),
        index.r_max(),
        index.len(),
        index.target_level()
    );

    // The same index answers at every coarser level.
    let cells = DyadicCells;
    for level in 0..=index.target_level() {
        let first = cells.first_cell_of_level(level);
        let counts: Vec<usize> = (0..cells.num_cells_in_level(level))
            .map(|local| index.points_in_cell(first + local, level))
            .collect();
        println!("level {level}: per-cell counts {counts:?}");
    }

    // Contiguous iteration over one subtree, no index translation.
    let first = cells.first_cell_of_level(2);
    let quarter = index.cell_points(first, 2);
    println!("first quarter holds nodes {quarter:?}");
}
