//! 01 - Polytope Table
//!
//! Prints vertex and edge counts for every family across the supported
//! dimensions, with the viewport scale and any approximation notes.
//!
//! Run with: `cargo run --example 01_polytope_table`

use ndpoly_math::{generate, planes, scale, Polytope, PolytopeFamily, MAX_DIMENSION, MIN_DIMENSION};

fn main() {
    env_logger::init();

    println!("{:>3}  {:<10} {:>8} {:>8} {:>7} {:>8}  note", "n", "family", "vertices", "edges", "planes", "scale");
    for n in MIN_DIMENSION..=MAX_DIMENSION {
        for family in PolytopeFamily::ALL {
            let g = generate(family, n);
            let note = if g.is_capped() { g.description() } else { String::new() };
            println!(
                "{:>3}  {:<10} {:>8} {:>8} {:>7} {:>8.2}  {}",
                n,
                family.name(),
                g.vertex_count(),
                g.edge_count(),
                planes(n).len(),
                scale(g.vertices()),
                note
            );
        }
    }
}
