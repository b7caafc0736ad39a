//! 02 - Spinning Tesseract
//!
//! The simplest use of the view: a 4-cube spinning in all six planes,
//! printed as a rough ASCII plot for a handful of frames.
//!
//! This example demonstrates:
//! - Creating a PolytopeView
//! - Advancing it with an Animator
//! - Projecting frames to 2D
//!
//! Run with: `cargo run --example 02_spinning_tesseract`

use ndpoly_core::{Animator, PolytopeFamily, PolytopeView};

const WIDTH: usize = 60;
const HEIGHT: usize = 30;
/// Half-extent of the viewport in projected units
const HALF_VIEW: f64 = 175.0;

fn main() {
    env_logger::init();

    let mut view = match PolytopeView::new(PolytopeFamily::Cube, 4) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    let animator = Animator::new().with_base_speed(0.8);

    for frame_index in 0..5 {
        let frame = view.frame();
        println!("frame {} - {}", frame_index, frame.description);

        let mut grid = vec![vec![' '; WIDTH]; HEIGHT];
        for p in &frame.points {
            let col = ((p.x / HALF_VIEW + 1.0) * 0.5 * (WIDTH - 1) as f64).round() as usize;
            let row = ((1.0 - p.y / HALF_VIEW) * 0.5 * (HEIGHT - 1) as f64).round() as usize;
            if row < HEIGHT && col < WIDTH {
                grid[row][col] = 'o';
            }
        }
        for row in grid {
            println!("|{}|", row.into_iter().collect::<String>());
        }

        view.advance(&animator, 0.4);
    }
}
