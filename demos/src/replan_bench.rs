//! Time repeated replanning against an unchanged route.
//!
//! Run: cargo run --release --bin replan-bench -- [ITERATIONS] [BLOCK_SIZE]

use std::error::Error;
use std::hint::black_box;
use std::time::Instant;

use log::info;
use sightgrid_demos::{load_map, pathfinder_for};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let iterations: u32 = match args.first() {
        Some(s) => s.parse()?,
        None => 100,
    };
    let block_size = match args.get(1) {
        Some(s) => s.parse()?,
        None => 1,
    };

    let map = load_map(None)?;
    let pf = pathfinder_for(&map, block_size)?;
    let route = pf
        .find_path(2, 12, 37, 12)
        .ok_or("demo map has no route from (2, 12) to (37, 12)")?;

    let fresh = Instant::now();
    for _ in 0..iterations {
        black_box(pf.find_path(2, 12, 37, 12));
    }
    let fresh = fresh.elapsed();

    let update = Instant::now();
    for _ in 0..iterations {
        black_box(pf.find_path_update(2, 12, 37, 12, &route));
    }
    let update = update.elapsed();

    info!(
        "{iterations} iterations: find_path {:?}/call, find_path_update {:?}/call",
        fresh / iterations,
        update / iterations
    );
    Ok(())
}
