//! Walk an agent across a map while its goal drifts, replanning each step.
//!
//! Run: cargo run --bin replan -- [MAP_FILE] [BLOCK_SIZE]
//! Set RUST_LOG=debug to see per-search statistics.

use std::error::Error;

use log::{info, warn};
use sightgrid_core::Point;
use sightgrid_demos::{Agent, DEFAULT_BLOCK_SIZE, load_map, pathfinder_for};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let map = load_map(args.first().map(String::as_str))?;
    let block_size = match args.get(1) {
        Some(s) => s.parse()?,
        None => DEFAULT_BLOCK_SIZE,
    };
    let pf = pathfinder_for(&map, block_size)?;
    println!("{pf}");

    let mut agent = Agent::new(Point::new(2, map.height() - 3));
    let mut goal = Point::new(map.width() - 13, map.height() - 3);
    for step in 0.. {
        if step % 4 == 3 && goal.x + 1 < map.width() {
            goal = goal.shift(1, 0);
        }
        if !agent.replan(&pf, goal) {
            warn!("no route from {} to {goal}", agent.pos);
            break;
        }
        info!("step {step}: at {}, {} waypoints to {goal}", agent.pos, agent.route.len());
        if !agent.advance() {
            info!("arrived at {goal} after {step} steps");
            break;
        }
    }
    Ok(())
}
