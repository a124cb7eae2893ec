//! Shared setup for the demo binaries: a sample world and an agent that
//! walks a route while its goal drifts.

use std::error::Error;
use std::fs;

use log::info;
use sightgrid_core::Point;
use sightgrid_paths::{CharMap, Pathfinder};

/// Two walls that force a detour over the top of the map. `*` is blocked.
pub const DEMO_MAP: &str = "\
..................................................
..................................................
..................................................
.....*************************....................
.....*************************....................
.....*****............********....................
.....*****............********....................
.....*****............********....................
......................********************........
......................********************........
......................********************........
......................********************........
......................********....................
......................********....................
......................********....................";

pub const DEFAULT_BLOCK_SIZE: i32 = 5;

/// Load the map at `path`, or the built-in map when no path is given.
pub fn load_map(path: Option<&str>) -> Result<CharMap, Box<dyn Error>> {
    let map = match path {
        Some(p) => {
            info!("loading map from {p}");
            CharMap::parse(&fs::read_to_string(p)?)?
        }
        None => CharMap::parse(DEMO_MAP)?,
    };
    Ok(map)
}

/// Build a pathfinder covering the whole map.
pub fn pathfinder_for(map: &CharMap, block_size: i32) -> Result<Pathfinder, Box<dyn Error>> {
    let pf = Pathfinder::with_size(map.width(), map.height(), block_size, map)?;
    info!(
        "graph: {} nodes, {} edges (block size {block_size})",
        pf.graph().node_count(),
        pf.graph().edge_count()
    );
    Ok(pf)
}

/// An agent following a route, replanning every step.
pub struct Agent {
    pub pos: Point,
    pub route: Vec<Point>,
}

impl Agent {
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            route: Vec::new(),
        }
    }

    /// Replan towards `goal` from the current position, reusing the
    /// current route. Returns `false` if no route exists.
    pub fn replan(&mut self, pf: &Pathfinder, goal: Point) -> bool {
        match pf.find_path_update(self.pos.x, self.pos.y, goal.x, goal.y, &self.route) {
            Some(route) => {
                self.route = route;
                true
            }
            None => {
                self.route.clear();
                false
            }
        }
    }

    /// Move to the next waypoint. Returns `false` once the route is done.
    pub fn advance(&mut self) -> bool {
        let Some(i) = self.route.iter().position(|&w| w == self.pos) else {
            return false;
        };
        match self.route.get(i + 1) {
            Some(&next) => {
                self.pos = next;
                true
            }
            None => false,
        }
    }
}
