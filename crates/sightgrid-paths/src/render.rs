//! Debug text dump of a visibility graph.

use std::fmt;

use sightgrid_core::Point;

use crate::graph::VisibilityGraph;

const NODE: char = 'o';
const BLOCKED: char = '~';
const EDGE: char = '.';
const EMPTY: char = ' ';

impl VisibilityGraph {
    /// One character per world point, rows top to bottom: `o` for a node,
    /// `~` for a blocked cell center, `.` next to a node towards each of its
    /// neighbours.
    pub fn render(&self) -> Vec<Vec<char>> {
        let cfg = *self.config();
        let (w, h) = (cfg.width as usize, cfg.height as usize);
        let mut canvas = vec![vec![EMPTY; w]; h];
        let mut put = |p: Point, ch: char| {
            if cfg.range().contains(p) {
                canvas[p.y as usize][p.x as usize] = ch;
            }
        };

        for center in cfg.cell_centers() {
            let Some(node) = self.node(center) else {
                put(center, BLOCKED);
                continue;
            };
            put(center, NODE);
            for &n in &node.neighbors {
                put(center + center.step_towards(n), EDGE);
            }
        }
        canvas
    }
}

impl fmt::Display for VisibilityGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map:")?;
        for row in self.render() {
            writeln!(f)?;
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        writeln!(f)
    }
}
