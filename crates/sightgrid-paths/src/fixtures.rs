//! Shared test fixtures: the reference obstacle map and route checks.

use sightgrid_core::Point;

use crate::{CharMap, GridConfig, Path, VisibilityGraph};

/// 50×15 map with a long overhang and a second wall, `*` blocked.
pub(crate) const FIXTURE: &str = "\
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

pub(crate) fn fixture(block_size: i32) -> (CharMap, VisibilityGraph) {
    let map = CharMap::parse(FIXTURE).unwrap();
    let cfg = GridConfig::new(map.width(), map.height(), block_size);
    let graph = VisibilityGraph::build(cfg, &map).unwrap();
    (map, graph)
}

pub(crate) fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Sample each segment at 11 evenly spaced points (only the endpoints when
/// it is short) and fail on the first blocked sample.
pub(crate) fn assert_walkable(map: &CharMap, waypoints: &[Point]) {
    for w in waypoints.windows(2) {
        let (a, b) = (w[0], w[1]);
        let samples: Vec<Point> = if a.distance(b) > 2.0 {
            (0..=10)
                .map(|t| {
                    let lerp = |u: i32, v: i32| {
                        ((f64::from(u) * f64::from(10 - t) + f64::from(v) * f64::from(t)) / 10.0)
                            .round() as i32
                    };
                    p(lerp(a.x, b.x), lerp(a.y, b.y))
                })
                .collect()
        } else {
            vec![a, b]
        };
        for s in samples {
            assert!(!map.blocked(s), "segment {a} -> {b} crosses blocked {s}");
        }
    }
}

/// `path` runs from `start` to `goal`, costs at most `max_cost` and never
/// crosses a blocked cell of `map`.
pub(crate) fn assert_route(map: &CharMap, path: &Path, start: Point, goal: Point, max_cost: f64) {
    let wps = path.to_vec();
    assert_eq!(wps.first(), Some(&start));
    assert_eq!(wps.last(), Some(&goal));
    assert!(path.cost() <= max_cost, "cost {} > {max_cost}: {wps:?}", path.cost());
    assert_walkable(map, &wps);
}
