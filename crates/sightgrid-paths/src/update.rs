use log::trace;
use sightgrid_core::Point;

use crate::frontier::Frontier;
use crate::graph::VisibilityGraph;
use crate::path::Path;

impl VisibilityGraph {
    /// Replan from `start` to `goal`, reusing the still-relevant tail of a
    /// previously computed path.
    ///
    /// Waypoints of `prior` are dropped while their distance to `start`
    /// keeps shrinking. From the closest one onwards the tail is grafted
    /// onto `start` one waypoint at a time, and every partial graft is
    /// queued, so the search can pick whichever graft point is cheapest.
    /// With nothing to graft this is a fresh [`find_path`](Self::find_path).
    ///
    /// If the grafted search finds nothing, a fresh search from `start` is
    /// run, so replanning never loses a route a fresh search would find.
    pub fn find_path_update(&self, start: Point, goal: Point, prior: &[Point]) -> Option<Path> {
        let mut frontier = Frontier::new(goal);
        let grafted = self.graft(&mut frontier, start, prior);
        if grafted == 0 {
            return self.find_path(start, goal);
        }
        trace!("replanning {start} -> {goal} from {grafted} grafts of a {}-point path", prior.len());

        let found = self.run_search(frontier, goal);
        if found.is_none() {
            trace!("grafts of the prior path lead nowhere, searching {start} -> {goal} afresh");
            return self.find_path(start, goal);
        }
        found
    }

    /// Queue `start` + every prefix of the reusable tail of `prior`.
    /// Returns how many paths were queued.
    fn graft(&self, frontier: &mut Frontier, start: Point, prior: &[Point]) -> usize {
        let Some(closest) = closest_before_receding(start, prior) else {
            return 0;
        };

        let mut candidate = Path::from_point(start);
        let mut queued = 0;
        for &w in &prior[closest..] {
            if w == start {
                continue;
            }
            candidate.push(w);
            frontier.push(candidate.clone());
            queued += 1;
        }
        queued
    }
}

/// Index of the last waypoint of the leading run whose distance to `start`
/// does not increase, provided some later waypoint is farther away again.
///
/// `None` when the distances never increase, as for an empty or
/// single-point path, or one whose waypoints only get closer to `start`.
fn closest_before_receding(start: Point, prior: &[Point]) -> Option<usize> {
    prior
        .windows(2)
        .position(|w| w[1].distance(start) > w[0].distance(start))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::GridConfig;
    use crate::fixtures::{assert_route, fixture, p};

    fn prior_route() -> Vec<Point> {
        [
            (2, 12),
            (2, 7),
            (2, 2),
            (7, 2),
            (12, 2),
            (17, 2),
            (22, 2),
            (27, 2),
            (32, 2),
            (37, 2),
            (42, 2),
            (42, 7),
            (42, 12),
            (37, 12),
        ]
        .into_iter()
        .map(Point::from)
        .collect()
    }

    #[test]
    fn closest_waypoint_detection() {
        let route = prior_route();
        assert_eq!(closest_before_receding(p(2, 12), &route), Some(0));
        assert_eq!(closest_before_receding(p(0, 12), &route), Some(0));
        assert_eq!(closest_before_receding(p(22, 2), &route), Some(6));
        // (2, 12) is 35.0 away, (2, 7) already 35.36.
        assert_eq!(closest_before_receding(p(37, 12), &route), Some(0));
        // Every waypoint closer than the last.
        let approaching = [p(2, 2), p(7, 2), p(12, 2), p(17, 2)];
        assert_eq!(closest_before_receding(p(20, 2), &approaching), None);
        assert_eq!(closest_before_receding(p(0, 0), &[]), None);
        assert_eq!(closest_before_receding(p(0, 0), &[p(4, 4)]), None);
    }

    #[test]
    fn unchanged_request_keeps_route() {
        let (map, g) = fixture(5);
        let path = g.find_path_update(p(2, 12), p(37, 12), &prior_route()).unwrap();
        assert_route(&map, &path, p(2, 12), p(37, 12), 64.0);
    }

    #[test]
    fn moved_goal() {
        let (map, g) = fixture(5);
        let path = g.find_path_update(p(2, 12), p(39, 12), &prior_route()).unwrap();
        assert_route(&map, &path, p(2, 12), p(39, 12), 64.0);
    }

    #[test]
    fn moved_start() {
        let (map, g) = fixture(5);
        let path = g.find_path_update(p(0, 12), p(37, 12), &prior_route()).unwrap();
        assert_route(&map, &path, p(0, 12), p(37, 12), 66.0);
        assert_eq!(path.to_vec()[1], p(2, 12));
    }

    #[test]
    fn drops_walked_prefix() {
        let (map, g) = fixture(5);
        let path = g.find_path_update(p(22, 2), p(37, 12), &prior_route()).unwrap();
        assert_route(&map, &path, p(22, 2), p(37, 12), 43.0);
        let wps = path.to_vec();
        assert!(!wps[1..].contains(&p(2, 2)), "{wps:?}");
    }

    #[test]
    fn unit_blocks_reuse_own_result() {
        let (map, g) = fixture(1);
        let prior = g.find_path(p(2, 12), p(37, 12)).unwrap().to_vec();
        let cases = [
            (p(2, 12), p(37, 12), 64.0),
            (p(2, 12), p(39, 12), 64.0),
            (p(0, 12), p(37, 12), 66.0),
            (p(22, 2), p(37, 12), 34.0),
        ];
        for (start, goal, max_cost) in cases {
            let path = g.find_path_update(start, goal, &prior).unwrap();
            assert_route(&map, &path, start, goal, max_cost);
        }
    }

    #[test]
    fn empty_prior_matches_fresh_search() {
        let (_, g) = fixture(5);
        let fresh = g.find_path(p(2, 12), p(37, 12)).unwrap();
        let updated = g.find_path_update(p(2, 12), p(37, 12), &[]).unwrap();
        assert_eq!(fresh.to_vec(), updated.to_vec());
        assert_eq!(fresh.cost(), updated.cost());
    }

    #[test]
    fn falls_back_when_grafts_are_dead_ends() {
        let g = VisibilityGraph::build(GridConfig::new(10, 10, 2), &|_: Point| false).unwrap();
        // Neither waypoint is a node, so the grafts cannot be expanded.
        let prior = [p(0, 0), p(4, 0)];
        let path = g.find_path_update(p(0, 0), p(9, 9), &prior).unwrap();
        let wps = path.to_vec();
        assert_eq!(wps.first(), Some(&p(0, 0)));
        assert_eq!(wps.last(), Some(&p(9, 9)));
    }

    #[test]
    fn unreachable_goal_stays_unreachable() {
        let g = VisibilityGraph::build(GridConfig::new(10, 10, 2), &|q: Point| q.x == 5).unwrap();
        let prior = [p(0, 0), p(1, 1), p(3, 3)];
        assert!(g.find_path_update(p(0, 0), p(9, 9), &prior).is_none());
    }

    #[test]
    fn never_worse_reachability_than_fresh_search() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..40 {
            let w: i32 = rng.random_range(5..30);
            let h: i32 = rng.random_range(5..30);
            let bs: i32 = rng.random_range(1..6);
            let cells: Vec<bool> = (0..w * h).map(|_| rng.random_range(0..10) < 3).collect();
            let blocked = |q: Point| cells[(q.y * w + q.x) as usize];
            let g = VisibilityGraph::build(GridConfig::new(w, h, bs), &blocked).unwrap();

            for _ in 0..5 {
                let start = p(rng.random_range(0..w), rng.random_range(0..h));
                let goal = p(rng.random_range(0..w), rng.random_range(0..h));

                // Agent advancing along its own route.
                if let Some(route) = g.find_path(start, goal) {
                    let wps = route.to_vec();
                    for &here in &wps[1..] {
                        let updated = g.find_path_update(here, goal, &wps);
                        match updated {
                            Some(path) => {
                                let got = path.to_vec();
                                assert_eq!(got.first(), Some(&here));
                                assert_eq!(got.last(), Some(&goal));
                            }
                            None => assert!(g.find_path(here, goal).is_none(), "{here} -> {goal}"),
                        }
                    }
                }

                // Arbitrary, unrelated prior paths.
                let n = rng.random_range(0..7);
                let prior: Vec<Point> = (0..n)
                    .map(|_| p(rng.random_range(0..w), rng.random_range(0..h)))
                    .collect();
                if g.find_path(start, goal).is_some() {
                    assert!(g.find_path_update(start, goal, &prior).is_some());
                }
            }
        }
    }
}
