use std::collections::BinaryHeap;

use chase_core::{Cell, Obstacle};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::neighbors::GridModel;
use crate::path::reconstruct_path;
use crate::traits::AstarPather;

/// Per-search bookkeeping for one discovered cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    /// Predecessor on the best known route; `None` for the start cell.
    pub came_from: Option<Cell>,
    /// Cost of the best known route from the start.
    pub g: i32,
    /// `g` plus the heuristic estimate to the goal.
    pub f: i32,
}

struct Slot {
    node: SearchNode,
    /// Order in which the cell first entered the open set.
    seq: u32,
}

/// Open-set entry ordered by `f`, then by discovery order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenRef {
    f: i32,
    seq: u32,
    cell: Cell,
}

impl Ord for OpenRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest f, and among
        // equal f the earliest discovered cell.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

impl PartialOrd for OpenRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute a route from `start` to `goal` with A*, every step costing 1.
///
/// Returns the full path including both endpoints, `[start]` when
/// `start == goal`, or an empty vector when the goal cannot be reached.
///
/// Among open cells with equal `f` the one discovered first is expanded,
/// and a cell's predecessor is only replaced by a strictly cheaper one.
/// Together these make the returned path fully determined by the inputs.
/// The start cell itself is never checked for passability.
pub fn astar_path<P: AstarPather>(pather: &P, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut nodes: FxHashMap<Cell, Slot> = FxHashMap::default();
    let mut closed: FxHashSet<Cell> = FxHashSet::default();
    let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();

    let f = pather.estimate(start, goal);
    nodes.insert(
        start,
        Slot {
            node: SearchNode {
                came_from: None,
                g: 0,
                f,
            },
            seq: 0,
        },
    );
    open.push(OpenRef { f, seq: 0, cell: start });
    let mut next_seq: u32 = 1;

    let mut nbuf = Vec::with_capacity(4);

    while let Some(entry) = open.pop() {
        let current = entry.cell;
        // Skip finalised cells and entries superseded by a cheaper one.
        if closed.contains(&current) {
            continue;
        }
        let Some(slot) = nodes.get(&current) else {
            continue;
        };
        if slot.node.f != entry.f {
            continue;
        }

        if current == goal {
            return reconstruct_path(goal, |c| nodes.get(&c).and_then(|s| s.node.came_from));
        }

        let current_g = slot.node.g;
        closed.insert(current);

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            if closed.contains(&n) {
                continue;
            }
            let tentative_g = current_g + 1;

            let seq = match nodes.get(&n) {
                None => {
                    let s = next_seq;
                    next_seq += 1;
                    s
                }
                // Equal cost keeps the first predecessor found.
                Some(s) if tentative_g >= s.node.g => continue,
                Some(s) => s.seq,
            };

            let f = tentative_g + pather.estimate(n, goal);
            nodes.insert(
                n,
                Slot {
                    node: SearchNode {
                        came_from: Some(current),
                        g: tentative_g,
                        f,
                    },
                    seq,
                },
            );
            open.push(OpenRef { f, seq, cell: n });
        }
    }

    Vec::new()
}

/// Find a route between two grid-aligned cells in an arena of
/// `max_width × max_height` coordinate units blocked by `obstacles`.
///
/// Nothing is cached between calls; the obstacle set is read afresh each
/// time. See [`astar_path`] for the result contract.
pub fn find_path(
    start: Cell,
    goal: Cell,
    obstacles: &[Obstacle],
    max_width: i32,
    max_height: i32,
    cell_size: i32,
) -> Vec<Cell> {
    let grid = GridModel::new(obstacles, max_width, max_height, cell_size);
    astar_path(&grid, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::neighbors;
    use rand::rngs::SmallRng;
    use rand::{RngExt, SeedableRng};

    const C: i32 = 40;

    fn assert_sound(path: &[Cell], obstacles: &[Obstacle], w: i32, h: i32) {
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1], C), "{} -> {}", pair[0], pair[1]);
        }
        for c in path.iter().skip(1) {
            assert!(c.x >= 0 && c.x < w && c.y >= 0 && c.y < h, "{c} out of bounds");
            assert!(!obstacles.iter().any(|o| o.contains(*c)), "{c} is blocked");
        }
    }

    /// Straightforward open-list version with a linear minimum scan.
    fn linear_scan_path(
        start: Cell,
        goal: Cell,
        obstacles: &[Obstacle],
        w: i32,
        h: i32,
    ) -> Vec<Cell> {
        let heur = |a: Cell| (a.x - goal.x).abs() + (a.y - goal.y).abs();
        let mut open = vec![start];
        let mut closed = std::collections::HashSet::new();
        let mut came_from = std::collections::HashMap::new();
        let mut g = std::collections::HashMap::new();
        let mut f = std::collections::HashMap::new();
        g.insert(start, 0);
        f.insert(start, heur(start));

        while !open.is_empty() {
            let mut best = 0;
            for i in 1..open.len() {
                if f[&open[i]] < f[&open[best]] {
                    best = i;
                }
            }
            let current = open[best];
            if current == goal {
                return reconstruct_path(goal, |c| came_from.get(&c).copied());
            }
            open.remove(best);
            closed.insert(current);
            for n in neighbors(current, obstacles, w, h, C) {
                if closed.contains(&n) {
                    continue;
                }
                let t = g[&current] + 1;
                if !open.contains(&n) {
                    open.push(n);
                } else if t >= g[&n] {
                    continue;
                }
                came_from.insert(n, current);
                g.insert(n, t);
                f.insert(n, t + heur(n));
            }
        }
        Vec::new()
    }

    fn random_walls(rng: &mut SmallRng, w: i32, h: i32, density: f64) -> Vec<Obstacle> {
        let mut walls = Vec::new();
        for x in (0..w).step_by(C as usize) {
            for y in (0..h).step_by(C as usize) {
                if rng.random_bool(density) {
                    walls.push(Obstacle::new(x, y, C, C));
                }
            }
        }
        walls
    }

    #[test]
    fn open_grid_scenario() {
        let path = find_path(Cell::ZERO, Cell::new(120, 80), &[], 400, 400, C);
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(40, 0),
                Cell::new(80, 0),
                Cell::new(120, 0),
                Cell::new(120, 40),
                Cell::new(120, 80),
            ]
        );
    }

    #[test]
    fn open_grid_paths_are_manhattan_optimal() {
        let cases = [
            (Cell::ZERO, Cell::new(360, 360)),
            (Cell::new(360, 0), Cell::new(0, 360)),
            (Cell::new(200, 120), Cell::new(40, 280)),
            (Cell::new(80, 320), Cell::new(80, 0)),
        ];
        for (s, g) in cases {
            let path = find_path(s, g, &[], 400, 400, C);
            let expected = 1 + ((s.x - g.x).abs() + (s.y - g.y).abs()) / C;
            assert_eq!(path.len() as i32, expected, "{s} -> {g}");
            assert_eq!(path.first(), Some(&s));
            assert_eq!(path.last(), Some(&g));
            assert_sound(&path, &[], 400, 400);
        }
    }

    #[test]
    fn start_equals_goal() {
        let p = Cell::new(80, 120);
        assert_eq!(find_path(p, p, &[], 400, 400, C), vec![p]);
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let goal = Cell::new(120, 120);
        let ring: Vec<Obstacle> = [
            (80, 80),
            (120, 80),
            (160, 80),
            (80, 120),
            (160, 120),
            (80, 160),
            (120, 160),
            (160, 160),
        ]
        .into_iter()
        .map(|(x, y)| Obstacle::new(x, y, C, C))
        .collect();
        assert!(find_path(Cell::ZERO, goal, &ring, 400, 400, C).is_empty());
    }

    #[test]
    fn full_height_wall_has_no_path() {
        let wall = [Obstacle::new(40, 0, 40, 400)];
        assert!(find_path(Cell::ZERO, Cell::new(80, 0), &wall, 120, 400, C).is_empty());
    }

    #[test]
    fn wall_with_gap_forces_detour() {
        let wall = [Obstacle::new(40, 0, 40, 360)];
        let path = find_path(Cell::ZERO, Cell::new(80, 0), &wall, 120, 400, C);
        assert!(path.len() > 3);
        assert_eq!(path.first(), Some(&Cell::ZERO));
        assert_eq!(path.last(), Some(&Cell::new(80, 0)));
        assert!(path.contains(&Cell::new(40, 360)));
        assert_sound(&path, &wall, 120, 400);
    }

    #[test]
    fn start_inside_obstacle_is_exempt() {
        let walls = [Obstacle::new(40, 0, 40, 40)];
        let path = find_path(Cell::new(40, 0), Cell::new(120, 0), &walls, 200, 200, C);
        assert_eq!(
            path,
            vec![Cell::new(40, 0), Cell::new(80, 0), Cell::new(120, 0)]
        );
    }

    #[test]
    fn goal_out_of_bounds_has_no_path() {
        assert!(find_path(Cell::ZERO, Cell::new(400, 0), &[], 400, 400, C).is_empty());
    }

    #[test]
    fn blocked_goal_has_no_path() {
        let walls = [Obstacle::new(80, 80, 40, 40)];
        assert!(find_path(Cell::ZERO, Cell::new(80, 80), &walls, 400, 400, C).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let mut rng = SmallRng::seed_from_u64(7);
        let walls = random_walls(&mut rng, 400, 400, 0.25);
        let a = find_path(Cell::ZERO, Cell::new(360, 360), &walls, 400, 400, C);
        let b = find_path(Cell::ZERO, Cell::new(360, 360), &walls, 400, 400, C);
        assert_eq!(a, b);
    }

    #[test]
    fn heap_matches_linear_scan_on_random_arenas() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..60 {
            let walls = random_walls(&mut rng, 480, 320, 0.3);
            let start = Cell::new(rng.random_range(0..12) * C, rng.random_range(0..8) * C);
            let goal = Cell::new(rng.random_range(0..12) * C, rng.random_range(0..8) * C);
            let fast = find_path(start, goal, &walls, 480, 320, C);
            let slow = linear_scan_path(start, goal, &walls, 480, 320);
            assert_eq!(fast, slow, "{start} -> {goal}");
            if !fast.is_empty() {
                assert_eq!(fast.first(), Some(&start));
                assert_eq!(fast.last(), Some(&goal));
                assert_sound(&fast, &walls, 480, 320);
            }
        }
    }
}
