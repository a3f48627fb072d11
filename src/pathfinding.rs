// Copyright 2026 The sandbox-engine Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Grid-based pathfinding
//!
//! A* over an unbounded grid laid on the XZ plane; the Y axis is
//! ignored entirely. World positions quantize to square cells, obstacle
//! positions block the cell they fall in, and paths come back as
//! cell-center waypoints on the ground plane. Good enough to steer demo
//! NPCs around a handful of props.

use glam::Vec3;
use tracing::debug;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

type Cell = (i32, i32);

/// Open-set entry ordered for a min-heap on the f score
#[derive(Clone, Copy, PartialEq)]
struct OpenNode {
    f_score: f32,
    g_score: f32,
    cell: Cell,
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we pop the smallest f.
        other
            .f_score
            .partial_cmp(&self.f_score)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* pathfinder over an unbounded XZ grid
///
/// The grid is implicit: any cell not covered by an obstacle is
/// walkable, movement is 4-connected at unit cost per cell, and the
/// heuristic is the Manhattan distance. Because the grid has no edges,
/// a search toward an unreachable goal is cut off by an expansion
/// budget instead of running forever; a cut-off search reports "no
/// path" just like an exhausted one.
///
/// # Examples
///
/// ```
/// use sandbox_engine::pathfinding::GridPathfinder;
/// use glam::Vec3;
///
/// let pathfinder = GridPathfinder::new(1.0);
/// let path = pathfinder.find_path(
///     Vec3::new(0.5, 0.0, 0.5),
///     Vec3::new(3.5, 0.0, 0.5),
///     &[],
/// );
/// assert_eq!(path.len(), 4);
/// assert_eq!(path[0], Vec3::new(0.5, 0.0, 0.5));
/// ```
pub struct GridPathfinder {
    cell_size: f32,
    max_expansions: usize,
}

impl GridPathfinder {
    /// Default budget of expanded cells before a search gives up
    pub const DEFAULT_MAX_EXPANSIONS: usize = 10_000;

    /// Create a pathfinder with the given cell size in world units
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is not positive and finite.
    pub fn new(cell_size: f32) -> Self {
        assert!(
            cell_size > 0.0 && cell_size.is_finite(),
            "Cell size must be positive and finite"
        );
        GridPathfinder {
            cell_size,
            max_expansions: Self::DEFAULT_MAX_EXPANSIONS,
        }
    }

    /// Get the cell size in world units
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Set the cell size in world units
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is not positive and finite.
    pub fn set_cell_size(&mut self, cell_size: f32) {
        assert!(
            cell_size > 0.0 && cell_size.is_finite(),
            "Cell size must be positive and finite"
        );
        self.cell_size = cell_size;
    }

    /// Get the expansion budget
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    /// Set the expansion budget for unreachable-goal cutoff
    pub fn set_max_expansions(&mut self, max_expansions: usize) {
        self.max_expansions = max_expansions;
    }

    /// Find a path from `start` to `goal`, walking around `obstacles`
    ///
    /// Positions are taken on the XZ plane; each obstacle blocks the
    /// single cell its position quantizes into. The returned waypoints
    /// are cell centers at Y=0, ordered start to goal and including
    /// both endpoint cells. An empty vector means no path was found
    /// within the expansion budget.
    pub fn find_path(&self, start: Vec3, goal: Vec3, obstacles: &[Vec3]) -> Vec<Vec3> {
        let start_cell = self.world_to_cell(start);
        let goal_cell = self.world_to_cell(goal);
        if start_cell == goal_cell {
            return vec![self.cell_to_world(goal_cell)];
        }

        let blocked: HashSet<Cell> = obstacles
            .iter()
            .map(|position| self.world_to_cell(*position))
            .collect();

        let mut open = BinaryHeap::new();
        let mut g_scores: HashMap<Cell, f32> = HashMap::new();
        let mut parents: HashMap<Cell, Cell> = HashMap::new();

        g_scores.insert(start_cell, 0.0);
        open.push(OpenNode {
            f_score: heuristic(start_cell, goal_cell),
            g_score: 0.0,
            cell: start_cell,
        });

        let mut expansions = 0;
        while let Some(node) = open.pop() {
            if node.cell == goal_cell {
                return self.reconstruct(&parents, goal_cell);
            }
            // Stale heap entry for a cell already reached more cheaply.
            let best = g_scores.get(&node.cell).copied().unwrap_or(f32::INFINITY);
            if node.g_score > best {
                continue;
            }

            expansions += 1;
            if expansions > self.max_expansions {
                debug!(
                    ?start_cell,
                    ?goal_cell,
                    expansions = self.max_expansions,
                    "path search gave up"
                );
                return Vec::new();
            }

            let (x, z) = node.cell;
            for neighbor in [(x + 1, z), (x - 1, z), (x, z + 1), (x, z - 1)] {
                if blocked.contains(&neighbor) {
                    continue;
                }
                let tentative = node.g_score + 1.0;
                let known = g_scores.get(&neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative < known {
                    g_scores.insert(neighbor, tentative);
                    parents.insert(neighbor, node.cell);
                    open.push(OpenNode {
                        f_score: tentative + heuristic(neighbor, goal_cell),
                        g_score: tentative,
                        cell: neighbor,
                    });
                }
            }
        }

        Vec::new()
    }

    fn reconstruct(&self, parents: &HashMap<Cell, Cell>, goal: Cell) -> Vec<Vec3> {
        let mut cells = vec![goal];
        let mut current = goal;
        while let Some(&parent) = parents.get(&current) {
            cells.push(parent);
            current = parent;
        }
        cells.reverse();
        cells
            .into_iter()
            .map(|cell| self.cell_to_world(cell))
            .collect()
    }

    fn world_to_cell(&self, position: Vec3) -> Cell {
        (
            (position.x / self.cell_size).floor() as i32,
            (position.z / self.cell_size).floor() as i32,
        )
    }

    fn cell_to_world(&self, cell: Cell) -> Vec3 {
        Vec3::new(
            (cell.0 as f32 + 0.5) * self.cell_size,
            0.0,
            (cell.1 as f32 + 0.5) * self.cell_size,
        )
    }
}

impl Default for GridPathfinder {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn heuristic(from: Cell, to: Cell) -> f32 {
    ((from.0 - to.0).abs() + (from.1 - to.1).abs()) as f32
}
