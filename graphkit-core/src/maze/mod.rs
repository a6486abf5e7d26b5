//! Grid mazes carved with Kruskal's algorithm.
//!
//! Rooms form a rectangular grid and every pair of orthogonally adjacent
//! rooms is separated by a wall. Carving gives each wall a random weight and
//! knocks down the walls of the resulting minimum spanning tree, so every
//! room is reachable from every other room along exactly one route.

use std::collections::HashSet;

use rand::Rng;
use tracing::{info, instrument};

use crate::{
    error::{GraphError, MazeError},
    graph::{Edge, WeightedEdge, WeightedGraph},
};

/// Upper bound (exclusive) for the random weight assigned to each wall.
const MAX_WALL_WEIGHT: f64 = 10.0;

/// A cell of the maze grid.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Room {
    row: usize,
    col: usize,
}

impl Room {
    /// Creates the room at `row`, `col`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the room's row.
    #[must_use]
    #[rustfmt::skip]
    pub const fn row(&self) -> usize { self.row }

    /// Returns the room's column.
    #[must_use]
    #[rustfmt::skip]
    pub const fn col(&self) -> usize { self.col }
}

/// A wall between two adjacent rooms, weighted for carving.
pub type Wall = WeightedEdge<Room>;

/// A carved maze: the grid plus the set of open passages.
#[derive(Clone, Debug)]
pub struct Maze {
    width: usize,
    height: usize,
    passages: HashSet<(Room, Room)>,
}

/// Carves a `width` by `height` maze using walls weighted by `rng`.
///
/// # Errors
/// Returns [`MazeError::EmptyGrid`] when either dimension is zero.
///
/// # Examples
/// ```
/// use graphkit_core::maze::{Room, carve};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let maze = carve(4, 3, &mut rng)?;
/// assert_eq!(maze.passage_count(), 11);
/// let route = maze.solve(Room::new(0, 0), Room::new(2, 3))?;
/// assert_eq!(route.first(), Some(&Room::new(0, 0)));
/// assert_eq!(route.last(), Some(&Room::new(2, 3)));
/// # Ok::<(), graphkit_core::MazeError>(())
/// ```
#[instrument(name = "maze.carve", err, skip(rng))]
pub fn carve<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Maze, MazeError> {
    if width == 0 || height == 0 {
        return Err(MazeError::EmptyGrid { width, height });
    }

    let walls: Vec<Wall> = adjacent_pairs(width, height)
        .map(|(first, second)| Wall::new(first, second, rng.gen_range(0.0..MAX_WALL_WEIGHT)))
        .collect();
    let graph = WeightedGraph::new(grid_rooms(width, height), walls)?;
    let tree = graph.minimum_spanning_tree();

    let passages: HashSet<(Room, Room)> = tree
        .edges()
        .iter()
        .map(|wall| canonical(*wall.vertex1(), *wall.vertex2()))
        .collect();
    info!(passages = passages.len(), "maze carved");

    Ok(Maze {
        width,
        height,
        passages,
    })
}

impl Maze {
    /// Returns the number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub fn width(&self) -> usize { self.width }

    /// Returns the number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub fn height(&self) -> usize { self.height }

    /// Returns the number of knocked-down walls.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    /// Returns every room in row-major order.
    pub fn rooms(&self) -> impl Iterator<Item = Room> {
        grid_rooms(self.width, self.height)
    }

    /// Returns `true` when a passage joins `first` and `second`.
    #[must_use]
    pub fn is_open(&self, first: Room, second: Room) -> bool {
        self.passages.contains(&canonical(first, second))
    }

    /// Returns the rooms visited walking from `from` to `to`, both included.
    ///
    /// # Errors
    /// Returns [`MazeError::RoomOutOfBounds`] when either room lies outside
    /// the grid, or [`MazeError::Graph`] when no passage route exists.
    pub fn solve(&self, from: Room, to: Room) -> Result<Vec<Room>, MazeError> {
        self.check_bounds(from)?;
        self.check_bounds(to)?;

        let corridors = self
            .passages
            .iter()
            .map(|&(first, second)| WeightedEdge::new(first, second, 1.0));
        let graph = WeightedGraph::new(self.rooms(), corridors)?;
        let path = graph.shortest_path(&from, &to)?;

        let mut route = Vec::with_capacity(path.len() + 1);
        let mut current = from;
        route.push(current);
        for corridor in &path {
            current = *corridor
                .other_vertex(&current)
                .ok_or(GraphError::NoPathExists)?;
            route.push(current);
        }
        Ok(route)
    }

    /// Renders the maze as ASCII art, marking the rooms of `route` with `*`.
    #[must_use]
    pub fn render(&self, route: &[Room]) -> String {
        let marked: HashSet<Room> = route.iter().copied().collect();
        let mut out = String::new();
        for row in 0..self.height {
            out.push('+');
            for col in 0..self.width {
                let open_above =
                    row > 0 && self.is_open(Room::new(row - 1, col), Room::new(row, col));
                out.push_str(if open_above { "   +" } else { "---+" });
            }
            out.push('\n');

            for col in 0..self.width {
                let open_left =
                    col > 0 && self.is_open(Room::new(row, col - 1), Room::new(row, col));
                out.push(if open_left { ' ' } else { '|' });
                out.push_str(if marked.contains(&Room::new(row, col)) {
                    " * "
                } else {
                    "   "
                });
            }
            out.push_str("|\n");
        }
        out.push('+');
        for _ in 0..self.width {
            out.push_str("---+");
        }
        out.push('\n');
        out
    }

    fn check_bounds(&self, room: Room) -> Result<(), MazeError> {
        if room.row < self.height && room.col < self.width {
            Ok(())
        } else {
            Err(MazeError::RoomOutOfBounds {
                row: room.row,
                col: room.col,
            })
        }
    }
}

fn grid_rooms(width: usize, height: usize) -> impl Iterator<Item = Room> {
    (0..height).flat_map(move |row| (0..width).map(move |col| Room::new(row, col)))
}

fn adjacent_pairs(width: usize, height: usize) -> impl Iterator<Item = (Room, Room)> {
    grid_rooms(width, height).flat_map(move |room| {
        let east = (room.col + 1 < width).then(|| (room, Room::new(room.row, room.col + 1)));
        let south = (room.row + 1 < height).then(|| (room, Room::new(room.row + 1, room.col)));
        east.into_iter().chain(south)
    })
}

fn canonical(first: Room, second: Room) -> (Room, Room) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}
