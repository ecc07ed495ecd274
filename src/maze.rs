//! Maze carving on a rectangular grid of rooms.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    AdjacencyListGraph,
    KruskalMinimumSpanningTreeFinder,
    MinimumSpanningTree,
    MinimumSpanningTreeFinder,
    WeightedEdge,
};

/// A cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    /// Column, counted from the left.
    pub x: usize,
    /// Row, counted from the top.
    pub y: usize,
}

/// The wall separating two adjacent rooms.
///
/// A wall is the same whichever order its rooms are given in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    room1: Room,
    room2: Room,
}

impl Room {
    /// The room at column `x`, row `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Room { x, y }
    }
}

impl Wall {
    /// The wall between `a` and `b`.
    pub fn new(a: Room, b: Room) -> Self {
        if a <= b {
            Wall { room1: a, room2: b }
        } else {
            Wall { room1: b, room2: a }
        }
    }

    /// The smaller of the two rooms.
    pub fn room1(&self) -> Room { self.room1 }

    /// The larger of the two rooms.
    pub fn room2(&self) -> Room { self.room2 }
}

/// A grid of rooms and the walls still standing between them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    width: usize,
    height: usize,
    rooms: Vec<Room>,
    walls: BTreeSet<Wall>,
}

impl Maze {
    /// A `width` × `height` grid with every wall between neighbouring
    /// rooms standing.
    pub fn grid(width: usize, height: usize) -> Self {
        let mut rooms = Vec::with_capacity(width * height);
        let mut walls = BTreeSet::new();

        for y in 0..height {
            for x in 0..width {
                let room = Room::new(x, y);
                rooms.push(room);
                if x + 1 < width {
                    walls.insert(Wall::new(room, Room::new(x + 1, y)));
                }
                if y + 1 < height {
                    walls.insert(Wall::new(room, Room::new(x, y + 1)));
                }
            }
        }

        Maze { width, height, rooms, walls }
    }

    /// The number of columns.
    pub fn width(&self) -> usize { self.width }

    /// The number of rows.
    pub fn height(&self) -> usize { self.height }

    /// All rooms, row by row.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// The walls still standing.
    pub fn walls(&self) -> &BTreeSet<Wall> {
        &self.walls
    }

    /// Is there a standing wall between `a` and `b`?
    pub fn has_wall_between(&self, a: Room, b: Room) -> bool {
        self.walls.contains(&Wall::new(a, b))
    }

    /// Knocks down the given walls, returning how many were standing.
    pub fn remove_walls(&mut self, walls: &BTreeSet<Wall>) -> usize {
        walls.iter().filter(|&wall| self.walls.remove(wall)).count()
    }
}

/// A strategy for deciding which walls of a maze to knock down.
pub trait MazeCarver {
    /// Picks the walls to remove from the given rooms and walls.
    fn choose_walls_to_remove(&mut self,
                              rooms: &[Room],
                              walls: &BTreeSet<Wall>)
                              -> BTreeSet<Wall>;

    /// Carves `maze` in place, returning the number of walls removed.
    fn carve(&mut self, maze: &mut Maze) -> usize {
        let chosen = self.choose_walls_to_remove(maze.rooms(), maze.walls());
        let removed = maze.remove_walls(&chosen);
        log::debug!("carved {} walls out of a {}x{} maze",
                    removed, maze.width(), maze.height());
        removed
    }
}

/// The graph a maze is carved from: rooms joined by their walls.
pub type MazeGraph = AdjacencyListGraph<Room, WeightedEdge<Room, Wall>>;

/// Carves a maze by giving every wall a random weight and removing the
/// walls of a minimum spanning tree over the rooms.
///
/// The result connects every room to every other along exactly one path.
///
/// # Examples
///
/// ```
/// use graph_algos::*;
///
/// let mut maze = Maze::grid(4, 3);
/// let mut carver = KruskalMazeCarver::with_seed(
///     KruskalMinimumSpanningTreeFinder::new(), 7);
///
/// // A spanning tree over 12 rooms has 11 edges.
/// assert_eq!(11, carver.carve(&mut maze));
/// ```
pub struct KruskalMazeCarver<F = KruskalMinimumSpanningTreeFinder> {
    finder: F,
    rng: StdRng,
}

impl<F> KruskalMazeCarver<F> {
    /// Creates a carver whose weights are seeded from the operating system.
    pub fn new(finder: F) -> Self {
        KruskalMazeCarver {
            finder,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a carver that carves the same maze for the same seed.
    pub fn with_seed(finder: F, seed: u64) -> Self {
        KruskalMazeCarver {
            finder,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<F: MinimumSpanningTreeFinder<MazeGraph>> MazeCarver for KruskalMazeCarver<F> {
    fn choose_walls_to_remove(&mut self,
                              rooms: &[Room],
                              walls: &BTreeSet<Wall>)
                              -> BTreeSet<Wall> {
        let mut graph = MazeGraph::new();
        for room in rooms {
            graph.add_vertex(*room);
        }
        for wall in walls {
            let weight = self.rng.random::<f64>();
            graph.add_undirected_edge(
                WeightedEdge::with_data(wall.room1, wall.room2, weight, *wall));
        }

        match self.finder.find_minimum_spanning_tree(&graph) {
            MinimumSpanningTree::Success(edges) =>
                edges.into_iter().map(WeightedEdge::into_data).collect(),
            MinimumSpanningTree::Failure => {
                log::warn!("rooms are not all joined by walls; nothing to carve");
                BTreeSet::new()
            }
        }
    }
}
