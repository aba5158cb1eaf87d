use std::fmt;

/// Identity of a cell: its row and column in the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    pub row: u16,
    pub col: u16,
}

impl CellId {
    pub const fn new(row: u16, col: u16) -> Self {
        CellId { row, col }
    }

    /// The coordinate one step away in `direction`.
    /// Returns `None` on underflow/overflow only; grid bounds are not checked here.
    pub fn step(self, direction: Direction) -> Option<CellId> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row.checked_add(1)?, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col.checked_add(1)?),
        };
        Some(CellId::new(row, col))
    }

    /// The direction leading from `self` to `other` if the two are orthogonally adjacent.
    pub fn direction_to(self, other: CellId) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == Some(other))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Index of this direction's neighbour slot in a [`Cell`].
    const fn slot(self) -> usize {
        self as usize
    }
}

/// A single cell of the grid.
///
/// Only the right and bottom walls are stored. The left wall of a cell is the
/// right wall of its left neighbour, and the top wall is the bottom wall of its
/// top neighbour. Sides without a neighbour are boundary walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    /// Neighbour identities, indexed by [`Direction::slot`]
    neighbors: [Option<CellId>; 4],
    pub(crate) wall_right: bool,
    pub(crate) wall_bottom: bool,
    /// Whether the interactive traveler has ever stood on this cell
    pub(crate) visited: bool,
}

impl Cell {
    /// A fully walled, unvisited cell.
    pub(crate) fn new(id: CellId, neighbors: [Option<CellId>; 4]) -> Self {
        Cell {
            id,
            neighbors,
            wall_right: true,
            wall_bottom: true,
            visited: false,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn neighbor(&self, direction: Direction) -> Option<CellId> {
        self.neighbors[direction.slot()]
    }

    /// All grid-adjacent cells, regardless of walls.
    pub fn neighbors(&self) -> impl Iterator<Item = CellId> + '_ {
        self.neighbors.iter().flatten().copied()
    }

    pub fn wall_right(&self) -> bool {
        self.wall_right
    }

    pub fn wall_bottom(&self) -> bool {
        self.wall_bottom
    }

    pub fn visited(&self) -> bool {
        self.visited
    }
}
