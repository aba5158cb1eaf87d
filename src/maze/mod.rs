pub mod cell;
pub mod grid;
pub mod view;

use crate::{
    error::Result,
    generators::{Edge, SpanningTree},
};
use cell::{CellId, Direction};
use grid::Grid;

/// A carved grid together with the spanning tree that carved it.
///
/// Walls never change once a `Maze` exists; only the traveler's `visited`
/// flags are mutable.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    /// Tree edges in selection order, indexed per cell as well
    tree: SpanningTree,
}

impl Maze {
    /// Assembles a maze from a grid whose walls have already been carved along `tree`.
    pub(crate) fn from_parts(grid: Grid, tree: SpanningTree) -> Self {
        Maze { grid, tree }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Top-left cell.
    pub fn entrance(&self) -> CellId {
        CellId::new(0, 0)
    }

    /// Bottom-right cell.
    pub fn exit(&self) -> CellId {
        CellId::new(self.height() - 1, self.width() - 1)
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.grid.contains(cell)
    }

    pub fn wall_state(&self, cell: CellId, direction: Direction) -> Result<bool> {
        self.grid.wall_state(cell, direction)
    }

    pub fn tree_edges(&self) -> &[Edge] {
        self.tree.edges()
    }

    /// Number of wall-free connections between adjacent cells.
    pub fn carved_connection_count(&self) -> usize {
        self.grid
            .cells()
            .map(|c| usize::from(!c.wall_right()) + usize::from(!c.wall_bottom()))
            .sum()
    }

    /// Tree edges touching `cell`.
    pub fn crossed_edges(&self, cell: CellId) -> Result<&[Edge]> {
        let idx = self.grid.ravel_index(cell)?;
        Ok(self.tree.crossed(idx))
    }

    /// Cells reachable from `cell` in one step through a carved connection.
    pub fn carved_neighbors(&self, cell: CellId) -> Result<impl Iterator<Item = CellId> + '_> {
        Ok(self
            .crossed_edges(cell)?
            .iter()
            .filter_map(move |edge| edge.other(cell)))
    }

    pub fn is_carved(&self, a: CellId, b: CellId) -> Result<bool> {
        self.grid.ravel_index(b)?;
        Ok(self.carved_neighbors(a)?.any(|n| n == b))
    }

    /// The neighbour in `direction` if no wall stands in the way.
    pub fn open_neighbor(&self, cell: CellId, direction: Direction) -> Result<Option<CellId>> {
        if self.grid.wall_state(cell, direction)? {
            return Ok(None);
        }
        self.grid.neighbor(cell, direction)
    }

    /// Sets the `visited` flag of `cell`, returning its previous value.
    pub fn mark_visited(&mut self, cell: CellId) -> Result<bool> {
        let cell = self.grid.cell_mut(cell)?;
        Ok(std::mem::replace(&mut cell.visited, true))
    }

    pub fn visited_count(&self) -> usize {
        self.grid.cells().filter(|c| c.visited()).count()
    }

    pub fn clear_visited(&mut self) {
        self.grid.cells_mut().for_each(|c| c.visited = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    #[test]
    fn test_entrance_and_exit() {
        let maze = generate_maze(5, 3, Some(1)).unwrap();
        assert_eq!(maze.entrance(), CellId::new(0, 0));
        assert_eq!(maze.exit(), CellId::new(2, 4));
    }

    #[test]
    fn test_carved_count_matches_tree() {
        let maze = generate_maze(6, 4, Some(7)).unwrap();
        assert_eq!(maze.tree_edges().len(), 23);
        assert_eq!(maze.carved_connection_count(), 23);
    }

    #[test]
    fn test_crossed_edges_index_tree() {
        let maze = generate_maze(7, 5, Some(13)).unwrap();
        let mut degree_sum = 0;
        for cell in maze.grid().cells() {
            let crossed = maze.crossed_edges(cell.id()).unwrap();
            assert!(!crossed.is_empty());
            for edge in crossed {
                assert!(edge.other(cell.id()).is_some());
                assert!(maze.tree_edges().contains(edge));
            }
            degree_sum += crossed.len();
        }
        assert_eq!(degree_sum, 2 * maze.tree_edges().len());
    }

    #[test]
    fn test_walls_agree_with_carved_edges() {
        let maze = generate_maze(5, 5, Some(3)).unwrap();
        for cell in maze.grid().cells() {
            for direction in Direction::ALL {
                let Some(neighbor) = cell.neighbor(direction) else {
                    assert!(maze.wall_state(cell.id(), direction).unwrap());
                    continue;
                };
                let carved = maze.is_carved(cell.id(), neighbor).unwrap();
                assert_eq!(maze.wall_state(cell.id(), direction).unwrap(), !carved);
            }
        }
    }

    #[test]
    fn test_open_neighbor_respects_walls() {
        let maze = generate_maze(4, 4, Some(11)).unwrap();
        for cell in maze.grid().cells() {
            let open = Direction::ALL
                .into_iter()
                .filter_map(|d| maze.open_neighbor(cell.id(), d).unwrap())
                .collect::<Vec<_>>();
            let mut carved = maze.carved_neighbors(cell.id()).unwrap().collect::<Vec<_>>();
            let mut open_sorted = open.clone();
            open_sorted.sort();
            carved.sort();
            assert_eq!(open_sorted, carved);
        }
    }

    #[test]
    fn test_visited_flags() {
        let mut maze = generate_maze(3, 3, Some(0)).unwrap();
        assert_eq!(maze.visited_count(), 0);
        assert!(!maze.mark_visited(CellId::new(1, 1)).unwrap());
        assert!(maze.mark_visited(CellId::new(1, 1)).unwrap());
        assert_eq!(maze.visited_count(), 1);
        maze.clear_visited();
        assert_eq!(maze.visited_count(), 0);
        assert!(maze.mark_visited(CellId::new(3, 0)).is_err());
    }
}
