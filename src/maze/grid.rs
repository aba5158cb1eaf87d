use crate::{
    error::{MazeError, Result},
    maze::cell::{Cell, CellId, Direction},
};

/// Rectangular array of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Builds a fully walled grid with four-directional adjacency.
    ///
    /// Fails with [`MazeError::InvalidDimension`] if either dimension is zero.
    pub fn build(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let in_bounds = |c: &CellId| c.row < height && c.col < width;
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| CellId::new(row, col)))
            .map(|id| {
                let neighbors = Direction::ALL.map(|d| id.step(d).filter(in_bounds));
                Cell::new(id, neighbors)
            })
            .collect();
        Ok(Grid {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: CellId) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub(crate) fn ravel_index(&self, cell: CellId) -> Result<usize> {
        if !self.contains(cell) {
            return Err(MazeError::UnknownCell(cell));
        }
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        Ok(cell.row as usize * self.width as usize + cell.col as usize)
    }

    pub fn cell(&self, id: CellId) -> Result<&Cell> {
        let idx = self.ravel_index(id)?;
        Ok(&self.cells[idx])
    }

    pub(crate) fn cell_mut(&mut self, id: CellId) -> Result<&mut Cell> {
        let idx = self.ravel_index(id)?;
        Ok(&mut self.cells[idx])
    }

    /// Iterates cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    pub fn neighbor(&self, cell: CellId, direction: Direction) -> Result<Option<CellId>> {
        Ok(self.cell(cell)?.neighbor(direction))
    }

    /// Whether a wall separates `cell` from whatever lies in `direction`.
    /// Boundary sides always report a wall.
    pub fn wall_state(&self, cell: CellId, direction: Direction) -> Result<bool> {
        let current = self.cell(cell)?;
        let wall = match direction {
            Direction::Right => current.wall_right,
            Direction::Down => current.wall_bottom,
            Direction::Left => current
                .neighbor(Direction::Left)
                .is_none_or(|left| self[left].wall_right),
            Direction::Up => current
                .neighbor(Direction::Up)
                .is_none_or(|top| self[top].wall_bottom),
        };
        Ok(wall)
    }

    /// Removes the wall between two adjacent cells, in either order.
    ///
    /// Returns `true` if a wall was removed, `false` if the cells were already connected.
    pub fn remove_wall_between(&mut self, a: CellId, b: CellId) -> Result<bool> {
        self.ravel_index(a)?;
        self.ravel_index(b)?;
        let direction = a
            .direction_to(b)
            .ok_or(MazeError::NotAdjacent { from: a, to: b })?;
        // Normalize to the cell that owns the wall: the left or top one
        let (owner, owns_right) = match direction {
            Direction::Right => (a, true),
            Direction::Left => (b, true),
            Direction::Down => (a, false),
            Direction::Up => (b, false),
        };
        let cell = self.cell_mut(owner)?;
        let wall = if owns_right {
            &mut cell.wall_right
        } else {
            &mut cell.wall_bottom
        };
        let removed = *wall;
        *wall = false;
        Ok(removed)
    }
}

impl std::ops::Index<CellId> for Grid {
    type Output = Cell;

    /// Panics if `index` lies outside the grid. Use [`Grid::cell`] for a checked lookup.
    fn index(&self, index: CellId) -> &Self::Output {
        &self.cells[index.row as usize * self.width as usize + index.col as usize]
    }
}
