//! Disjoint-set union over the cells of a grid.
//!
//! Kruskal's builder uses it to tell whether an edge would close a cycle: two
//! cells are in the same component exactly when their representatives match.

use crate::{
    error::{MazeError, Result},
    maze::cell::CellId,
};

#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Representative link per cell (row-major); a root links to itself
    parent: Vec<usize>,
    rank: Vec<u8>,
    width: u16,
    height: u16,
}

impl UnionFind {
    /// Every cell of a `width` x `height` grid starts as its own component.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
            width,
            height,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn index_of(&self, cell: CellId) -> Result<usize> {
        if cell.row >= self.height || cell.col >= self.width {
            return Err(MazeError::UnknownCell(cell));
        }
        Ok(cell.row as usize * self.width as usize + cell.col as usize)
    }

    fn cell_at(&self, idx: usize) -> CellId {
        let width = self.width as usize;
        // Both fit in u16 since idx < width * height
        CellId::new((idx / width) as u16, (idx % width) as u16)
    }

    /// Follows representative links to the root, halving the path on the way.
    fn root(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Representative of the component containing `cell`.
    pub fn find(&mut self, cell: CellId) -> Result<CellId> {
        let idx = self.index_of(cell)?;
        let root = self.root(idx);
        Ok(self.cell_at(root))
    }

    pub fn same_set(&mut self, a: CellId, b: CellId) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Merges the components of `a` and `b`.
    /// Returns `false` if they were already the same component.
    pub fn union(&mut self, a: CellId, b: CellId) -> Result<bool> {
        let root_a = self.root(self.index_of(a)?);
        let root_b = self.root(self.index_of(b)?);

        if root_a == root_b {
            return Ok(false);
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_b] = root_a;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_a] = root_b;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_a] = root_b;
                self.rank[root_b] = self.rank[root_b].saturating_add(1);
            }
        }
        Ok(true)
    }
}
