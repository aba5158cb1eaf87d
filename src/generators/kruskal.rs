use rand::Rng;
use std::ops::Range;

use crate::{
    error::Result,
    generators::union_find::UnionFind,
    maze::{cell::CellId, cell::Direction, grid::Grid},
};

/// Edge weights are drawn uniformly from this range. It is small enough that
/// ties are common; the stable sort breaks them by insertion order.
pub const EDGE_WEIGHT_RANGE: Range<u32> = 0..50;

/// Weighted edge between a cell and its right or bottom neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The left or top cell
    near: CellId,
    /// The right or bottom cell
    far: CellId,
    weight: u32,
}

impl Edge {
    pub fn new(near: CellId, far: CellId, weight: u32) -> Self {
        Edge { near, far, weight }
    }

    pub fn endpoints(&self) -> (CellId, CellId) {
        (self.near, self.far)
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// The endpoint opposite `cell`, or `None` if `cell` is not an endpoint.
    pub fn other(&self, cell: CellId) -> Option<CellId> {
        if cell == self.near {
            Some(self.far)
        } else if cell == self.far {
            Some(self.near)
        } else {
            None
        }
    }
}

/// Number of candidate edges in a `width` x `height` grid.
pub fn edge_count(width: u16, height: u16) -> usize {
    let (w, h) = (width as usize, height as usize);
    (w * h * 2).saturating_sub(w + h)
}

/// One edge per adjacent cell pair with an independent random weight.
/// Row-major order, each cell contributing its right edge before its bottom edge.
pub fn edge_list<R: Rng>(grid: &Grid, rng: &mut R) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(edge_count(grid.width(), grid.height()));
    for cell in grid.cells() {
        for direction in [Direction::Right, Direction::Down] {
            if let Some(neighbor) = cell.neighbor(direction) {
                edges.push(Edge::new(
                    cell.id(),
                    neighbor,
                    rng.random_range(EDGE_WEIGHT_RANGE),
                ));
            }
        }
    }
    edges
}

/// The selected tree edges plus, per cell, the tree edges touching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    crossed: Vec<Vec<Edge>>,
}

impl SpanningTree {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Tree edges touching the cell at row-major index `idx`.
    pub fn crossed(&self, idx: usize) -> &[Edge] {
        self.crossed.get(idx).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Kruskal's algorithm: sort `edges` by weight (stable), then keep every edge
/// whose endpoints are not yet in the same component.
pub fn build_spanning_tree(grid: &Grid, mut edges: Vec<Edge>) -> Result<SpanningTree> {
    edges.sort_by_key(Edge::weight);

    let target = grid.cell_count() - 1;
    let mut uf = UnionFind::new(grid.width(), grid.height());
    let mut tree = Vec::with_capacity(target);

    for edge in edges {
        if tree.len() >= target {
            break;
        }
        let (a, b) = edge.endpoints();
        if uf.same_set(a, b)? {
            continue;
        }
        uf.union(a, b)?;
        tree.push(edge);
    }

    if tree.len() < target {
        tracing::warn!(
            "[kruskal] edge list exhausted with {} of {} tree edges selected",
            tree.len(),
            target
        );
    }

    let mut crossed = vec![Vec::new(); grid.cell_count()];
    for edge in &tree {
        let (a, b) = edge.endpoints();
        crossed[grid.ravel_index(a)?].push(*edge);
        crossed[grid.ravel_index(b)?].push(*edge);
    }

    tracing::debug!(
        "[kruskal] selected {} tree edges for a {}x{} grid",
        tree.len(),
        grid.width(),
        grid.height()
    );
    Ok(SpanningTree {
        edges: tree,
        crossed,
    })
}

/// Randomly weights every edge of `grid` and builds the minimum spanning tree.
pub fn randomized_kruskal<R: Rng>(grid: &Grid, rng: &mut R) -> Result<SpanningTree> {
    let edges = edge_list(grid, rng);
    build_spanning_tree(grid, edges)
}
