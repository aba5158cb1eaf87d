use crate::{
    error::Result,
    maze::{Maze, cell::CellId, grid::Grid},
    solvers::frontier::Frontier,
};

/// Result of a traversal: the start-to-goal path and the order in which cells
/// were expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTrace {
    /// Empty when the goal is unreachable
    pub path: Vec<CellId>,
    pub explored: Vec<CellId>,
}

/// Generic graph search over the carved connections of `maze`.
///
/// Each cell records the cell it was first discovered from; the path is
/// rebuilt by walking those backpointers back from the goal. All bookkeeping
/// lives in this call, so concurrent searches of one maze never interfere.
pub fn search_with<F: Frontier<CellId>>(
    maze: &Maze,
    start: CellId,
    goal: CellId,
    mut frontier: F,
) -> Result<SearchTrace> {
    let grid = maze.grid();
    let start_idx = grid.ravel_index(start)?;
    grid.ravel_index(goal)?;

    let mut discovered_from: Vec<Option<CellId>> = vec![None; grid.cell_count()];
    let mut discovered = vec![false; grid.cell_count()];
    let mut expanded = vec![false; grid.cell_count()];
    let mut explored = Vec::new();

    discovered[start_idx] = true;
    frontier.add(start);

    while let Some(current) = frontier.remove() {
        if current == goal {
            explored.push(current);
            let path = reconstruct_path(grid, &discovered_from, goal)?;
            tracing::debug!(
                "[search] reached {} from {} after expanding {} cells, path length {}",
                goal,
                start,
                explored.len(),
                path.len()
            );
            return Ok(SearchTrace { path, explored });
        }

        let idx = grid.ravel_index(current)?;
        if expanded[idx] {
            continue;
        }
        expanded[idx] = true;
        explored.push(current);

        // Only carved connections are followed, never raw adjacency
        for neighbor in maze.carved_neighbors(current)? {
            let neighbor_idx = grid.ravel_index(neighbor)?;
            if !discovered[neighbor_idx] {
                discovered[neighbor_idx] = true;
                discovered_from[neighbor_idx] = Some(current);
                frontier.add(neighbor);
            }
        }
    }

    tracing::warn!(
        "[search] {} is unreachable from {} after expanding {} cells",
        goal,
        start,
        explored.len()
    );
    Ok(SearchTrace {
        path: Vec::new(),
        explored,
    })
}

/// Follows backpointers from `goal` until a cell without one (the start).
fn reconstruct_path(
    grid: &Grid,
    discovered_from: &[Option<CellId>],
    goal: CellId,
) -> Result<Vec<CellId>> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(previous) = discovered_from[grid.ravel_index(current)?] {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::MazeError,
        generators::{Edge, build_spanning_tree, carve_walls},
        solvers::frontier::{Queue, Stack},
    };

    /// A maze carved along the given tree edges instead of a random one.
    fn maze_from_edges(width: u16, height: u16, edges: &[(CellId, CellId)]) -> Maze {
        let mut grid = Grid::build(width, height).unwrap();
        let edges = edges.iter().map(|&(a, b)| Edge::new(a, b, 0)).collect();
        let tree = build_spanning_tree(&grid, edges).unwrap();
        carve_walls(&mut grid, tree.edges()).unwrap();
        Maze::from_parts(grid, tree)
    }

    #[test]
    fn test_corridor_paths_agree() {
        let cells = (0..6).map(|col| CellId::new(0, col)).collect::<Vec<_>>();
        let edges = cells.windows(2).map(|w| (w[0], w[1])).collect::<Vec<_>>();
        let maze = maze_from_edges(6, 1, &edges);

        let start = cells[0];
        let goal = cells[5];
        let dfs = search_with(&maze, start, goal, Stack::new()).unwrap();
        let bfs = search_with(&maze, start, goal, Queue::new()).unwrap();
        assert_eq!(dfs.path, cells);
        assert_eq!(bfs.path, cells);
    }

    #[test]
    fn test_search_to_self() {
        let maze = maze_from_edges(2, 1, &[(CellId::new(0, 0), CellId::new(0, 1))]);
        let cell = CellId::new(0, 1);
        let trace = search_with(&maze, cell, cell, Queue::new()).unwrap();
        assert_eq!(trace.path, vec![cell]);
        assert_eq!(trace.explored, vec![cell]);
    }

    #[test]
    fn test_search_ignores_uncarved_adjacency() {
        // 2x2 with a missing link: (0,0)-(0,1)-(1,1) carved, (1,0) isolated
        let (a, b, d) = (CellId::new(0, 0), CellId::new(0, 1), CellId::new(1, 1));
        let maze = maze_from_edges(2, 2, &[(a, b), (b, d)]);
        let isolated = CellId::new(1, 0);

        let trace = search_with(&maze, a, d, Queue::new()).unwrap();
        assert_eq!(trace.path, vec![a, b, d]);

        // (1,0) is grid-adjacent to both a and d but carved to neither
        let trace = search_with(&maze, a, isolated, Stack::new()).unwrap();
        assert!(trace.path.is_empty());
        assert!(!trace.explored.contains(&isolated));
    }

    #[test]
    fn test_bfs_expands_level_by_level() {
        // A plus-shaped tree centred on (1,1)
        let center = CellId::new(1, 1);
        let arms = [
            CellId::new(0, 1),
            CellId::new(1, 0),
            CellId::new(1, 2),
            CellId::new(2, 1),
        ];
        let mut edges = arms.iter().map(|&arm| (arm, center)).collect::<Vec<_>>();
        edges.extend([
            (CellId::new(0, 0), CellId::new(0, 1)),
            (CellId::new(0, 1), CellId::new(0, 2)),
            (CellId::new(2, 0), CellId::new(2, 1)),
            (CellId::new(2, 1), CellId::new(2, 2)),
        ]);
        let maze = maze_from_edges(3, 3, &edges);

        let trace = search_with(&maze, center, CellId::new(2, 2), Queue::new()).unwrap();
        assert_eq!(trace.explored[0], center);
        let mut first_ring = trace.explored[1..5].to_vec();
        first_ring.sort();
        let mut expected = arms.to_vec();
        expected.sort();
        assert_eq!(first_ring, expected);
        assert_eq!(
            trace.path,
            vec![center, CellId::new(2, 1), CellId::new(2, 2)]
        );
    }

    #[test]
    fn test_unknown_endpoints() {
        let maze = maze_from_edges(2, 1, &[(CellId::new(0, 0), CellId::new(0, 1))]);
        let outside = CellId::new(5, 5);
        assert_eq!(
            search_with(&maze, outside, CellId::new(0, 0), Queue::new()),
            Err(MazeError::UnknownCell(outside))
        );
        assert_eq!(
            search_with(&maze, CellId::new(0, 0), outside, Stack::new()),
            Err(MazeError::UnknownCell(outside))
        );
    }
}
