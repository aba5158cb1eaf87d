pub mod frontier;
mod traverse;

use crate::{error::Result, maze::Maze, maze::cell::CellId};
use frontier::{Queue, Stack};

pub use traverse::{SearchTrace, search_with};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Path from `start` to `goal` along carved connections, or an empty path if
/// there is none. [`Solver::Bfs`] always yields a shortest path.
pub fn search(maze: &Maze, start: CellId, goal: CellId, solver: Solver) -> Result<Vec<CellId>> {
    Ok(search_traced(maze, start, goal, solver)?.path)
}

/// Like [`search`], also reporting the order in which cells were expanded.
pub fn search_traced(
    maze: &Maze,
    start: CellId,
    goal: CellId,
    solver: Solver,
) -> Result<SearchTrace> {
    match solver {
        Solver::Dfs => search_with(maze, start, goal, Stack::new()),
        Solver::Bfs => search_with(maze, start, goal, Queue::new()),
    }
}

/// Solves `maze` from its entrance (top left) to its exit (bottom right).
pub fn solve_maze(maze: &Maze, solver: Solver) -> Result<SearchTrace> {
    search_traced(maze, maze.entrance(), maze.exit(), solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    #[test]
    fn test_both_solvers_find_the_unique_path() {
        // In a perfect maze the simple path is unique, so DFS cannot do worse than BFS
        let maze = generate_maze(15, 10, Some(99)).unwrap();
        let dfs = solve_maze(&maze, Solver::Dfs).unwrap();
        let bfs = solve_maze(&maze, Solver::Bfs).unwrap();
        assert_eq!(dfs.path, bfs.path);
        assert_eq!(bfs.path.first(), Some(&maze.entrance()));
        assert_eq!(bfs.path.last(), Some(&maze.exit()));
    }

    #[test]
    fn test_path_steps_are_carved() {
        let maze = generate_maze(20, 20, Some(5)).unwrap();
        for solver in [Solver::Dfs, Solver::Bfs] {
            let path = search(&maze, CellId::new(19, 0), CellId::new(0, 19), solver).unwrap();
            assert!(!path.is_empty());
            for step in path.windows(2) {
                assert!(maze.is_carved(step[0], step[1]).unwrap());
            }
        }
    }

    #[test]
    fn test_solver_display() {
        assert_eq!(Solver::Dfs.to_string(), "Depth-First Search (DFS)");
        assert_eq!(Solver::Bfs.to_string(), "Breadth-First Search (BFS)");
    }
}
