use crate::{
    error::Result,
    generators::generate_maze,
    maze::{
        Maze,
        cell::{CellId, Direction},
    },
    solvers::{Solver, search},
};

/// Interactive single-step traversal of a maze.
pub struct GameState {
    /// The maze being played
    maze: Maze,
    /// Tracks where the player currently is
    current: CellId,
    /// Goal position
    goal: CellId,
}

impl GameState {
    /// Generate a fresh maze and place the player on its entrance.
    pub fn initialize(width: u16, height: u16, seed: Option<u64>) -> Result<Self> {
        Ok(GameState::new(generate_maze(width, height, seed)?))
    }

    /// Start at the top left cell with the goal at the bottom right.
    pub fn new(mut maze: Maze) -> Self {
        maze.clear_visited();
        let start = maze.entrance();
        let goal = maze.exit();
        // The entrance always exists, so this cannot fail
        maze.mark_visited(start).ok();
        GameState {
            maze,
            current: start,
            goal,
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn current(&self) -> CellId {
        self.current
    }

    pub fn goal(&self) -> CellId {
        self.goal
    }

    /// Check if the goal has been reached.
    pub fn goal_reached(&self) -> bool {
        self.current == self.goal
    }

    /// Number of distinct cells the player has stood on, start included.
    pub fn visited_count(&self) -> usize {
        self.maze.visited_count()
    }

    /// Attempt to move the player one cell in the specified direction.
    /// Returns the new position if no wall blocks the move, None otherwise.
    pub fn move_player(&mut self, direction: Direction) -> Option<CellId> {
        let new_pos = self.maze.open_neighbor(self.current, direction).ok()??;

        match self.maze.mark_visited(new_pos) {
            Ok(true) => tracing::debug!("[game] Moving to already visited cell at {}", new_pos),
            Ok(false) => tracing::debug!("[game] Moving to new cell at {}", new_pos),
            Err(_) => return None,
        }
        self.current = new_pos;

        if self.goal_reached() {
            tracing::info!("[game] Goal reached!");
        }
        Some(self.current)
    }

    /// Send the player back to the entrance and forget every visited cell.
    pub fn reset(&mut self) {
        self.maze.clear_visited();
        self.current = self.maze.entrance();
        self.maze.mark_visited(self.current).ok();
    }

    /// Path from the player's current cell to the goal.
    pub fn solve(&self, solver: Solver) -> Result<Vec<CellId>> {
        search(&self.maze, self.current, self.goal, solver)
    }
}
