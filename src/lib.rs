pub mod error;
pub mod game;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::generate_maze;
pub use maze::{Maze, cell::CellId, cell::Direction};
pub use solvers::{Solver, search};
