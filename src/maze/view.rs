use crossterm::style::{Color, Stylize};
use std::{collections::HashSet, fmt};

use crate::maze::{Maze, cell::CellId};

/// The width of each cell body when rendered, in character widths.
pub const CELL_WIDTH: usize = 2;

/// Text view of a maze: `+--+` corners and walls, with optional path and
/// exploration overlays.
pub struct MazeView<'a> {
    maze: &'a Maze,
    path: HashSet<CellId>,
    explored: HashSet<CellId>,
    player: Option<CellId>,
    styled: bool,
}

impl<'a> MazeView<'a> {
    pub fn new(maze: &'a Maze) -> Self {
        MazeView {
            maze,
            path: HashSet::new(),
            explored: HashSet::new(),
            player: None,
            styled: false,
        }
    }

    pub fn with_path(mut self, path: &[CellId]) -> Self {
        self.path = path.iter().copied().collect();
        self
    }

    pub fn with_explored(mut self, explored: &[CellId]) -> Self {
        self.explored = explored.iter().copied().collect();
        self
    }

    /// Mark the traveler's current cell.
    pub fn with_player(mut self, player: CellId) -> Self {
        self.player = Some(player);
        self
    }

    /// Colour the cell bodies with terminal escape codes.
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    fn body(&self, cell: CellId) -> (&'static str, Color) {
        if self.player == Some(cell) {
            ("@ ", Color::Cyan)
        } else if cell == self.maze.entrance() {
            ("S ", Color::Green)
        } else if cell == self.maze.exit() {
            ("G ", Color::Red)
        } else if self.path.contains(&cell) {
            ("**", Color::Yellow)
        } else if self.explored.contains(&cell) {
            ("..", Color::Blue)
        } else if self.maze.grid()[cell].visited() {
            ("::", Color::Magenta)
        } else {
            ("  ", Color::Reset)
        }
    }
}

impl fmt::Display for MazeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.maze.grid();
        let horizontal = "-".repeat(CELL_WIDTH);
        let gap = " ".repeat(CELL_WIDTH);

        write!(f, "+")?;
        for _ in 0..grid.width() {
            write!(f, "{horizontal}+")?;
        }
        writeln!(f)?;

        for row in 0..grid.height() {
            write!(f, "|")?;
            for col in 0..grid.width() {
                let id = CellId::new(row, col);
                let (symbol, color) = self.body(id);
                #[cfg(debug_assertions)]
                {
                    use unicode_width::UnicodeWidthStr;
                    assert_eq!(
                        symbol.width(),
                        CELL_WIDTH,
                        "Each cell must occupy exactly two character widths."
                    );
                }
                if self.styled {
                    write!(f, "{}", symbol.with(color))?;
                } else {
                    write!(f, "{symbol}")?;
                }
                write!(f, "{}", if grid[id].wall_right() { "|" } else { " " })?;
            }
            writeln!(f)?;

            write!(f, "+")?;
            for col in 0..grid.width() {
                let wall = grid[CellId::new(row, col)].wall_bottom();
                write!(f, "{}+", if wall { &horizontal } else { &gap })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate_maze;

    #[test]
    fn test_single_cell_view() {
        let maze = generate_maze(1, 1, Some(0)).unwrap();
        // A single cell is both entrance and exit; the entrance wins
        assert_eq!(MazeView::new(&maze).to_string(), "+--+\n|S |\n+--+\n");
    }

    #[test]
    fn test_view_dimensions() {
        let maze = generate_maze(4, 3, Some(5)).unwrap();
        let text = MazeView::new(&maze).to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2 * 3 + 1);
        assert!(lines.iter().all(|l| l.len() == 4 * (CELL_WIDTH + 1) + 1));
        assert_eq!(lines[0], "+--+--+--+--+");
        assert_eq!(*lines.last().unwrap(), "+--+--+--+--+");
    }

    #[test]
    fn test_player_marker() {
        let maze = generate_maze(3, 1, Some(2)).unwrap();
        let text = MazeView::new(&maze)
            .with_player(CellId::new(0, 1))
            .to_string();
        assert_eq!(text, "+--+--+--+\n|S  @  G |\n+--+--+--+\n");
        // The player hides the entrance marker when standing on it
        let text = MazeView::new(&maze).with_player(maze.entrance()).to_string();
        assert!(text.starts_with("+--+--+--+\n|@  "));
    }

    #[test]
    fn test_path_overlay() {
        let maze = generate_maze(3, 1, Some(2)).unwrap();
        let path = [CellId::new(0, 0), CellId::new(0, 1), CellId::new(0, 2)];
        let text = MazeView::new(&maze).with_path(&path).to_string();
        // A one-row maze is a straight corridor: no walls between the bodies
        assert_eq!(text, "+--+--+--+\n|S  ** G |\n+--+--+--+\n");
        assert!(text.lines().all(|l| l.len() == 3 * (CELL_WIDTH + 1) + 1));
    }
}
