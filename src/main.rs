use mazewalk::{
    CellId, Direction, Maze, game::GameState, generate_maze,
    maze::view::MazeView,
    solvers::{self, Solver},
};

fn main() -> std::io::Result<()> {
    let _log_guard = mazewalk::logging::init("mazewalk.log");

    let mut input = String::new();
    println!("Enter maze dimensions and an optional seed (width height [seed]):");
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let mut fields = input.split_whitespace();
    let dims = fields
        .by_ref()
        .take(2)
        .filter_map(|s| s.parse::<u16>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    }
    let (width, height) = (dims[0], dims[1]);

    let seed = match fields.next().map(str::parse::<u64>) {
        None => None,
        Some(Ok(seed)) => Some(seed),
        Some(Err(_)) => {
            eprintln!("The seed must be a non-negative integer.");
            return Ok(());
        }
    };

    let maze = match generate_maze(width, height, seed) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("{err}");
            return Ok(());
        }
    };

    println!("Select mode:");
    println!("1. Play (move with w/a/s/d, 'dfs' or 'bfs' for a hint, 'q' to quit)");
    println!("2. Solve");
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    match input.trim() {
        "1" => play(GameState::new(maze)),
        "2" => solve(&maze),
        _ => {
            eprintln!("Invalid selection.");
            Ok(())
        }
    }
}

/// Let the user walk the maze one cell per command until the goal or `q`.
fn play(mut game: GameState) -> std::io::Result<()> {
    let mut input = String::new();
    let mut hint: Vec<CellId> = Vec::new();
    loop {
        print!(
            "{}",
            MazeView::new(game.maze())
                .with_path(&hint)
                .with_player(game.current())
                .styled(true)
        );
        if game.goal_reached() {
            println!("Goal reached after visiting {} cells!", game.visited_count());
            return Ok(());
        }

        input.clear();
        if std::io::stdin().read_line(&mut input)? == 0 {
            return Ok(());
        }
        let direction = match input.trim() {
            "w" => Direction::Up,
            "s" => Direction::Down,
            "a" => Direction::Left,
            "d" => Direction::Right,
            "dfs" | "bfs" => {
                let solver = if input.trim() == "dfs" { Solver::Dfs } else { Solver::Bfs };
                hint = game.solve(solver).map_err(std::io::Error::other)?;
                continue;
            }
            "q" => return Ok(()),
            other => {
                eprintln!("Unknown command: {other}");
                continue;
            }
        };
        if game.move_player(direction).is_none() {
            println!("A wall blocks the way.");
        }
    }
}

fn solve(maze: &Maze) -> std::io::Result<()> {
    // Let user select the algorithm
    println!("Select maze solving algorithm:");
    println!("1. {}", Solver::Dfs);
    println!("2. {}", Solver::Bfs);
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let solver = match input.trim() {
        "1" => Solver::Dfs,
        "2" => Solver::Bfs,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    let trace = solvers::solve_maze(maze, solver).map_err(std::io::Error::other)?;
    print!(
        "{}",
        MazeView::new(maze)
            .with_explored(&trace.explored)
            .with_path(&trace.path)
            .styled(true)
    );

    if trace.path.is_empty() {
        println!("No path found to the goal.");
    } else {
        println!(
            "Maze solved! Path of {} cells, {} cells explored.",
            trace.path.len(),
            trace.explored.len()
        );
    }
    Ok(())
}
