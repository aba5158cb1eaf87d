use std::time::Instant;

use mazewalk::{generate_maze, solvers::Solver, solvers::solve_maze};

/// Times maze generation and a breadth-first solve on the largest
/// interactive size, once per iteration.
fn main() -> std::io::Result<()> {
    let _log_guard = mazewalk::logging::init("mazewalk-profile.log");

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(10);

    for iter in 0..num_iters {
        let started = Instant::now();
        let maze = generate_maze(u8::MAX.into(), u8::MAX.into(), Some(iter))
            .map_err(std::io::Error::other)?;
        let generated = started.elapsed();

        let started = Instant::now();
        let trace = solve_maze(&maze, Solver::Bfs).map_err(std::io::Error::other)?;
        let solved = started.elapsed();

        tracing::info!(
            "[profile] iter {}: generate {:?}, solve {:?}, path {} cells",
            iter,
            generated,
            solved,
            trace.path.len()
        );
        println!("iter {iter}: generate {generated:?}, solve {solved:?}");
    }
    Ok(())
}
