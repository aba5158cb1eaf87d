use rand::{SeedableRng, rngs::StdRng};

pub mod carve;
pub mod kruskal;
pub mod union_find;

pub use carve::carve_walls;
pub use kruskal::{
    EDGE_WEIGHT_RANGE, Edge, SpanningTree, build_spanning_tree, edge_list, randomized_kruskal,
};

use crate::{
    error::Result,
    maze::{Maze, grid::Grid},
};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze: a fully walled grid carved along a randomized
/// minimum spanning tree.
///
/// The same `seed` and dimensions always produce the same maze. `None` seeds
/// from the operating system.
pub fn generate_maze(width: u16, height: u16, seed: Option<u64>) -> Result<Maze> {
    let mut grid = Grid::build(width, height)?;
    let mut rng = get_rng(seed);

    let tree = randomized_kruskal(&grid, &mut rng)?;
    carve_walls(&mut grid, tree.edges())?;

    tracing::info!(
        "[generate] carved a {}x{} maze with {} connections (seed: {:?})",
        width,
        height,
        tree.edges().len(),
        seed
    );
    Ok(Maze::from_parts(grid, tree))
}
