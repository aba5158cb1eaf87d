use crate::{error::Result, generators::Edge, maze::grid::Grid};

/// Clears the wall between the endpoints of every tree edge.
///
/// A right-neighbour edge clears `wall_right` of its left cell; a
/// bottom-neighbour edge clears `wall_bottom` of its top cell.
pub fn carve_walls(grid: &mut Grid, tree: &[Edge]) -> Result<()> {
    let mut removed = 0;
    for edge in tree {
        let (near, far) = edge.endpoints();
        if grid.remove_wall_between(near, far)? {
            removed += 1;
        }
    }
    tracing::debug!("[carve] removed {} of {} walls", removed, tree.len());
    Ok(())
}
