use rand::{rngs::StdRng, seq::SliceRandom};

use crate::maze::{Direction, Grid};

/// Patch every cell the growth phase never reached.
///
/// Scans the grid repeatedly; each empty cell looks at its neighbours in a
/// freshly shuffled order and opens a reciprocal pair of connections to the
/// first settled, non-tunnel neighbour it finds. A cell whose eligible
/// neighbour only settles in a later pass is picked up then. Returns the
/// number of full-grid passes.
pub(super) fn fill_gaps(grid: &mut Grid, rng: &mut StdRng) -> usize {
    let mut sequence = Direction::ALL;
    let mut passes = 0;
    loop {
        passes += 1;
        let mut patched = 0usize;
        let mut unresolved = 0usize;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if !grid[(x, y)].empty {
                    continue;
                }
                sequence.shuffle(rng);
                let mut found = false;
                for dir in sequence {
                    let Some(neigh) = grid.step((x, y), dir) else {
                        continue;
                    };
                    // Tunnel cells keep their single deliberate opening;
                    // never patch into them.
                    if grid[neigh].empty || grid[neigh].tunnel {
                        continue;
                    }
                    grid[(x, y)].open(dir);
                    grid[(x, y)].empty = false;
                    grid[neigh].open(dir.opposite());
                    found = true;
                    break;
                }
                if found {
                    patched += 1;
                } else {
                    unresolved += 1;
                }
            }
        }
        if unresolved == 0 {
            break;
        }
        if patched == 0 {
            // No empty cell has a settled non-tunnel neighbour, so another
            // pass cannot make progress either.
            tracing::warn!("[repair] {} cells left unreachable", unresolved);
            break;
        }
        tracing::debug!(
            "[repair] pass {} patched {} cells, {} still empty",
            passes,
            patched,
            unresolved
        );
    }
    passes
}
