use rand::{Rng, rngs::StdRng};

use super::Carver;
use crate::maze::{Direction, Grid};

impl Carver<'_> {
    /// Attempt to carve one long-range shortcut, triggered by a join from
    /// `coord` towards `dir`. The search walks the opposite way: it skips a
    /// random `MIN_TUN_DIS..=MAX_TUN_DIS` stretch, then probes up to
    /// `MAX_TUN_DIS` further cells. The first unqueued empty cell becomes
    /// the tunnel exit candidate; the next one commits the tunnel and is
    /// enqueued normally. Any obstruction in between resets the candidate.
    ///
    /// Returns true if a tunnel was committed. Failure mutates nothing and
    /// is a normal outcome, not an error.
    pub(super) fn try_tunnel(
        &mut self,
        grid: &mut Grid,
        rng: &mut StdRng,
        coord: (u16, u16),
        dir: Direction,
    ) -> bool {
        // At most one tunnel may touch any row or column.
        let (x, y) = coord;
        let row_taken = (0..grid.width()).any(|i| grid[(i, y)].tunnel);
        let col_taken = (0..grid.height()).any(|j| grid[(x, j)].tunnel);
        if row_taken || col_taken {
            return false;
        }

        let back = dir.opposite();
        let skipped = rng.random_range(self.config.min_tun_dis..=self.config.max_tun_dis) as u32;

        let mut candidate: Option<(u16, u16)> = None;
        for step in 1..=self.config.max_tun_dis as u32 {
            let Some(pos) = grid.offset(coord, back, skipped + step) else {
                break;
            };
            let probe = grid[pos];
            if !probe.empty || probe.queued {
                candidate = None;
                continue;
            }
            match candidate {
                None => candidate = Some(pos),
                Some(exit) => {
                    // The cell past the exit is settled through the normal
                    // queue; the exit itself is claimed for the tunnel and
                    // opened towards it.
                    grid[pos].queued = true;
                    self.stack.push(pos);
                    grid[exit].empty = false;
                    grid[exit].tunnel = true;
                    grid[exit].open(back);
                    grid[coord].tunnel = true;
                    self.tunnels.push((coord, exit));
                    tracing::debug!("[carve] tunnel from {:?} to {:?}", coord, exit);
                    return true;
                }
            }
        }
        false
    }
}
