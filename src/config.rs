use std::{fs, path::Path};

use anyhow::{Context, bail};
use serde::Deserialize;

/// Generation parameters, loaded from a JSON file with the upper-case key
/// scheme of the original config format (`START`/`DEST` are `[x, y]` pairs).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GenConfig {
    /// Grid width in cells.
    pub width: u16,
    /// Grid height in cells.
    pub height: u16,
    /// Probability of branching into an empty neighbour.
    pub con_prob: f64,
    /// Branching is forced whenever the pending queue is at or below this
    /// size, so the frontier does not die out early.
    pub loose_ends: usize,
    /// Minimum number of cells a tunnel skips over.
    pub min_tun_dis: u16,
    /// Maximum number of cells a tunnel skips over.
    pub max_tun_dis: u16,
    /// Entry cell.
    pub start: (u16, u16),
    /// Destination cell.
    pub dest: (u16, u16),
}

impl GenConfig {
    /// Read and validate a configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: GenConfig = serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants generation relies on. Generation must not run
    /// with a configuration that fails here.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(
                "grid dimensions must be positive, got {}x{}",
                self.width,
                self.height
            );
        }
        if !(0.0..=1.0).contains(&self.con_prob) {
            bail!("CON_PROB must lie in [0, 1], got {}", self.con_prob);
        }
        if self.min_tun_dis == 0 {
            bail!("MIN_TUN_DIS must be at least 1");
        }
        if self.min_tun_dis > self.max_tun_dis {
            bail!(
                "MIN_TUN_DIS ({}) must not exceed MAX_TUN_DIS ({})",
                self.min_tun_dis,
                self.max_tun_dis
            );
        }
        for (label, (x, y)) in [("START", self.start), ("DEST", self.dest)] {
            if x >= self.width || y >= self.height {
                bail!(
                    "{} ({}, {}) is outside the {}x{} grid",
                    label,
                    x,
                    y,
                    self.width,
                    self.height
                );
            }
        }
        Ok(())
    }
}
