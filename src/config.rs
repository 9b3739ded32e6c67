//! Per-variant tuning. The full and mini games share the engine and differ
//! only in the values here.

use serde::Deserialize;
use serde::de::Error as _;

use crate::model::{BlockKind, BlockSpec, GridSize};

/// How empty cells get filled.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Population {
    /// Chance that an empty cell receives a block at all.
    pub density: f64,
    /// Relative weights over the catalog, in catalog order.
    pub weights: [f64; 4],
    /// Chance a drawn kind is kept; a rejected draw leaves the cell empty.
    #[serde(default = "Population::accept_all")]
    pub acceptance: [f64; 4],
}

impl Population {
    fn accept_all() -> [f64; 4] {
        [1.0; 4]
    }

    pub fn weighted(density: f64, weights: [f64; 4]) -> Self {
        Self {
            density,
            weights,
            acceptance: Self::accept_all(),
        }
    }

    pub fn uniform(density: f64) -> Self {
        Self::weighted(density, [1.0; 4])
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GameConfig {
    pub grid: GridSize,
    /// One spec per kind, in catalog order.
    pub catalog: [BlockSpec; 4],
    /// Used when the grid is (re)created.
    pub initial: Population,
    /// Used on start and for respawns.
    pub refill: Population,
    /// Delay before a mined cell refills; `None` disables respawning.
    #[serde(default)]
    pub respawn_delay_ms: Option<u64>,
    /// Clicking an empty cell while stopped places the selected block.
    #[serde(default)]
    pub build_mode: bool,
    /// localStorage key for the high score; `None` keeps it in memory only.
    #[serde(default)]
    pub storage_key: Option<String>,
}

fn spec(points: u64, hits: u32, color: &str) -> BlockSpec {
    BlockSpec {
        points,
        hits,
        color: color.to_string(),
    }
}

impl GameConfig {
    pub const HIGH_SCORE_KEY: &'static str = "minecraftHighScore";
    /// Largest accepted grid side.
    pub const MAX_SIDE: u32 = 64;

    /// The 10x10 game page variant.
    pub fn full() -> Self {
        let mut initial = Population::uniform(0.5);
        initial.acceptance[BlockKind::Diamond.index()] = 0.1;
        Self {
            grid: GridSize {
                width: 10,
                height: 10,
            },
            catalog: [
                spec(10, 1, "#5DBB63"),
                spec(15, 2, "#8B5A2B"),
                spec(20, 3, "#7D7D7D"),
                spec(50, 5, "#7EC8E3"),
            ],
            initial,
            refill: Population::uniform(0.4),
            respawn_delay_ms: None,
            build_mode: true,
            storage_key: Some(Self::HIGH_SCORE_KEY.to_string()),
        }
    }

    /// The 6x6 home page variant.
    pub fn mini() -> Self {
        let weights = [0.4, 0.3, 0.2, 0.1];
        Self {
            grid: GridSize {
                width: 6,
                height: 6,
            },
            catalog: [
                spec(10, 1, "#5DBB63"),
                spec(15, 1, "#8B5A2B"),
                spec(20, 2, "#7D7D7D"),
                spec(50, 3, "#7EC8E3"),
            ],
            initial: Population::weighted(0.6, weights),
            refill: Population::weighted(1.0, weights),
            respawn_delay_ms: Some(500),
            build_mode: false,
            storage_key: None,
        }
    }

    /// Parses a JSON config. Thresholds below 1 are raised to 1; grids with
    /// a zero side or a side over [`GameConfig::MAX_SIDE`] are rejected.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: GameConfig = serde_json::from_str(raw)?;
        let side = 1..=Self::MAX_SIDE;
        if !side.contains(&cfg.grid.width) || !side.contains(&cfg.grid.height) {
            return Err(serde_json::Error::custom(format!(
                "grid {}x{} outside 1..={} per side",
                cfg.grid.width,
                cfg.grid.height,
                Self::MAX_SIDE
            )));
        }
        for s in cfg.catalog.iter_mut() {
            s.hits = s.hits.max(1);
        }
        Ok(cfg)
    }

    pub fn spec(&self, kind: BlockKind) -> &BlockSpec {
        &self.catalog[kind.index()]
    }

    pub fn threshold(&self, kind: BlockKind) -> u32 {
        self.spec(kind).hits.max(1)
    }

    pub fn points(&self, kind: BlockKind) -> u64 {
        self.spec(kind).points
    }
}
