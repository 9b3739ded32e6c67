//! The block mining engine: owns one grid and its game state, and applies
//! start/stop/reset/hit commands to them. Nothing in here touches the DOM;
//! the components dispatch [`MineAction`]s through `use_reducer`.

use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use yew::Reducible;

use crate::config::{GameConfig, Population};
use crate::model::{BlockKind, GameState, Grid, HitOutcome};

/// Picks a kind from `weights` (catalog order) given a roll in `[0, 1)`.
/// Negative and non-finite weights count as zero and are never picked. If
/// rounding leaves the roll past every weight, the last weighted kind wins;
/// with no positive weight at all, the last catalog entry does.
pub fn pick_weighted(weights: &[f64; 4], roll: f64) -> BlockKind {
    let w = weights.map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
    let total: f64 = w.iter().sum();
    let mut r = roll * total;
    let mut last = BlockKind::ALL[BlockKind::ALL.len() - 1];
    for (i, wi) in w.iter().enumerate() {
        if *wi <= 0.0 {
            continue;
        }
        last = BlockKind::ALL[i];
        if r < *wi {
            return last;
        }
        r -= wi;
    }
    last
}

/// Fills each empty cell with probability `density`, drawing the kind from
/// `weights`. Occupied cells are left alone.
pub fn populate<R: Rng + ?Sized>(grid: &mut Grid, density: f64, weights: &[f64; 4], rng: &mut R) -> usize {
    fill_empty(grid, &Population::weighted(density, *weights), rng)
}

/// Like [`populate`], with a per-kind acceptance roll after the draw.
/// Returns how many cells were filled.
pub fn fill_empty<R: Rng + ?Sized>(grid: &mut Grid, pop: &Population, rng: &mut R) -> usize {
    let mut filled = 0;
    for cell in grid.cells.iter_mut().filter(|c| c.is_empty()) {
        if rng.r#gen::<f64>() >= pop.density {
            continue;
        }
        let kind = pick_weighted(&pop.weights, rng.r#gen::<f64>());
        if rng.r#gen::<f64>() < pop.acceptance[kind.index()] {
            cell.fill(kind);
            filled += 1;
        }
    }
    filled
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Respawn {
    idx: usize,
    due_ms: u64,
}

#[derive(Clone, Debug)]
pub struct MiningEngine {
    config: Rc<GameConfig>,
    grid: Grid,
    state: GameState,
    rng: SmallRng,
    /// Engine time, advanced by `advance`.
    clock_ms: u64,
    respawns: Vec<Respawn>,
}

impl MiningEngine {
    /// Builds a stopped engine with a freshly populated grid.
    pub fn new(config: GameConfig, seed: u64, high_score: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut grid = Grid::new(config.grid);
        fill_empty(&mut grid, &config.initial, &mut rng);
        Self::with_grid(config, grid, rng, high_score)
    }

    /// Builds a stopped engine around an existing grid.
    pub fn with_grid(config: GameConfig, grid: Grid, rng: SmallRng, high_score: u64) -> Self {
        Self {
            config: Rc::new(config),
            grid,
            state: GameState {
                high_score,
                ..GameState::default()
            },
            rng,
            clock_ms: 0,
            respawns: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn blocks_destroyed(&self) -> u32 {
        self.state.blocks_destroyed
    }

    pub fn high_score(&self) -> u64 {
        self.state.high_score
    }

    pub fn is_playing(&self) -> bool {
        self.state.playing
    }

    pub fn selected(&self) -> BlockKind {
        self.state.selected
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.state.elapsed_ms
    }

    pub fn pending_respawns(&self) -> usize {
        self.respawns.len()
    }

    pub fn kind_at(&self, idx: usize) -> Option<BlockKind> {
        self.grid.get(idx).and_then(|c| c.block)
    }

    /// Hits over threshold for the block at `idx`, 0.0 for empty cells.
    pub fn damage_at(&self, idx: usize) -> f64 {
        match self.grid.get(idx) {
            Some(cell) => match cell.block {
                Some(kind) => cell.hits as f64 / self.config.threshold(kind) as f64,
                None => 0.0,
            },
            None => 0.0,
        }
    }

    pub fn start(&mut self) {
        self.state.playing = true;
        self.state.score = 0;
        self.state.blocks_destroyed = 0;
        self.state.elapsed_ms = 0;
        let filled = fill_empty(&mut self.grid, &self.config.refill, &mut self.rng);
        log::debug!("mining started, {} cells refilled", filled);
    }

    /// Stops play and cancels pending respawns.
    pub fn stop(&mut self) {
        self.state.playing = false;
        self.respawns.clear();
        log::debug!("mining stopped at score {}", self.state.score);
    }

    pub fn toggle(&mut self) {
        if self.state.playing {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Stops, zeroes the counters and rebuilds the grid from scratch.
    pub fn reset(&mut self) {
        self.stop();
        self.state.score = 0;
        self.state.blocks_destroyed = 0;
        self.state.elapsed_ms = 0;
        self.grid = Grid::new(self.config.grid);
        fill_empty(&mut self.grid, &self.config.initial, &mut self.rng);
        log::debug!("grid reset, {} blocks", self.grid.occupied());
    }

    /// Empties every cell. Score and play state are untouched.
    pub fn clear(&mut self) {
        for cell in self.grid.cells.iter_mut() {
            cell.clear();
        }
    }

    pub fn select_block(&mut self, kind: BlockKind) {
        self.state.selected = kind;
    }

    /// Build mode: drops the selected block into an empty cell while stopped.
    pub fn place(&mut self, idx: usize) -> bool {
        if !self.config.build_mode || self.state.playing {
            return false;
        }
        let kind = self.state.selected;
        match self.grid.get_mut(idx) {
            Some(cell) if cell.is_empty() => {
                cell.fill(kind);
                true
            }
            _ => false,
        }
    }

    pub fn register_hit(&mut self, idx: usize) -> HitOutcome {
        if !self.state.playing {
            return HitOutcome::Ignored;
        }
        let Some(cell) = self.grid.get_mut(idx) else {
            return HitOutcome::Ignored;
        };
        let Some(kind) = cell.block else {
            return HitOutcome::Ignored;
        };
        let threshold = self.config.threshold(kind);
        cell.hits += 1;
        if cell.hits >= threshold {
            self.destroy(idx, kind)
        } else {
            HitOutcome::Damaged {
                kind,
                damage: cell.hits as f64 / threshold as f64,
            }
        }
    }

    fn destroy(&mut self, idx: usize, kind: BlockKind) -> HitOutcome {
        let points = self.config.points(kind);
        self.state.score = self.state.score.saturating_add(points);
        self.state.blocks_destroyed = self.state.blocks_destroyed.saturating_add(1);
        if let Some(cell) = self.grid.get_mut(idx) {
            cell.clear();
        }
        let new_high_score = self.state.score > self.state.high_score;
        if new_high_score {
            self.state.high_score = self.state.score;
            log::info!("new high score: {}", self.state.high_score);
        }
        if let Some(delay) = self.config.respawn_delay_ms {
            self.respawns.push(Respawn {
                idx,
                due_ms: self.clock_ms.saturating_add(delay),
            });
        }
        HitOutcome::Destroyed {
            kind,
            points,
            new_high_score,
        }
    }

    /// Moves engine time forward, growing elapsed play time and firing
    /// respawns that have come due.
    pub fn advance(&mut self, dt_ms: u64) {
        self.clock_ms = self.clock_ms.saturating_add(dt_ms);
        if self.state.playing {
            self.state.elapsed_ms = self.state.elapsed_ms.saturating_add(dt_ms);
        }
        let now = self.clock_ms;
        let (due, pending): (Vec<Respawn>, Vec<Respawn>) =
            self.respawns.drain(..).partition(|r| r.due_ms <= now);
        self.respawns = pending;
        for r in due {
            if !self.state.playing {
                continue;
            }
            let roll = self.rng.r#gen::<f64>();
            if let Some(cell) = self.grid.get_mut(r.idx) {
                if cell.is_empty() {
                    cell.fill(pick_weighted(&self.config.refill.weights, roll));
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MineAction {
    Start,
    Stop,
    Toggle,
    Reset,
    Clear,
    Hit { idx: usize },
    Place { idx: usize },
    Select(BlockKind),
    Advance { dt_ms: u64 },
}

impl Reducible for MiningEngine {
    type Action = MineAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MineAction::*;
        // Ticks while stopped with nothing queued change nothing visible.
        if let Advance { .. } = action {
            if !self.state.playing && self.respawns.is_empty() {
                return self;
            }
        }
        let mut new = (*self).clone();
        match action {
            Start => new.start(),
            Stop => new.stop(),
            Toggle => new.toggle(),
            Reset => new.reset(),
            Clear => new.clear(),
            Hit { idx } => {
                if new.register_hit(idx) == HitOutcome::Ignored {
                    return self;
                }
            }
            Place { idx } => {
                if !new.place(idx) {
                    return self;
                }
            }
            Select(kind) => new.select_block(kind),
            Advance { dt_ms } => new.advance(dt_ms),
        }
        Rc::new(new)
    }
}
