//! Core data model for the block mining game: the block catalog, cells and
//! the grid they live in, and the per-session game state.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    /// Saturates instead of wrapping on 32-bit targets.
    pub fn cells(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// Catalog of block kinds, in catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Grass,
    Dirt,
    Stone,
    Diamond,
}

impl BlockKind {
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Grass,
        BlockKind::Dirt,
        BlockKind::Stone,
        BlockKind::Diamond,
    ];

    /// Position in [`BlockKind::ALL`]; used to index per-kind tables.
    pub fn index(self) -> usize {
        match self {
            BlockKind::Grass => 0,
            BlockKind::Dirt => 1,
            BlockKind::Stone => 2,
            BlockKind::Diamond => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Grass => "Grass",
            BlockKind::Dirt => "Dirt",
            BlockKind::Stone => "Stone",
            BlockKind::Diamond => "Diamond",
        }
    }
}

/// Per-kind tuning: what a block is worth and how many hits it takes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BlockSpec {
    pub points: u64,
    /// Hits needed to destroy; always at least 1 once loaded.
    pub hits: u32,
    pub color: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub block: Option<BlockKind>,
    /// Hits taken by the current block. Zero whenever `block` is `None`.
    pub hits: u32,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.block.is_none()
    }

    pub fn fill(&mut self, kind: BlockKind) {
        self.block = Some(kind);
        self.hits = 0;
    }

    pub fn clear(&mut self) {
        self.block = None;
        self.hits = 0;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub size: GridSize,
    /// Row-major cells; length = width * height.
    pub cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size.cells()],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut Cell> {
        self.cells.get_mut(idx)
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub score: u64,
    pub blocks_destroyed: u32,
    pub playing: bool,
    /// Best score seen, loaded from storage at startup.
    pub high_score: u64,
    /// Kind placed by build mode clicks.
    pub selected: BlockKind,
    /// Play time since the last start, in milliseconds.
    pub elapsed_ms: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            blocks_destroyed: 0,
            playing: false,
            high_score: 0,
            selected: BlockKind::Grass,
            elapsed_ms: 0,
        }
    }
}

/// What a single hit did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitOutcome {
    /// Not playing, empty cell, or out of range.
    Ignored,
    /// Block took damage but is still standing.
    Damaged { kind: BlockKind, damage: f64 },
    Destroyed {
        kind: BlockKind,
        points: u64,
        new_high_score: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_indices_follow_catalog_order() {
        for (i, k) in BlockKind::ALL.iter().enumerate() {
            assert_eq!(k.index(), i);
        }
    }

    #[test]
    fn new_grid_is_empty() {
        let g = Grid::new(GridSize { width: 6, height: 6 });
        assert_eq!(g.len(), 36);
        assert_eq!(g.occupied(), 0);
        assert!(g.get(36).is_none());
    }

    #[test]
    fn cell_count_widens_before_multiplying() {
        let size = GridSize {
            width: 70_000,
            height: 70_000,
        };
        assert_eq!(size.cells() as u64, 4_900_000_000u64.min(usize::MAX as u64));
    }

    #[test]
    fn clearing_a_cell_resets_hits() {
        let mut c = Cell::default();
        c.fill(BlockKind::Stone);
        c.hits = 2;
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.hits, 0);
    }
}
