pub mod app;
pub mod block_selector;
pub mod board;
pub mod controls_panel;
pub mod mining_game;
pub mod stats_panel;
