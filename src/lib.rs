//! Block Mine: a click-to-mine block game for the browser, in a full
//! (game page) and a mini (home page) variant.

pub mod components;
pub mod config;
pub mod engine;
pub mod model;
pub mod storage;
pub mod util;
