//! Tappy - Terminal Flappy Bird
//!
//! This module exposes the scene logic for testing and external use.

// Allow dead code in library - some items are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod constants;
pub mod scene;
pub mod score_manager;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TICK_INTERVAL_MS};
pub use scene::{GameScene, Phase};
