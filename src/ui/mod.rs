pub mod common;
pub mod scene;

use crate::scene::GameScene;
use ratatui::Frame;

/// Top-level draw entry point.
pub fn draw_ui(frame: &mut Frame, scene: &GameScene) {
    let size = frame.size();
    scene::render_scene(frame, size, scene);
}
