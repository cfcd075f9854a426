//! Terminal rendering for the flappy scene.

use crate::constants::{FLAP_FRAME_DURATION, GROUND_THICKNESS};
use crate::scene::{GameScene, Phase};
use crate::ui::common::{create_game_layout, render_game_over_overlay, render_status_bar};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole game screen.
pub fn render_scene(frame: &mut Frame, area: Rect, scene: &GameScene) {
    let layout = create_game_layout(frame, area, " Tappy Bird ", Color::Cyan, 22);

    render_play_area(frame, layout.content, scene);
    render_status(frame, layout.status_bar, scene);
    render_info_panel(frame, layout.info_panel, scene);

    if let Some(label) = &scene.game_over_label {
        render_game_over_overlay(
            frame,
            layout.content,
            label,
            &format!("Score: {}   Best: {}", scene.score, scene.best_score),
            "[Tap: Space]  [Quit: q]",
        );
    }
}

/// Render the play area cell by cell, mapping terminal cells to world
/// coordinates. World y points up; display rows point down.
fn render_play_area(frame: &mut Frame, area: Rect, scene: &GameScene) {
    let cols = area.width as usize;
    let rows = area.height as usize;
    if cols == 0 || rows == 0 {
        return;
    }

    // Player display cell, computed once so the sprite is always visible
    // even when a cell maps to several world units
    let player_col = (scene.player.x / scene.width * cols as f64) as isize;
    let player_row = ((1.0 - scene.player.y / scene.height) * rows as f64) as isize;

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let world_y = scene.height * (1.0 - (row as f64 + 0.5) / rows as f64);
        let mut spans = Vec::with_capacity(cols);

        for col in 0..cols {
            let world_x = scene.width * (col as f64 + 0.5) / cols as f64;

            if row as isize == player_row && col as isize == player_col {
                spans.push(player_span(scene));
                continue;
            }

            if row == rows - 1 || world_y <= GROUND_THICKNESS {
                spans.push(Span::styled("▀", Style::default().fg(Color::DarkGray)));
                continue;
            }

            let mut in_pipe = false;
            for pair in &scene.pipes {
                if pair.top_segment().contains(world_x, world_y)
                    || pair.bottom_segment().contains(world_x, world_y)
                {
                    in_pipe = true;
                    break;
                }
            }
            if in_pipe {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else if is_scenery(scene, world_x, world_y) {
                spans.push(Span::styled("░", Style::default().fg(Color::DarkGray)));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Player glyph: direction from vertical velocity, wing frame from the
/// animation clock.
fn player_span(scene: &GameScene) -> Span<'static> {
    let glyph = if scene.player.vy > 10.0 {
        "▲"
    } else if scene.player.vy < -30.0 {
        "▼"
    } else if (scene.player.anim_clock / FLAP_FRAME_DURATION) as u64 % 2 == 0 {
        "►"
    } else {
        "▻"
    };
    Span::styled(
        glyph,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
}

/// Sparse scenery marks anchored to the background tile set, so the seamless
/// leftward loop is visible on screen.
fn is_scenery(scene: &GameScene, world_x: f64, world_y: f64) -> bool {
    if world_y < scene.height * 0.55 {
        return false;
    }
    let anchor = scene.tiles.first().map(|t| t.x).unwrap_or(0.0);
    let band = ((world_x - anchor) / 36.0).floor() as i64;
    let layer = (world_y / 48.0).floor() as i64;
    (band * 7 + layer * 13).rem_euclid(11) == 0
}

fn render_status(frame: &mut Frame, area: Rect, scene: &GameScene) {
    let controls: &[(&str, &str)] = &[("[Space/Up/Enter]", "Tap"), ("[q/Esc]", "Quit")];
    match scene.phase {
        Phase::Idle => render_status_bar(frame, area, "Tap to start!", Color::Yellow, controls),
        Phase::Running => render_status_bar(
            frame,
            area,
            &format!("Score: {}", scene.score_text),
            Color::Green,
            controls,
        ),
        Phase::Over => render_status_bar(
            frame,
            area,
            "Game over - tap to restart",
            Color::Red,
            controls,
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, scene: &GameScene) {
    if area.height < 2 || area.width < 4 {
        return;
    }

    let phase_text = match scene.phase {
        Phase::Idle => ("Ready", Color::Yellow),
        Phase::Running => ("Flying", Color::Green),
        Phase::Over => ("Crashed", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(
            " Tappy ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                scene.score_text.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", scene.best_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" State: ", Style::default().fg(Color::DarkGray)),
            Span::styled(phase_text.0, Style::default().fg(phase_text.1)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
