//! Scene update logic: the tap state machine, the per-tick world advance,
//! obstacle spawning, and contact classification.

use super::types::{contact_tested, Collider, GameScene, Phase, PipePair};
use crate::constants::{
    BACKGROUND_LOOP_DURATION, FLAP_IMPULSE, GRAVITY, GROUND_THICKNESS, PIPE_CROSSING_RATE,
    PIPE_TRAVEL_WIDTHS, SPAWN_INTERVAL,
};
use rand::Rng;

/// Text shown while waiting for the restart tap.
pub const GAME_OVER_TEXT: &str = "Game Over! Tap to play again.";

/// Handle a single tap event. This is the only state-machine driver besides
/// the contact classifier:
///
/// - Idle: enable gravity, unfreeze the world, flap, phase -> Running.
/// - Running: zero the velocity, then flap. Taps never accumulate.
/// - Over: full reset back to Idle.
pub fn handle_tap(scene: &mut GameScene) {
    match scene.phase {
        Phase::Idle => {
            scene.phase = Phase::Running;
            scene.player.gravity_enabled = true;
            scene.speed = 1.0;
            // The world scrolls while Idle after a restart, so a body may
            // already overlap the player with its begin event consumed while
            // contacts were ignored. Clear the latches so any sustained
            // overlap re-fires on the next tick, where Running classifies it.
            scene.touching_ground = false;
            for pair in &mut scene.pipes {
                pair.touching_solid = false;
                pair.touching_score = false;
            }
            apply_flap(scene);
        }
        Phase::Running => {
            apply_flap(scene);
        }
        Phase::Over => {
            reset(scene);
        }
    }
}

/// Zero the player's velocity and apply the fixed upward impulse. The zeroing
/// makes every tap fully override prior vertical motion.
fn apply_flap(scene: &mut GameScene) {
    scene.player.vx = 0.0;
    scene.player.vy = 0.0;
    scene.player.vy += FLAP_IMPULSE;
}

/// Restore initial conditions after a game over. The ground boundary and the
/// spawn clock persist; everything else is rebuilt.
pub fn reset(scene: &mut GameScene) {
    scene.score = 0;
    scene.score_text = "0".to_string();
    scene.game_over_label = None;
    scene.player.x = scene.width / 2.0;
    scene.player.y = scene.height / 2.0;
    scene.player.vx = 0.0;
    scene.player.vy = 0.0;
    scene.player.gravity_enabled = false;
    scene.pipes.clear();
    scene.tiles = super::types::make_background_tiles(scene.width);
    scene.speed = 1.0;
    scene.paused = false;
    scene.touching_ground = false;
    scene.phase = Phase::Idle;
}

/// Advance the world by `dt` time-units. A no-op while paused; all motion and
/// the spawn clock scale with the global speed, so nothing moves or spawns
/// while the world is frozen.
pub fn advance<R: Rng>(scene: &mut GameScene, dt: f64, rng: &mut R) {
    if scene.paused {
        return;
    }
    let dt = dt * scene.speed;
    if dt <= 0.0 {
        return;
    }

    // Background loop: scroll left, wrap by one tile width
    let tile_speed = scene.width / BACKGROUND_LOOP_DURATION;
    let half_width = scene.width / 2.0;
    for tile in &mut scene.tiles {
        tile.x -= tile_speed * dt;
        if tile.x <= -half_width {
            tile.x += scene.width;
        }
    }

    // Obstacles: constant leftward scroll, discard after the fixed travel
    // distance (two playfield widths, i.e. width/100 time-units on screen)
    let pipe_speed = PIPE_TRAVEL_WIDTHS * PIPE_CROSSING_RATE;
    let travel_limit = PIPE_TRAVEL_WIDTHS * scene.width;
    for pair in &mut scene.pipes {
        let step = pipe_speed * dt;
        pair.x -= step;
        pair.traveled += step;
    }
    scene.pipes.retain(|pair| pair.traveled < travel_limit);

    // Player physics
    if scene.player.gravity_enabled {
        scene.player.vy += GRAVITY * dt;
    }
    scene.player.x += scene.player.vx * dt;
    scene.player.y += scene.player.vy * dt;
    scene.player.anim_clock += dt;

    // Recurring spawn interval on the world clock
    scene.spawn_clock += dt;
    while scene.spawn_clock >= SPAWN_INTERVAL {
        scene.spawn_clock -= SPAWN_INTERVAL;
        spawn_pipe_pair(scene, rng);
    }

    // Contact detection and classification
    for (a, b) in detect_contact_begins(scene) {
        on_contact_begin(scene, a, b);
        if scene.phase == Phase::Over {
            break;
        }
    }
}

/// Spawn one obstacle pair past the right screen edge. The gap center is
/// offset from mid-height by a uniform value in [-H/4, +H/4), independent per
/// spawn.
pub fn spawn_pipe_pair<R: Rng>(scene: &mut GameScene, rng: &mut R) {
    let quarter = scene.height / 4.0;
    let offset = rng.gen_range(-quarter..quarter);
    scene.pipes.push(PipePair {
        x: scene.width / 2.0 + scene.width,
        gap_center_y: scene.height / 2.0 + offset,
        gap: scene.gap_height(),
        traveled: 0.0,
        touching_solid: false,
        touching_score: false,
    });
}

/// Find contacts that began this tick. Overlap is tracked per body so a
/// sustained overlap reports exactly one begin event, mirroring a physics
/// engine's contact-begin callback.
fn detect_contact_begins(scene: &mut GameScene) -> Vec<(Collider, Collider)> {
    let mut begins = Vec::new();
    let player_box = scene.player.aabb();

    // Ground boundary: static, spans the playfield width
    let on_ground = player_box.cy - player_box.half_h <= GROUND_THICKNESS;
    if on_ground && !scene.touching_ground && contact_tested(Collider::Player, Collider::Obstacle) {
        begins.push((Collider::Player, Collider::Obstacle));
    }
    scene.touching_ground = on_ground;

    for pair in &mut scene.pipes {
        let solid = player_box.overlaps(&pair.top_segment())
            || player_box.overlaps(&pair.bottom_segment());
        if solid && !pair.touching_solid && contact_tested(Collider::Player, Collider::Obstacle) {
            begins.push((Collider::Obstacle, Collider::Player));
        }
        pair.touching_solid = solid;

        let in_gap = player_box.overlaps(&pair.score_region());
        if in_gap
            && !pair.touching_score
            && contact_tested(Collider::Player, Collider::ScoreTrigger)
        {
            begins.push((Collider::ScoreTrigger, Collider::Player));
        }
        pair.touching_score = in_gap;
    }

    begins
}

/// Classify one contact-begin event. The single Running -> Over transition
/// point: a score-category participant increments the score, anything else is
/// fatal.
pub fn on_contact_begin(scene: &mut GameScene, a: Collider, b: Collider) {
    if scene.phase != Phase::Running {
        return;
    }

    if a == Collider::ScoreTrigger || b == Collider::ScoreTrigger {
        scene.score += 1;
        scene.score_text = scene.score.to_string();
    } else {
        scene.phase = Phase::Over;
        scene.player.gravity_enabled = false;
        scene.speed = 0.0;
        scene.paused = true;
        if scene.score > scene.best_score {
            scene.best_score = scene.score;
        }
        scene.game_over_label = Some(GAME_OVER_TEXT.to_string());
    }
}
