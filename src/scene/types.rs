//! Scene data structures: phase machine, collision categories, and entities.

use crate::constants::{
    BACKGROUND_TILE_COUNT, GAP_HEIGHT_MULTIPLE, PIPE_SEGMENT_HEIGHT, PIPE_WIDTH, PLAYER_RADIUS,
    SCORE_REGION_WIDTH_RATIO,
};

/// Top-level game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first tap. Gravity off, world motion frozen.
    Idle,
    /// The run is live: obstacles spawn and scroll, gravity applies.
    Running,
    /// A fatal collision happened. Everything frozen until the restart tap.
    Over,
}

/// Collision category carried by every physics body.
///
/// Replaces a category/contact-test bitmask triple with a tagged enum plus
/// the explicit pairwise table in [`contact_tested`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collider {
    Player,
    /// Solid geometry: ground and pipe segments.
    Obstacle,
    /// Invisible pass-through region spanning a pipe gap.
    ScoreTrigger,
}

/// Pairwise contact-test policy: which category pairs report contact-begin
/// events to the classifier.
pub fn contact_tested(a: Collider, b: Collider) -> bool {
    use Collider::*;
    matches!(
        (a, b),
        (Player, Obstacle) | (Obstacle, Player) | (Player, ScoreTrigger) | (ScoreTrigger, Player)
    )
}

/// Axis-aligned box, center plus half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub cx: f64,
    pub cy: f64,
    pub half_w: f64,
    pub half_h: f64,
}

impl Aabb {
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.cx - other.cx).abs() <= self.half_w + other.half_w
            && (self.cy - other.cy).abs() <= self.half_h + other.half_h
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.cx - x).abs() <= self.half_w && (self.cy - y).abs() <= self.half_h
    }
}

/// The player body.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Off while Idle and Over; on while Running.
    pub gravity_enabled: bool,
    pub half_w: f64,
    pub half_h: f64,
    /// Drives the 2-frame wing animation in the renderer.
    pub anim_clock: f64,
}

impl Player {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            gravity_enabled: false,
            half_w: PLAYER_RADIUS,
            half_h: PLAYER_RADIUS,
            anim_clock: 0.0,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            cx: self.x,
            cy: self.y,
            half_w: self.half_w,
            half_h: self.half_h,
        }
    }
}

/// One obstacle: two solid segments plus the pass-through score region
/// between them. All three bodies share the same x and scroll together.
#[derive(Debug, Clone)]
pub struct PipePair {
    /// Shared horizontal center.
    pub x: f64,
    /// Vertical center of the gap.
    pub gap_center_y: f64,
    /// Gap height, fixed at spawn from the player's extent.
    pub gap: f64,
    /// Distance scrolled so far; the pair is discarded once this reaches
    /// `PIPE_TRAVEL_WIDTHS * playfield width`.
    pub traveled: f64,
    /// Contact bookkeeping: true while the player overlaps a solid segment.
    pub touching_solid: bool,
    /// Contact bookkeeping: true while the player overlaps the score region.
    pub touching_score: bool,
}

impl PipePair {
    pub fn top_segment(&self) -> Aabb {
        Aabb {
            cx: self.x,
            cy: self.gap_center_y + self.gap / 2.0 + PIPE_SEGMENT_HEIGHT / 2.0,
            half_w: PIPE_WIDTH / 2.0,
            half_h: PIPE_SEGMENT_HEIGHT / 2.0,
        }
    }

    pub fn bottom_segment(&self) -> Aabb {
        Aabb {
            cx: self.x,
            cy: self.gap_center_y - self.gap / 2.0 - PIPE_SEGMENT_HEIGHT / 2.0,
            half_w: PIPE_WIDTH / 2.0,
            half_h: PIPE_SEGMENT_HEIGHT / 2.0,
        }
    }

    /// Narrower than the solid segments so it only fires on a clean pass.
    pub fn score_region(&self) -> Aabb {
        Aabb {
            cx: self.x,
            cy: self.gap_center_y,
            half_w: PIPE_WIDTH * SCORE_REGION_WIDTH_RATIO / 2.0,
            half_h: self.gap / 2.0,
        }
    }
}

/// One background tile. Tiles scroll left and wrap by their own width, so the
/// 3-tile set loops seamlessly.
#[derive(Debug, Clone)]
pub struct BackgroundTile {
    /// Horizontal center.
    pub x: f64,
}

/// Build the fixed tile set, edge to edge starting at the left screen edge.
pub fn make_background_tiles(width: f64) -> Vec<BackgroundTile> {
    (0..BACKGROUND_TILE_COUNT)
        .map(|i| BackgroundTile {
            x: width / 2.0 + width * i as f64,
        })
        .collect()
}

/// The scene controller state. Everything the host loop reads or mutates
/// lives here; there are no module-level globals.
#[derive(Debug, Clone)]
pub struct GameScene {
    pub phase: Phase,
    pub score: u32,
    /// Best score this session (seeded from disk by the host).
    pub best_score: u32,
    /// Score readout text, refreshed on every score event.
    pub score_text: String,
    /// Present only while phase is Over.
    pub game_over_label: Option<String>,

    pub player: Player,
    pub pipes: Vec<PipePair>,
    pub tiles: Vec<BackgroundTile>,

    /// Global time scale: 0.0 freezes all world motion, 1.0 is normal.
    pub speed: f64,
    /// Hard pause: `advance` is a no-op while set.
    pub paused: bool,
    /// World-time accumulator for the recurring spawn interval. Persists
    /// across restarts.
    pub spawn_clock: f64,
    /// Contact bookkeeping for the ground boundary.
    pub touching_ground: bool,

    pub width: f64,
    pub height: f64,
}

impl GameScene {
    /// Create the scene in its initial Idle state: tiles built, player
    /// centered with gravity off, score "0", world motion frozen until the
    /// first tap.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            best_score: 0,
            score_text: "0".to_string(),
            game_over_label: None,
            player: Player::new(width / 2.0, height / 2.0),
            pipes: Vec::new(),
            tiles: make_background_tiles(width),
            speed: 0.0,
            paused: false,
            spawn_clock: 0.0,
            touching_ground: false,
            width,
            height,
        }
    }

    /// Gap height for a freshly spawned pair: a fixed multiple of the
    /// player's vertical extent.
    pub fn gap_height(&self) -> f64 {
        GAP_HEIGHT_MULTIPLE * self.player.half_h * 2.0
    }
}
