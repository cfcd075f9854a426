// Simulation timing constants
pub const TICK_INTERVAL_MS: u64 = 16;

// Playfield dimensions in world units (x right, y up, origin bottom-left)
pub const PLAYFIELD_WIDTH: f64 = 320.0;
pub const PLAYFIELD_HEIGHT: f64 = 480.0;

// Player constants
pub const PLAYER_RADIUS: f64 = 12.0;
/// Upward velocity set by a tap. Every tap zeroes velocity first, so this is
/// the exact vertical speed immediately after a flap.
pub const FLAP_IMPULSE: f64 = 50.0;
/// Gravity in units per time-unit squared (negative = downward).
pub const GRAVITY: f64 = -40.0;
/// Time per flap animation frame (2-frame wing cycle).
pub const FLAP_FRAME_DURATION: f64 = 0.1;

// Obstacle constants
/// Seconds between obstacle pair spawns, on the world clock.
pub const SPAWN_INTERVAL: f64 = 3.0;
pub const PIPE_WIDTH: f64 = 52.0;
/// Solid segment height; tall enough to reach from any gap edge past the
/// screen edge.
pub const PIPE_SEGMENT_HEIGHT: f64 = 480.0;
/// Gap height as a multiple of the player's vertical extent.
pub const GAP_HEIGHT_MULTIPLE: f64 = 4.0;
/// A pair travels this many playfield widths before it is discarded.
pub const PIPE_TRAVEL_WIDTHS: f64 = 2.0;
/// A pair fully exits the screen after `width / PIPE_CROSSING_RATE`
/// time-units, which fixes its speed at
/// `PIPE_TRAVEL_WIDTHS * PIPE_CROSSING_RATE` units per time-unit.
pub const PIPE_CROSSING_RATE: f64 = 100.0;
/// Score region width relative to the solid segments.
pub const SCORE_REGION_WIDTH_RATIO: f64 = 0.25;

// Background constants
pub const BACKGROUND_TILE_COUNT: usize = 3;
/// Seconds for one tile to scroll its own width (the loop period).
pub const BACKGROUND_LOOP_DURATION: f64 = 9.0;

// Ground constants
pub const GROUND_THICKNESS: f64 = 1.0;

// Score file constants
pub const SCORE_VERSION_MAGIC: u64 = 0x5441505059000000; // "TAPPY\0\0\0" in hex
