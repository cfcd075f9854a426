//! The flappy scene controller.
//!
//! Owns all run state: the phase machine (Idle / Running / Over), the score,
//! the player body, the obstacle pairs, and the looping background tiles.
//! The host loop drives it through three entry points — [`handle_tap`] for
//! input events, [`advance`] for the fixed-interval tick, and
//! [`on_contact_begin`] for contact classification (invoked internally by
//! `advance`, exposed for tests).

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
