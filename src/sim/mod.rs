//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame, integer arithmetic only
//! - Randomness only through an injected `RandomSource`
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{OPPONENT_HIT_COLUMN, PLAYER_HIT_COLUMN, hit_column};
pub use rng::{RandomSource, SequenceRandom};
pub use state::{Ball, Coord, Direction, GameState, Paddle, RngState, Scores, Side, serve_position};
pub use tick::{Keys, TickInput, TickReport, tick};
