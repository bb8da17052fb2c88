//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one display frame.

use serde::{Deserialize, Serialize};

use super::collision::{
    ball_goal, ball_paddle_collision, ball_wall_collision, reflect_off_paddle, reflect_off_wall,
};
use super::rng::RandomSource;
use super::state::{Direction, GameState, Side};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Held-key bitmask as reported by the input hardware
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys(pub u32);

impl Keys {
    pub const NONE: Keys = Keys(0);
    pub const UP: Keys = Keys(1 << 6);
    pub const DOWN: Keys = Keys(1 << 7);

    #[inline]
    pub fn contains(self, other: Keys) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

impl std::ops::BitOr for Keys {
    type Output = Keys;

    fn bitor(self, rhs: Keys) -> Keys {
        Keys(self.0 | rhs.0)
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Keys currently held
    pub keys: Keys,
}

impl TickInput {
    pub fn new(keys: Keys) -> Self {
        Self { keys }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Sound effects to trigger, in the order they fired
    pub sounds: Vec<SoundEffect>,
    /// Side that scored this tick, if any
    pub scored: Option<Side>,
}

/// Advance the game state by one frame.
///
/// Order matters: the player paddle moves, the ball moves, the opponent
/// reacts to the moved ball, and only then are walls, paddles and goals
/// tested against the new ball position.
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl RandomSource) -> TickReport {
    let mut report = TickReport::default();
    state.time_ticks += 1;

    let player_dir = move_player(state, input.keys);

    state.ball.sprite.pos += state.ball.vel;

    let opponent_dir = move_opponent(state);

    let ball_pos = state.ball.pos();

    if ball_wall_collision(ball_pos) {
        state.ball.vel = reflect_off_wall(state.ball.vel);
        report.sounds.push(SoundEffect::Hit);
    }

    for (side, dir) in [(Side::Player, player_dir), (Side::Opponent, opponent_dir)] {
        if ball_paddle_collision(ball_pos, state.paddle(side).pos(), side) {
            state.ball.vel = reflect_off_paddle(state.ball.vel, dir, rng);
            log::trace!("{:?} paddle hit, ball vel now {}", side, state.ball.vel);
            report.sounds.push(SoundEffect::Hit);
        }
    }

    if let Some(side) = ball_goal(ball_pos) {
        state.scores.award(side);
        state.ball.reset(rng);
        log::debug!(
            "{:?} scored at tick {} ({} - {})",
            side,
            state.time_ticks,
            state.scores.player,
            state.scores.opponent
        );
        report.sounds.push(SoundEffect::Score);
        report.scored = Some(side);
    }

    report
}

/// Move the player paddle from the held keys.
///
/// Down wins when both keys are held. The down gate lets the paddle
/// report `Down` while resting on the bottom edge, but the position is
/// clamped so it never leaves `[0, FIELD_HEIGHT - PADDLE_SIZE]`.
fn move_player(state: &mut GameState, keys: Keys) -> Direction {
    let max_y = FIELD_HEIGHT - PADDLE_SIZE;
    let pos = &mut state.player.sprite.pos;

    if keys.contains(Keys::DOWN) && pos.y < max_y + PADDLE_STEP {
        pos.y = (pos.y + PADDLE_STEP).min(max_y);
        Direction::Down
    } else if keys.contains(Keys::UP) && pos.y > 0 {
        pos.y = (pos.y - PADDLE_STEP).max(0);
        Direction::Up
    } else {
        Direction::None
    }
}

/// Step the opponent one paddle step toward the ball.
///
/// Only the vertical gap is considered. The opponent is not clamped to the
/// field, and its labels are inverted: stepping toward larger y reports `Up`.
fn move_opponent(state: &mut GameState) -> Direction {
    let ball_y = state.ball.pos().y;
    let pos = &mut state.opponent.sprite.pos;

    if ball_y > pos.y + PADDLE_SIZE {
        pos.y += PADDLE_STEP;
        Direction::Up
    } else if ball_y < pos.y {
        pos.y -= PADDLE_STEP;
        Direction::Down
    } else {
        Direction::None
    }
}
