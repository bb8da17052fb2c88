//! Game state and core simulation types
//!
//! Everything the simulation reads or writes between frames lives here.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::*;
use crate::middle;
use crate::renderer::{ColorFormat, GfxHandle, Sprite, SpriteId, SpriteSize};

/// Pixel coordinate, origin top-left, y grows downward
pub type Coord = IVec2;

/// Which end of the field an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled, left edge
    Player,
    /// Computer-controlled, right edge
    Opponent,
}

/// Movement label recorded for a paddle during one tick.
///
/// Never stored in the state: it is produced and consumed within a single
/// `tick`. For the opponent the labels are inverted relative to geometry
/// (moving toward larger y is `Up`), and the paddle response table relies
/// on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
}

/// A paddle sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub sprite: Sprite,
}

impl Paddle {
    /// Create a paddle with its top-left corner at `(x, y)`
    pub fn new(side: Side, x: i32, y: i32, gfx: GfxHandle) -> Self {
        let id = match side {
            Side::Player => SpriteId::Player,
            Side::Opponent => SpriteId::Opponent,
        };
        Self {
            side,
            sprite: Sprite::new(id, x, y, SpriteSize::Size32x32, ColorFormat::Palette256, gfx),
        }
    }

    #[inline]
    pub fn pos(&self) -> Coord {
        self.sprite.pos
    }

    /// Whether a y coordinate lies on the paddle's vertical span (inclusive)
    #[inline]
    pub fn spans(&self, y: i32) -> bool {
        y >= self.sprite.pos.y && y <= self.sprite.pos.y + PADDLE_SIZE
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub sprite: Sprite,
    /// Pixels per tick on each axis
    pub vel: Coord,
}

impl Ball {
    /// Create a stationary ball with its top-left corner at `(x, y)`
    pub fn new(x: i32, y: i32, gfx: GfxHandle) -> Self {
        Self {
            sprite: Sprite::new(
                SpriteId::Ball,
                x,
                y,
                SpriteSize::Size8x8,
                ColorFormat::Palette256,
                gfx,
            ),
            vel: Coord::ZERO,
        }
    }

    #[inline]
    pub fn pos(&self) -> Coord {
        self.sprite.pos
    }

    /// Put the ball back in the middle of the field with a fresh serve.
    ///
    /// Draws two values from `rng`: one for the horizontal sign, one for
    /// the vertical component.
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        self.sprite.pos = serve_position();

        self.vel.x = BALL_SERVE_SPEED;
        if rng.below(2) != 0 {
            self.vel.x = -self.vel.x;
        }

        self.vel.y = match rng.below(3) {
            0 => 0,
            1 => -BALL_SERVE_SPEED,
            _ => BALL_SERVE_SPEED,
        };
    }
}

/// Where the ball is placed on every reset
#[inline]
pub fn serve_position() -> Coord {
    Coord::new(middle(FIELD_WIDTH, BALL_SIZE), middle(FIELD_HEIGHT, BALL_SIZE))
}

/// Points per side. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player: u32,
    pub opponent: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Award one point to `side`
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Graphics handle shared by both paddles
pub const PADDLE_GFX: GfxHandle = GfxHandle(0);
/// Graphics handle of the ball (allocated after the paddle block)
pub const BALL_GFX: GfxHandle = GfxHandle(1);

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub scores: Scores,
    /// Frames simulated so far
    pub time_ticks: u64,
}

impl GameState {
    /// Lay out both paddles, zero the scores and serve the first ball
    pub fn new(rng: &mut impl RandomSource) -> Self {
        let paddle_y = middle(FIELD_HEIGHT, PADDLE_SIZE);
        let mut state = Self {
            player: Paddle::new(Side::Player, 0, paddle_y, PADDLE_GFX),
            opponent: Paddle::new(Side::Opponent, FIELD_WIDTH - PADDLE_SIZE, paddle_y, PADDLE_GFX),
            ball: Ball::new(0, 0, BALL_GFX),
            scores: Scores::default(),
            time_ticks: 0,
        };
        state.ball.reset(rng);
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Sprites in draw order
    pub fn sprites(&self) -> [&Sprite; 3] {
        [&self.player.sprite, &self.opponent.sprite, &self.ball.sprite]
    }
}
