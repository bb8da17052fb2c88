//! Sprite attributes and the per-frame draw pass

use serde::{Deserialize, Serialize};

use crate::sim::{Coord, GameState};

/// Hardware sprite slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Player = 0,
    Opponent = 1,
    Ball = 2,
}

/// Sprite dimensions supported by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteSize {
    Size8x8,
    Size16x16,
    Size32x32,
    Size64x64,
}

impl SpriteSize {
    /// Edge length in pixels
    pub const fn pixels(self) -> i32 {
        match self {
            SpriteSize::Size8x8 => 8,
            SpriteSize::Size16x16 => 16,
            SpriteSize::Size32x32 => 32,
            SpriteSize::Size64x64 => 64,
        }
    }
}

/// Pixel data layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorFormat {
    Palette16,
    #[default]
    Palette256,
    Bitmap,
}

/// Opaque handle to a sprite's pixel data in graphics memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GfxHandle(pub u16);

/// Everything needed to put one entity on screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: SpriteId,
    /// Top-left corner
    pub pos: Coord,
    pub size: SpriteSize,
    pub format: ColorFormat,
    pub gfx: GfxHandle,
}

impl Sprite {
    /// Any coordinates are accepted; placement is the caller's concern.
    pub fn new(
        id: SpriteId,
        x: i32,
        y: i32,
        size: SpriteSize,
        format: ColorFormat,
        gfx: GfxHandle,
    ) -> Self {
        Self {
            id,
            pos: Coord::new(x, y),
            size,
            format,
            gfx,
        }
    }
}

/// Receives draw calls. Assumed infallible.
pub trait SpriteBackend {
    fn draw_sprite(&mut self, sprite: &Sprite);
}

/// Issue one draw call per entity: player, opponent, ball
pub fn draw(state: &GameState, backend: &mut impl SpriteBackend) {
    for sprite in state.sprites() {
        backend.draw_sprite(sprite);
    }
}

/// Backend that keeps every call, for tests and headless runs
#[derive(Debug, Default)]
pub struct RecordingBackend {
    pub calls: Vec<Sprite>,
}

impl SpriteBackend for RecordingBackend {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.calls.push(sprite.clone());
    }
}
