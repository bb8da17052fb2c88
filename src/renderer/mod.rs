//! Presentation layer
//!
//! Projects the game state onto sprite draw calls. Holds no state of its own.

pub mod oam;
pub mod sprite;

pub use oam::{OamEntry, OamTable};
pub use sprite::{
    ColorFormat, GfxHandle, RecordingBackend, Sprite, SpriteBackend, SpriteId, SpriteSize, draw,
};
