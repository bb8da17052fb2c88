//! Packed sprite attribute table
//!
//! Draw calls land in a fixed table indexed by sprite id, laid out so a
//! platform layer can copy it to sprite memory in one go.

use bytemuck::{Pod, Zeroable};

use super::sprite::{ColorFormat, Sprite, SpriteBackend, SpriteSize};

/// Number of slots in the table
pub const OAM_SLOTS: usize = 128;

/// One sprite's attributes
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct OamEntry {
    pub x: i16,
    pub y: i16,
    /// Graphics handle
    pub tile: u16,
    /// Bits 0-1 size, bits 2-3 color format, bit 15 visible
    pub flags: u16,
}

impl OamEntry {
    pub const VISIBLE: u16 = 1 << 15;

    pub fn from_sprite(sprite: &Sprite) -> Self {
        let size = match sprite.size {
            SpriteSize::Size8x8 => 0,
            SpriteSize::Size16x16 => 1,
            SpriteSize::Size32x32 => 2,
            SpriteSize::Size64x64 => 3,
        };
        let format = match sprite.format {
            ColorFormat::Palette16 => 0,
            ColorFormat::Palette256 => 1,
            ColorFormat::Bitmap => 2,
        };
        Self {
            x: sprite.pos.x as i16,
            y: sprite.pos.y as i16,
            tile: sprite.gfx.0,
            flags: Self::VISIBLE | (format << 2) | size,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.flags & Self::VISIBLE != 0
    }
}

/// Attribute table; implements `SpriteBackend` by writing the sprite's slot
#[derive(Debug, Clone)]
pub struct OamTable {
    entries: [OamEntry; OAM_SLOTS],
}

impl Default for OamTable {
    fn default() -> Self {
        Self {
            entries: [OamEntry::zeroed(); OAM_SLOTS],
        }
    }
}

impl OamTable {
    pub fn entry(&self, slot: usize) -> Option<&OamEntry> {
        self.entries.get(slot)
    }

    /// Raw table contents
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.entries)
    }
}

impl SpriteBackend for OamTable {
    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.entries[sprite.id as usize] = OamEntry::from_sprite(sprite);
    }
}
