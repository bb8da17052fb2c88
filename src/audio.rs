//! Sound effect triggers
//!
//! The simulation only names effects; playback belongs to whatever sink
//! the driver plugs in. Triggers are fire-and-forget.

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Ball bounces off a wall or a paddle
    Hit,
    /// Ball leaves the field
    Score,
}

/// Playback parameters for a sound effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectParams {
    /// Playback rate, 6.10 fixed point (1 << 10 is normal speed)
    pub rate: u16,
    pub volume: u8,
    /// 0 is hard left, 255 hard right
    pub panning: u8,
}

impl SoundEffect {
    /// Sound bank id
    pub fn bank_id(self) -> u32 {
        match self {
            SoundEffect::Hit => 0,
            SoundEffect::Score => 1,
        }
    }

    /// Default playback parameters
    pub fn params(self) -> EffectParams {
        EffectParams {
            rate: 1 << 10,
            volume: 255,
            panning: 255,
        }
    }
}

/// Somewhere to send effect triggers. Nothing is returned to the caller.
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager for the game
///
/// Applies the configured volume and mute state, then hands the effect to
/// the platform. Natively there is no mixer, so triggers are only logged.
#[derive(Debug, Clone)]
pub struct AudioManager {
    sfx_volume: u8,
    muted: bool,
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            sfx_volume: 255,
            muted: false,
            played: 0,
        }
    }

    /// Set SFX volume (0 - 255)
    pub fn set_sfx_volume(&mut self, vol: u8) {
        self.sfx_volume = vol;
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Effects actually sent to the platform so far
    pub fn played(&self) -> u64 {
        self.played
    }

    /// Parameters after volume scaling, or `None` when silent
    pub fn effective_params(&self, effect: SoundEffect) -> Option<EffectParams> {
        if self.muted || self.sfx_volume == 0 {
            return None;
        }
        let mut params = effect.params();
        params.volume = ((params.volume as u16 * self.sfx_volume as u16) / 255) as u8;
        Some(params)
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let Some(params) = self.effective_params(effect) else {
            return;
        };
        self.played += 1;
        log::debug!(
            "play {:?} (bank {}, rate {}, vol {}, pan {})",
            effect,
            effect.bank_id(),
            params.rate,
            params.volume,
            params.panning
        );
    }
}

/// Sink that remembers every trigger
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub effects: Vec<SoundEffect>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.effects.push(effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SoundEffect::Hit.params();
        assert_eq!(params.rate, 1024);
        assert_eq!(params.volume, 255);
        assert_eq!(params.panning, 255);
    }

    #[test]
    fn test_volume_scaling() {
        let mut audio = AudioManager::new();
        audio.set_sfx_volume(128);
        assert_eq!(audio.effective_params(SoundEffect::Score).unwrap().volume, 128);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new();
        audio.set_muted(true);
        audio.play(SoundEffect::Hit);
        assert_eq!(audio.played(), 0);

        audio.set_muted(false);
        audio.play(SoundEffect::Hit);
        assert_eq!(audio.played(), 1);
    }
}
