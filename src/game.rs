//! Per-frame driver
//!
//! Runs the simulation, forwards sound triggers and issues the draw pass,
//! once per display refresh.

use rand_pcg::Pcg32;

use crate::audio::AudioSink;
use crate::consts::*;
use crate::renderer::{SpriteBackend, draw};
use crate::sim::{GameState, Keys, RngState, TickInput, TickReport, tick};

/// Game instance holding all state
pub struct Game<A: AudioSink> {
    pub state: GameState,
    rng_state: RngState,
    rng: Pcg32,
    audio: A,
}

impl<A: AudioSink> Game<A> {
    /// New game with the first ball served from `seed`
    pub fn new(seed: u64, audio: A) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let state = GameState::new(&mut rng);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state,
            rng_state,
            rng,
            audio,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Simulate one frame with the held `keys`, then draw it
    pub fn frame(&mut self, keys: Keys, backend: &mut impl SpriteBackend) -> TickReport {
        let report = tick(&mut self.state, &TickInput::new(keys), &mut self.rng);
        for effect in &report.sounds {
            self.audio.play(*effect);
        }
        draw(&self.state, backend);
        report
    }
}

/// Keys that steer the player paddle toward the ball
pub fn autopilot_keys(state: &GameState) -> Keys {
    let paddle_center = state.player.pos().y + PADDLE_SIZE / 2;
    let ball_center = state.ball.pos().y + BALL_SIZE / 2;

    if ball_center > paddle_center + PADDLE_STEP {
        Keys::DOWN
    } else if ball_center < paddle_center - PADDLE_STEP {
        Keys::UP
    } else {
        Keys::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{RecordingAudio, SoundEffect};
    use crate::renderer::RecordingBackend;
    use crate::sim::Coord;

    #[test]
    fn test_frame_forwards_sounds_and_draws() {
        let mut game = Game::new(1, RecordingAudio::default());
        game.state.ball.sprite.pos = Coord::new(100, 2);
        game.state.ball.vel = Coord::new(2, -2);

        let mut backend = RecordingBackend::default();
        let report = game.frame(Keys::NONE, &mut backend);

        assert_eq!(report.sounds, vec![SoundEffect::Hit]);
        assert_eq!(game.audio().effects, vec![SoundEffect::Hit]);
        assert_eq!(backend.calls.len(), 3);
        assert_eq!(backend.calls[2].pos, Coord::new(102, 0));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new(5, RecordingAudio::default());
        let mut b = Game::new(5, RecordingAudio::default());
        let mut backend = RecordingBackend::default();

        for _ in 0..3000 {
            let keys = autopilot_keys(&a.state);
            a.frame(keys, &mut backend);
            b.frame(keys, &mut backend);
        }

        assert_eq!(a.state.scores, b.state.scores);
        assert_eq!(a.audio().effects, b.audio().effects);
        assert_eq!(a.seed(), 5);
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut game = Game::new(3, RecordingAudio::default());
        game.state.player.sprite.pos.y = 40;

        game.state.ball.sprite.pos.y = 150;
        assert_eq!(autopilot_keys(&game.state), Keys::DOWN);

        game.state.ball.sprite.pos.y = 0;
        assert_eq!(autopilot_keys(&game.state), Keys::UP);

        game.state.ball.sprite.pos.y = 52;
        assert_eq!(autopilot_keys(&game.state), Keys::NONE);
    }
}
