//! DS Pong entry point
//!
//! Native headless run: loads settings, plays the configured number of
//! frames against the computer opponent and prints the final state.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use ds_pong::consts::FRAMES_PER_SECOND;
    use ds_pong::game::autopilot_keys;
    use ds_pong::renderer::OamTable;
    use ds_pong::sim::Keys;
    use ds_pong::{AudioManager, Game, Settings};

    env_logger::init();
    log::info!("DS Pong (native) starting...");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Settings::FILE_NAME.to_string());
    let settings = Settings::load_or_default(&path);

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    let mut audio = AudioManager::new();
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let mut game = Game::new(seed, audio);
    let mut oam = OamTable::default();

    for _ in 0..settings.frames {
        let keys = if settings.autopilot {
            autopilot_keys(&game.state)
        } else {
            Keys::NONE
        };
        if let Some(side) = game.frame(keys, &mut oam).scored {
            log::info!(
                "{:?} scored ({} - {}) at {:.1}s",
                side,
                game.state.scores.player,
                game.state.scores.opponent,
                game.state.time_ticks as f64 / FRAMES_PER_SECOND as f64
            );
        }
    }

    log::info!(
        "Finished {} frames, final score {} - {}, {} effects played",
        game.state.time_ticks,
        game.state.scores.player,
        game.state.scores.opponent,
        game.audio().played()
    );

    match serde_json::to_string_pretty(&game.state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is driven by the host page.
}
