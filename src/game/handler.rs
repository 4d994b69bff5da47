use std::time::{Duration, Instant};
use crate::game::{assets::AssetBundle, constants::*, GameState};
use crate::game::subsystems::player_controls_handling::{ControlState, FireRequests};
use crate::game::subsystems::rendering::render_welcome;
use crate::utility::saturating_millis;
use crate::window::{BlitContext, ContextHandler, KeyCode};

enum Phase {
    Welcome { started: Instant },
    Playing { started: Instant }
}

/// Glue between the engine loop and the simulation: owns the game state and
/// its assets, turns key events into fire requests and plays sound cues.
pub struct DebrisShooter {
    state: GameState,
    assets: AssetBundle,
    phase: Phase,
    fire_requests: FireRequests
}

impl DebrisShooter {
    pub fn new(assets: AssetBundle) -> Self {
        Self {
            state: GameState::new(),
            assets,
            phase: Phase::Welcome { started: Instant::now() },
            fire_requests: FireRequests::default()
        }
    }

    /// One frame of play, `now_ms` counts from the moment play started
    fn tick(&mut self, ctx: &mut BlitContext, now_ms: u64) {
        self.state.update_player_controls(ControlState::sample(ctx));
        for _ in 0..self.fire_requests.take() {
            self.state.update_player_fire(now_ms);
        }

        self.state.update_game();

        for cue in self.state.drain_sound_cues() {
            if let Some(sound) = self.assets.sounds.for_cue(cue) {
                ctx.play_sound(sound.clone());
            }
        }

        self.state.render(ctx, &mut self.assets);
    }
}

impl ContextHandler for DebrisShooter {
    fn get_window_title(&self) -> &'static str { WINDOW_TITLE }

    fn get_window_size(&self) -> (usize, usize) {
        (SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize)
    }

    fn get_tick_interval(&self) -> Option<Duration> {
        Some(Duration::from_millis(TICK_INTERVAL_MS))
    }

    fn on_key_down(&mut self, _ctx: &mut BlitContext, key_code: KeyCode, repeat: bool) {
        self.fire_requests.on_key_down(key_code, repeat);
    }

    fn init(&mut self, _ctx: &mut BlitContext) {
        self.phase = Phase::Welcome { started: Instant::now() };
        log::info!("Showing welcome screen");
    }

    fn update(&mut self, ctx: &mut BlitContext, _dt: f32) {
        match self.phase {
            Phase::Welcome { started } => {
                render_welcome(ctx, &mut self.assets);
                if started.elapsed() >= Duration::from_millis(WELCOME_SCREEN_DURATION_MS) {
                    self.phase = Phase::Playing { started: Instant::now() };
                    self.fire_requests.begin_play();
                    log::info!("Game started");
                }
            },
            Phase::Playing { started } => {
                let now_ms = saturating_millis(started.elapsed());
                self.tick(ctx, now_ms);
            }
        }
    }
}

impl Drop for DebrisShooter {
    fn drop(&mut self) {
        log::info!("Shutting down, final score: {}", self.state.score());
    }
}
