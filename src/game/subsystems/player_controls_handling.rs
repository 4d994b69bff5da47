use glam::IVec2;
use crate::game::{constants::*, GameState, SoundCue};
use crate::window::{BlitContext, KeyCode};

/// Held movement keys, sampled once per tick
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool
}

impl ControlState {
    /// Arrows and WASD are interchangeable
    pub fn sample(ctx: &BlitContext) -> Self {
        Self {
            left: ctx.is_key_pressed(KeyCode::Left) || ctx.is_key_pressed(KeyCode::A),
            right: ctx.is_key_pressed(KeyCode::Right) || ctx.is_key_pressed(KeyCode::D),
            up: ctx.is_key_pressed(KeyCode::Up) || ctx.is_key_pressed(KeyCode::W),
            down: ctx.is_key_pressed(KeyCode::Down) || ctx.is_key_pressed(KeyCode::S)
        }
    }

    /// Opposite keys cancel each other out, diagonals are not normalized
    pub fn velocity(&self) -> IVec2 {
        let axis = |negative: bool, positive: bool| positive as i32 - negative as i32;
        IVec2::new(
            axis(self.left, self.right) * SHIP_SPEED,
            axis(self.up, self.down) * SHIP_SPEED
        )
    }
}

pub fn is_fire_key(key_code: KeyCode) -> bool {
    key_code == KeyCode::Space
}

/// Fire presses collected between ticks.
///
/// Only fresh key-downs count, auto-repeat is ignored, and nothing is
/// collected until play has begun.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FireRequests {
    playing: bool,
    pending: u32
}

impl FireRequests {
    pub fn on_key_down(&mut self, key_code: KeyCode, repeat: bool) {
        if self.playing && !repeat && is_fire_key(key_code) {
            self.pending += 1;
        }
    }

    pub fn begin_play(&mut self) {
        self.playing = true;
        self.pending = 0;
    }

    pub fn take(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

/// Burst limiter for the fire button.
///
/// The first `BURST_SIZE` shots go out freely. The shot that completes a burst
/// starts a reload window, and until more than `RELOAD_TIME_MS` have passed
/// since then every request is refused. Time is in milliseconds since play started.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FireGate {
    shots_in_burst: u32,
    window_start_ms: u64
}

impl FireGate {
    pub fn is_open(&self, now_ms: u64) -> bool {
        self.shots_in_burst < BURST_SIZE ||
            now_ms.saturating_sub(self.window_start_ms) > RELOAD_TIME_MS
    }

    pub fn register_shot(&mut self, now_ms: u64) {
        if self.shots_in_burst >= BURST_SIZE {
            self.shots_in_burst = 0;
        }
        self.shots_in_burst += 1;
        if self.shots_in_burst == BURST_SIZE {
            self.window_start_ms = now_ms;
        }
    }

    pub fn shots_in_burst(&self) -> u32 {
        self.shots_in_burst
    }
}

impl GameState {
    pub fn update_player_controls(&mut self, controls: ControlState) {
        self.ship.velocity = controls.velocity();
    }

    /// Handles one fire request. Returns whether a bullet actually left the ship
    pub fn update_player_fire(&mut self, now_ms: u64) -> bool {
        if self.game_over || !self.fire_gate.is_open(now_ms) {
            return false;
        }
        if !self.spawn_bullet() {
            return false;
        }
        self.fire_gate.register_shot(now_ms);
        self.sound_cues.push(SoundCue::Shoot);
        true
    }
}
