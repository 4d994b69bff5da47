use rand::{rngs::StdRng, SeedableRng};
use crate::game::components::{Bullet, Debris, Ship, Star};
use crate::game::constants::*;
use crate::game::pool::Pool;
use crate::game::subsystems::player_controls_handling::FireGate;

pub mod assets;
pub mod components;
pub mod constants;
pub mod handler;
pub mod pool;
pub mod subsystems;

/// Something the simulation wants the player to hear
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Shoot,
    Hit,
    GameOver
}

/// The whole simulation: every entity pool, the score, the game over latch
/// and the random source used for respawns.
///
/// It knows nothing about windows or audio devices. Sounds are requested by
/// queueing [`SoundCue`]s which the caller drains after each tick.
pub struct GameState {
    pub ship: Ship,
    pub bullets: Pool<Bullet, MAX_BULLETS>,
    pub debris: Pool<Debris, MAX_DEBRIS>,
    pub stars: Pool<Star, MAX_STARS>,
    pub fire_gate: FireGate,
    score: u32,
    game_over: bool,
    sound_cues: Vec<SoundCue>,
    rng: StdRng
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(mut rng: StdRng) -> Self {
        let debris = Pool::from_fn(true, |_| Debris::spawn(&mut rng));
        let stars = Pool::from_fn(true, |_| Star::spawn(&mut rng));
        Self {
            ship: Ship::spawn(),
            bullets: Pool::from_fn(false, |_| Bullet::parked()),
            debris,
            stars,
            fire_gate: FireGate::default(),
            score: 0,
            game_over: false,
            sound_cues: Vec::new(),
            rng
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn drain_sound_cues(&mut self) -> std::vec::Drain<'_, SoundCue> {
        self.sound_cues.drain(..)
    }

    fn latch_game_over(&mut self) {
        if self.game_over {
            return;
        }
        self.game_over = true;
        self.sound_cues.push(SoundCue::GameOver);
        log::info!("Game over, final score: {}", self.score);
    }

    /// One fixed simulation tick. Does nothing once the game is over
    pub fn update_game(&mut self) {
        if self.game_over {
            return;
        }
        self.update_ship_position();
        self.update_bullet_collisions();
        self.update_debris_collisions();
        self.update_star_sky();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
