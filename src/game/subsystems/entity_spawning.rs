use glam::IVec2;
use rand::Rng;
use crate::game::{components::*, constants::*, GameState};
use crate::math_utils::Rect;

impl Ship {
    /// Horizontally centered, just above the bottom edge
    pub fn spawn() -> Self {
        Self {
            rect: Rect::new(
                (SCREEN_WIDTH - SHIP_WIDTH) / 2,
                SCREEN_HEIGHT - SHIP_HEIGHT - SHIP_BOTTOM_MARGIN,
                SHIP_WIDTH,
                SHIP_HEIGHT
            ),
            velocity: IVec2::ZERO
        }
    }
}

impl Bullet {
    /// Placeholder for a free slot, out of sight
    pub fn parked() -> Self {
        Self {
            rect: Rect::new(-BULLET_WIDTH, -BULLET_HEIGHT, BULLET_WIDTH, BULLET_HEIGHT)
        }
    }

    pub fn launch_from(ship_rect: &Rect) -> Self {
        Self {
            rect: Rect::new(
                ship_rect.x + (ship_rect.w - BULLET_WIDTH) / 2,
                ship_rect.y - BULLET_HEIGHT,
                BULLET_WIDTH,
                BULLET_HEIGHT
            )
        }
    }
}

impl Debris {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut debris = Self { rect: Rect::default() };
        debris.respawn(rng);
        debris
    }
}

impl Respawn for Debris {
    /// New size and column, somewhere above the top edge so it slides in
    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let size = rng.gen_range(DEBRIS_MIN_SIZE..DEBRIS_MAX_SIZE);
        self.rect = Rect::new(
            rng.gen_range(0..SCREEN_WIDTH - size),
            rng.gen_range(-SCREEN_HEIGHT..=-size),
            size,
            size
        );
    }
}

impl Star {
    /// Initial stars are scattered over the whole screen
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            rect: Rect::new(
                rng.gen_range(0..SCREEN_WIDTH),
                rng.gen_range(0..SCREEN_HEIGHT),
                STAR_SIZE,
                STAR_SIZE
            ),
            speed: rng.gen_range(STAR_MIN_SPEED..=STAR_MAX_SPEED)
        }
    }
}

impl Respawn for Star {
    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rect.x = rng.gen_range(0..SCREEN_WIDTH);
        self.rect.y = 0;
        self.speed = rng.gen_range(STAR_MIN_SPEED..=STAR_MAX_SPEED);
    }
}

impl GameState {
    /// Puts a bullet at the ship's nose. Returns `false` when every bullet slot is in flight
    pub fn spawn_bullet(&mut self) -> bool {
        let ship_rect = self.ship.rect;
        match self.bullets.allocate() {
            Some((_, bullet)) => {
                *bullet = Bullet::launch_from(&ship_rect);
                true
            },
            None => false
        }
    }
}
