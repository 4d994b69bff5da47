use glam::IVec2;
use crate::game::{components::*, constants::*, GameState};
use crate::math_utils::Rect;

impl Kinematic for Ship {
    fn rect_mut(&mut self) -> &mut Rect { &mut self.rect }
    fn velocity(&self) -> IVec2 { self.velocity }
}

impl Kinematic for Bullet {
    fn rect_mut(&mut self) -> &mut Rect { &mut self.rect }
    fn velocity(&self) -> IVec2 { IVec2::new(0, -BULLET_SPEED) }
}

impl Kinematic for Debris {
    fn rect_mut(&mut self) -> &mut Rect { &mut self.rect }
    fn velocity(&self) -> IVec2 { IVec2::new(0, DEBRIS_FALL_SPEED) }
}

impl Kinematic for Star {
    fn rect_mut(&mut self) -> &mut Rect { &mut self.rect }
    fn velocity(&self) -> IVec2 { IVec2::new(0, self.speed) }
}

impl GameState {
    pub fn update_ship_position(&mut self) {
        self.ship.advance();
        self.ship.rect.clamp_within(SCREEN_WIDTH, SCREEN_HEIGHT);
    }

    pub fn update_star_sky(&mut self) {
        for star in self.stars.iter_mut() {
            star.advance();
            if star.rect.y > SCREEN_HEIGHT {
                star.respawn(&mut self.rng);
            }
        }
    }
}
