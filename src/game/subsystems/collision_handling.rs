use crate::game::{components::*, constants::*, GameState, SoundCue};
use crate::math_utils::RectIntersectionQuery;

impl GameState {
    pub fn update_bullet_collisions(&mut self) {
        for bullet_idx in 0..self.bullets.capacity() {
            let bullet_rect = match self.bullets.get_active_mut(bullet_idx) {
                Some(bullet) => {
                    bullet.advance();
                    bullet.rect
                },
                None => continue
            };

            // first debris hit wins, a bullet is consumed by a single hit
            let hit = self.debris
                .iter()
                .position(|debris| debris.rect.y <= SCREEN_HEIGHT && debris.rect.has_intersection(&bullet_rect));

            if let Some(debris_idx) = hit {
                if let Some(debris) = self.debris.get_mut(debris_idx) {
                    debris.respawn(&mut self.rng);
                }
                self.bullets.release(bullet_idx);
                self.score += 1;
                self.sound_cues.push(SoundCue::Hit);
            } else if bullet_rect.y < 0 {
                self.bullets.release(bullet_idx);
            }
        }
    }

    pub fn update_debris_collisions(&mut self) {
        let ship_rect = self.ship.rect;
        let mut ship_hit = false;
        for debris in self.debris.iter_mut() {
            if debris.rect.y <= SCREEN_HEIGHT {
                debris.advance();
                if debris.rect.has_intersection(&ship_rect) {
                    ship_hit = true;
                }
            } else {
                debris.respawn(&mut self.rng);
            }
        }
        if ship_hit {
            self.latch_game_over();
        }
    }
}
