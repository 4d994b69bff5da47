use crate::game::{assets::{AssetBundle, Sprites}, constants::*, GameState};
use crate::math_utils::Rect;
use crate::rendering::blittable::{Blittable, BlitBuilder};
use crate::rendering::fonts::true_type::Font;
use crate::rendering::{Rgba, shapes};
use crate::window::BlitContext;

fn blit_stretched(ctx: &mut BlitContext, sprite: &impl Blittable<Rgba>, rect: Rect) {
    if rect.is_empty() {
        return;
    }
    BlitBuilder::create(ctx, sprite)
        .with_dest_pos(rect.x, rect.y)
        .with_dest_size(rect.w as usize, rect.h as usize)
        .blit();
}

fn draw_text_in_box(ctx: &mut BlitContext, font: &mut Font, text: &str, color: Rgba, rect: Rect) {
    let rendered = font.render_text(text, color);
    blit_stretched(ctx, &rendered, rect);
}

const FULL_SCREEN: Rect = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);

impl GameState {
    pub fn render(&self, ctx: &mut BlitContext, assets: &mut AssetBundle) {
        self.render_scene(ctx, &assets.sprites);
        self.render_hud(ctx, &mut assets.font);
    }

    /// Background, stars and every entity, back to front
    pub fn render_scene(&self, ctx: &mut BlitContext, sprites: &Sprites) {
        blit_stretched(ctx, &sprites.background.opaque(), FULL_SCREEN);

        for star in self.stars.iter_active() {
            let Rect { x, y, w, h } = star.rect;
            shapes::draw_rectangle(ctx, x, y, w, h, WHITE);
        }

        blit_stretched(ctx, &sprites.ship, self.ship.rect);

        for bullet in self.bullets.iter_active() {
            blit_stretched(ctx, &sprites.bullet, bullet.rect);
        }

        for debris in self.debris.iter_active() {
            blit_stretched(ctx, &sprites.debris, debris.rect);
        }
    }

    pub fn render_hud(&self, ctx: &mut BlitContext, font: &mut Font) {
        draw_text_in_box(ctx, font, &format!("SCORE: {}", self.score), WHITE, SCORE_BOX);

        if self.game_over {
            let Rect { x, y, w, h } = BANNER_BOX;
            shapes::fill_rectangle(ctx, x, y, w, h, WHITE);
            draw_text_in_box(ctx, font, GAME_OVER_TEXT, GAME_OVER_TEXT_COLOR, GAME_OVER_TEXT_BOX);
        }
    }
}

/// Shown once before play starts
pub fn render_welcome(ctx: &mut BlitContext, assets: &mut AssetBundle) {
    let background = assets.sprites.welcome_background
        .as_ref()
        .unwrap_or(&assets.sprites.background);
    blit_stretched(ctx, &background.opaque(), FULL_SCREEN);
    draw_text_in_box(ctx, &mut assets.font, WELCOME_TEXT, WHITE, WELCOME_TEXT_BOX);
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use crate::rendering::BlittableSurface;
    use crate::rendering::blittable::BufferProvider;
    use super::*;

    const BACKGROUND: Rgba = [0, 0, 40, 255];
    const SHIP: Rgba = [0, 200, 0, 255];
    const BULLET: Rgba = [200, 200, 0, 255];
    const DEBRIS: Rgba = [120, 60, 0, 255];

    fn flat_sprites() -> Sprites {
        Sprites {
            background: BlittableSurface::filled(4, 4, BACKGROUND),
            ship: BlittableSurface::filled(8, 8, SHIP),
            debris: BlittableSurface::filled(5, 5, DEBRIS),
            bullet: BlittableSurface::filled(2, 2, BULLET),
            welcome_background: None
        }
    }

    fn pixel_at(ctx: &BlitContext, x: i32, y: i32) -> Rgba {
        ctx.get_buffer()[(y * SCREEN_WIDTH + x) as usize]
    }

    #[test]
    fn test_scene_draws_entities_over_background() {
        let mut state = GameState::with_rng(StdRng::seed_from_u64(9));
        for debris in state.debris.iter_mut() {
            debris.rect = Rect::new(10, 10, 30, 30);
        }
        for star in state.stars.iter_mut() {
            star.rect = Rect::new(700, 700, STAR_SIZE, STAR_SIZE);
        }
        assert!(state.spawn_bullet());

        let mut ctx = BlitContext::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize);
        state.render_scene(&mut ctx, &flat_sprites());

        let ship = state.ship.rect;
        assert_eq!(pixel_at(&ctx, 0, SCREEN_HEIGHT - 1), BACKGROUND);
        assert_eq!(pixel_at(&ctx, ship.x + ship.w / 2, ship.y + ship.h - 1), SHIP);
        assert_eq!(pixel_at(&ctx, 12, 38), DEBRIS);
        assert_eq!(pixel_at(&ctx, 701, 701), WHITE);
        let bullet = state.bullets.get(0).map(|it| it.rect).unwrap();
        assert_eq!(pixel_at(&ctx, bullet.x + 1, bullet.y + 1), BULLET);
    }

    #[test]
    fn test_parked_bullets_are_not_drawn() {
        let mut state = GameState::with_rng(StdRng::seed_from_u64(10));
        for debris in state.debris.iter_mut() {
            debris.rect = Rect::new(0, -100, 20, 20);
        }
        let mut ctx = BlitContext::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize);
        state.render_scene(&mut ctx, &flat_sprites());
        assert!(ctx.get_buffer().iter().all(|it| *it != BULLET));
    }
}
