use rand::{rngs::StdRng, Rng, SeedableRng};
use space_debris::game::constants::*;
use space_debris::game::subsystems::player_controls_handling::ControlState;
use space_debris::game::{GameState, SoundCue};
use space_debris::math_utils::Rect;

fn seeded_state(seed: u64) -> GameState {
    GameState::with_rng(StdRng::seed_from_u64(seed))
}

fn park_all_debris(state: &mut GameState) {
    for debris in state.debris.iter_mut() {
        debris.rect = Rect::new(700, -10000, 20, 20);
    }
}

#[test]
fn single_shot_flies_off_the_top_without_scoring() {
    let mut state = seeded_state(42);
    park_all_debris(&mut state);

    assert!(state.update_player_fire(0));
    assert_eq!(state.bullets.active_count(), 1);
    assert_eq!(state.bullets.get(0).map(|it| it.rect), Some(Rect::new(365, 700, 20, 20)));

    let mut last_y = 700;
    let mut ticks = 0;
    while state.bullets.is_active(0) {
        state.update_game();
        ticks += 1;
        if state.bullets.is_active(0) {
            let y = state.bullets.get(0).map(|it| it.rect.y).unwrap();
            assert_eq!(y, last_y - BULLET_SPEED);
            last_y = y;
        }
        assert!(ticks <= 200);
    }

    // 700 / 5 = 140 ticks to reach y == 0, one more to drop below it
    assert_eq!(ticks, 141);
    assert_eq!(state.score(), 0);
    assert!(!state.is_game_over());
}

#[test]
fn bullet_hit_scores_and_recycles_debris() {
    let mut state = seeded_state(7);
    park_all_debris(&mut state);
    if let Some(debris) = state.debris.get_mut(0) {
        debris.rect = Rect::new(360, 680, 30, 30);
    }

    assert!(state.update_player_fire(0));
    state.update_game();

    assert_eq!(state.score(), 1);
    assert!(!state.bullets.is_active(0));
    assert_eq!(state.debris.active_count(), MAX_DEBRIS);
    let respawned = state.debris.get(0).map(|it| it.rect).unwrap();
    assert!(respawned.y < 0);
    assert_eq!(state.drain_sound_cues().collect::<Vec<_>>(), vec![SoundCue::Shoot, SoundCue::Hit]);
}

#[test]
fn debris_on_ship_freezes_the_game() {
    let mut state = seeded_state(3);
    let ship_rect = state.ship.rect;
    if let Some(debris) = state.debris.get_mut(0) {
        debris.rect = ship_rect;
    }

    state.update_game();
    assert!(state.is_game_over());

    let ship_after = state.ship.rect;
    let debris_after: Vec<_> = state.debris.iter().map(|it| it.rect).collect();
    let stars_after: Vec<_> = state.stars.iter().map(|it| it.rect).collect();

    state.update_player_controls(ControlState { left: true, ..Default::default() });
    for _ in 0..10 {
        state.update_game();
    }
    assert!(!state.update_player_fire(10_000));

    assert_eq!(state.ship.rect, ship_after);
    assert_eq!(state.debris.iter().map(|it| it.rect).collect::<Vec<_>>(), debris_after);
    assert_eq!(state.stars.iter().map(|it| it.rect).collect::<Vec<_>>(), stars_after);
    assert_eq!(state.drain_sound_cues().collect::<Vec<_>>(), vec![SoundCue::GameOver]);
}

#[test]
fn random_play_keeps_invariants() {
    let mut state = seeded_state(1234);
    let mut input = StdRng::seed_from_u64(99);
    let mut last_score = 0;
    let mut was_over = false;

    for tick in 0..5000u64 {
        let controls = ControlState {
            left: input.gen_bool(0.4),
            right: input.gen_bool(0.4),
            up: input.gen_bool(0.4),
            down: input.gen_bool(0.4)
        };
        state.update_player_controls(controls);
        if input.gen_bool(0.2) {
            state.update_player_fire(tick * TICK_INTERVAL_MS);
        }
        state.update_game();

        let ship = state.ship.rect;
        assert!(ship.x >= 0 && ship.x <= SCREEN_WIDTH - SHIP_WIDTH);
        assert!(ship.y >= 0 && ship.y <= SCREEN_HEIGHT - SHIP_HEIGHT);
        assert_eq!(state.debris.active_count(), MAX_DEBRIS);
        assert!(state.bullets.active_count() <= MAX_BULLETS);
        assert!(state.score() >= last_score);
        assert!(!(was_over && !state.is_game_over()));

        last_score = state.score();
        was_over = state.is_game_over();
        state.drain_sound_cues().for_each(drop);
    }
}

#[test]
fn fire_request_without_a_free_slot_is_dropped() {
    let mut state = seeded_state(8);
    park_all_debris(&mut state);
    for _ in 0..MAX_BULLETS {
        assert!(state.update_player_fire(0));
    }
    // burst is spent and every slot is in flight
    assert!(!state.update_player_fire(RELOAD_TIME_MS + 1));
    assert_eq!(state.bullets.active_count(), MAX_BULLETS);
    let shots = state.drain_sound_cues().filter(|it| *it == SoundCue::Shoot).count();
    assert_eq!(shots, MAX_BULLETS);
}

#[test]
fn burst_reloads_after_the_window() {
    let mut state = seeded_state(9);
    park_all_debris(&mut state);
    for _ in 0..BURST_SIZE {
        assert!(state.update_player_fire(0));
    }
    // let every bullet leave the screen
    for _ in 0..200 {
        state.update_game();
    }
    assert_eq!(state.bullets.active_count(), 0);

    assert!(!state.update_player_fire(100));
    assert!(!state.update_player_fire(RELOAD_TIME_MS));
    assert!(state.update_player_fire(RELOAD_TIME_MS + 1));
    assert!(state.update_player_fire(RELOAD_TIME_MS + 2));
}
