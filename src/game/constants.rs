use crate::math_utils::Rect;
use crate::rendering::Rgba;

pub const WINDOW_TITLE: &str = "Space Debris Shooter";
pub const SCREEN_WIDTH: i32 = 750;
pub const SCREEN_HEIGHT: i32 = 800;

pub const SHIP_WIDTH: i32 = 60;
pub const SHIP_HEIGHT: i32 = 60;
pub const SHIP_SPEED: i32 = 5;
pub const SHIP_BOTTOM_MARGIN: i32 = 20;

pub const BULLET_WIDTH: i32 = 20;
pub const BULLET_HEIGHT: i32 = 20;
pub const BULLET_SPEED: i32 = 5;

pub const DEBRIS_FALL_SPEED: i32 = 2;
pub const DEBRIS_MIN_SIZE: i32 = 20;
pub const DEBRIS_MAX_SIZE: i32 = 50; // exclusive

pub const STAR_SIZE: i32 = 2;
pub const STAR_MIN_SPEED: i32 = 1;
pub const STAR_MAX_SPEED: i32 = 3; // inclusive

pub const MAX_BULLETS: usize = 10;
pub const MAX_DEBRIS: usize = 20;
pub const MAX_STARS: usize = 50;

pub const TICK_INTERVAL_MS: u64 = 16;
pub const RELOAD_TIME_MS: u64 = 2000;
pub const BURST_SIZE: u32 = 10;
pub const WELCOME_SCREEN_DURATION_MS: u64 = 2000;

// asset file names, resolved against the asset directory
pub const BACKGROUND_IMAGE: &str = "one.png";
pub const SHIP_IMAGE: &str = "rocket.png";
pub const DEBRIS_IMAGE: &str = "asteroid.png";
pub const BULLET_IMAGE: &str = "bullet.png";
pub const WELCOME_BACKGROUND_IMAGE: &str = "bg.png";
pub const FONT_FILE: &str = "game_over.ttf";
pub const FONT_SIZE: f32 = 48.0;
pub const SHOOT_SOUND: &str = "shoot.wav";
pub const HIT_SOUND: &str = "destroyed.wav";
pub const GAME_OVER_SOUND: &str = "game_over.wav";

pub const WHITE: Rgba = [255, 255, 255, 255];
pub const GAME_OVER_TEXT_COLOR: Rgba = [255, 26, 140, 255];

pub const SCORE_BOX: Rect = Rect::new(SCREEN_WIDTH - 120, 20, 100, 30);
pub const BANNER_BOX: Rect = Rect::new(0, SCREEN_HEIGHT / 2 - 50, SCREEN_WIDTH, 60);
pub const GAME_OVER_TEXT_BOX: Rect = Rect::new((SCREEN_WIDTH - 200) / 2, SCREEN_HEIGHT / 2 - 55, 200, 60);
pub const WELCOME_TEXT_BOX: Rect = Rect::new((SCREEN_WIDTH - 300) / 2, SCREEN_HEIGHT / 2 - 25, 300, 50);

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const WELCOME_TEXT: &str = "Don't fly too close!";
