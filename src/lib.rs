pub mod audio;
pub mod error;
pub mod format_loaders;
pub mod game;
pub mod math_utils;
pub mod rendering;
pub mod utility;
pub mod window;
