pub mod animation;
pub mod checkerboard;
pub mod clock;
pub mod config;
pub mod math;
pub mod quad;

pub use animation::{AnimationParameters, AnimationSample, Phase};
