use std::path::PathBuf;

use clap::Parser;

use rhombus_zoom::config::AnimationConfig;

#[derive(Debug, Parser)]
#[command(about = "Zooms a skewed checkerboard quad into place")]
pub struct Args {
    /// Initial window width
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    /// Initial window height
    #[arg(long, default_value_t = 600)]
    pub height: u32,
    /// JSON5 file with animation settings, overridden by the flags below
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Seconds until the quad reaches full size
    #[arg(long)]
    pub zoom_duration: Option<f32>,
    /// Seconds of the stretch phase following the zoom
    #[arg(long)]
    pub stretch_duration: Option<f32>,
    /// Initial slant of the quad in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub skew_angle: Option<f32>,
}

impl Args {
    pub fn animation_overrides(&self) -> AnimationConfig {
        AnimationConfig {
            zoom_duration: self.zoom_duration,
            stretch_duration: self.stretch_duration,
            skew_angle: self.skew_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["rhombus-zoom"]);

        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.animation_overrides(), AnimationConfig::default());
    }

    #[test]
    fn overrides() {
        let args = Args::parse_from([
            "rhombus-zoom",
            "--zoom-duration",
            "2.5",
            "--skew-angle",
            "-30",
            "-c",
            "anim.json5",
        ]);

        let overrides = args.animation_overrides();
        assert_eq!(overrides.zoom_duration, Some(2.5));
        assert_eq!(overrides.stretch_duration, None);
        assert_eq!(overrides.skew_angle, Some(-30.0));
        assert_eq!(args.config, Some(PathBuf::from("anim.json5")));
    }
}
