use clap::Parser;

use log::{error, info};

use rhombus_zoom::config::{AnimationConfig, ConfigError};
use rhombus_zoom::AnimationParameters;

mod app;
mod args;
mod gl_wrapper;

use app::App;
use args::Args;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,rhombus_zoom=info"),
    )
    .init();

    // clion needs help in trait annotation
    let args = <Args as Parser>::parse();

    let params = match load_parameters(&args) {
        Ok(v) => v,
        Err(e) => {
            error!("Could not set up animation: {e}");
            std::process::exit(-1);
        }
    };

    info!(
        "zoom {}s, stretch {}s, start skew {}",
        params.zoom_duration(),
        params.stretch_duration(),
        params.start_skew()
    );

    let app = match App::new(args.width, args.height, params) {
        Ok(app) => app,
        Err(e) => {
            error!("{e}");
            std::process::exit(-1);
        }
    };

    app.run();
}

fn load_parameters(args: &Args) -> Result<AnimationParameters, ConfigError> {
    let file = match &args.config {
        Some(path) => AnimationConfig::load_from_path(path)?,
        None => AnimationConfig::default(),
    };

    args.animation_overrides().or(file).resolve()
}
