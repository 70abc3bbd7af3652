use dioxus::prelude::*;
use resource_block_config::Config;

mod ui;

use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("resource-block demo host starting up");
    log::info!("Config path: {}", Config::config_path().display());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => {
            log::info!("No config file found, using tool defaults");
            Config::default()
        }
        Err(e) => {
            log::warn!("Failed to load config, using tool defaults: {e}");
            Config::default()
        }
    };

    // A configured stylesheet replaces the bundled one; a broken path falls
    // back with a warning instead of aborting the app.
    let stylesheet = config
        .stylesheet
        .as_ref()
        .and_then(|path| match std::fs::read_to_string(path) {
            Ok(css) => Some(css),
            Err(e) => {
                log::warn!("Failed to read stylesheet {}: {e}", path.display());
                None
            }
        });

    rsx! {
        App {
            title_placeholder: config.title_placeholder,
            message_placeholder: config.message_placeholder,
            read_only: config.read_only,
            stylesheet,
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("resource-block")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
