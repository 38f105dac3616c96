use iced::{Application, Settings};
use songlist::{config::Config, gui};

fn main() -> iced::Result {
    env_logger::init();

    let config = Config::load_or_default();
    gui::App::run(Settings {
        window: iced::window::Settings {
            size: config.window_size,
            ..Default::default()
        },
        ..Settings::with_flags(config)
    })
}
