mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;
mod user_settings;


use iced::application;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Radar de Fontes");

    application(
        app::SourceRadarApp::build,
        app::SourceRadarApp::handle_update,
        app::SourceRadarApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::SourceRadarApp::theme)
    .window_size(iced::Size::new(1000.0, 760.0))
    .run()
}
