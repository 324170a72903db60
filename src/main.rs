//! Animated submit button demo
//! A tap morphs the button into a circular spinner, sweeps a progress ring
//! and morphs back with a confirmation check mark.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .window_size(iced::Size::new(480.0, 320.0))
        .run()
}
