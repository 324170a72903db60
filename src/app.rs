//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(
            base_duration_ms = settings.animation.base_duration_ms,
            dark_mode = settings.display.dark_mode,
            "settings loaded"
        );
        (Self::with_settings(settings), Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        "Submit Button".to_string()
    }

    /// Subscriptions: animation frames, requested only while a sequence
    /// is in flight so an idle window schedules no redraws
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.sequencer.is_running() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}
