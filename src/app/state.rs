//! Application state

use crate::features::Settings;
use crate::ui::animation::{ButtonMetrics, Sequencer};

/// Top-level application state
pub struct App {
    /// Persisted user preferences
    pub settings: Settings,
    /// The submit button's animation engine, sole owner of the shared
    /// parameter state the renderer reads
    pub sequencer: Sequencer,
}

impl App {
    /// Build the application state from loaded settings
    pub fn with_settings(settings: Settings) -> Self {
        let metrics = ButtonMetrics::new(settings.animation.base_duration());
        Self {
            settings,
            sequencer: Sequencer::new(metrics),
        }
    }
}
