//! Application view rendering

use iced::widget::container;
use iced::{Alignment, Element, Fill};

use super::message::Message;
use super::state::App;
use crate::ui::{theme, widgets};

impl App {
    /// Build the view: the submit button centered in the window
    pub fn view(&self) -> Element<'_, Message> {
        let button = widgets::submit_button::view(
            self.sequencer.params(),
            self.sequencer.metrics(),
            "Submit",
        );

        container(button)
            .width(Fill)
            .height(Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center)
            .style(theme::main_content)
            .into()
    }
}
