//! Message handling

use std::time::Instant;

use iced::Task;

use super::message::Message;
use super::state::App;

impl App {
    /// Handle a message and return any follow-up task
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SubmitPressed => {
                self.sequencer.activate(Instant::now());
                Task::none()
            }
            Message::AnimationTick => {
                self.sequencer.tick(Instant::now());
                Task::none()
            }
        }
    }
}
