//! Application messages

/// Application messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Submit button tapped
    SubmitPressed,
    /// Animation frame tick (vsync rate, only subscribed while running)
    AnimationTick,
}
