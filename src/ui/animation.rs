//! Animation system for the submit button
//!
//! The sequencer drives a fixed chain of interpolated stages against a
//! wall-clock timeline; easing curves shape each stage's progress fraction.
//! Rendering stays elsewhere: the sequencer only writes parameter state and
//! relies on the app's frame subscription to trigger redraws.

pub mod easing;
pub mod sequencer;

pub use easing::Easing;
pub use sequencer::{ButtonMetrics, ButtonParams, Sequencer, Stage};
