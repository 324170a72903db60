//! UI module for the submit button demo
//!
//! # Architecture
//!
//! - **Animation** (`animation`): the stage sequencer and easing curves
//! - **Widgets** (`widgets`): composable UI patterns without business logic
//! - **Theme** (`theme`): color palette shared across light and dark modes

pub mod animation;
pub mod theme;
pub mod widgets;
