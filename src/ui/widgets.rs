//! Reusable UI widgets - composable components without business logic

pub mod submit_button;
