//! # Reusable UI Widgets

pub mod forms;
pub mod tables;
