//! BDD step definitions for the greeting widget

pub mod widget_steps;
