//! UI widgets for the TUI application
//!
//! Reusable components rendered by the demo host.

pub mod selector_widget;
