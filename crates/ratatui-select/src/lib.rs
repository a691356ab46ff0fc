//! `ratatui-select` is a single- and multi-select dropdown for ratatui apps.
//!
//! The widget and its primitives live in `ratatui-select-core` and are re-exported here. This
//! crate adds [`page::DemoPage`], a small host that offers one fixed option list to a
//! multi-select and a single-select dropdown and routes terminal input to them.
//!
//! Enable the `crossterm` feature to convert crossterm events with
//! [`crossterm_input::input_event_from_crossterm`].
pub use ratatui_select_core::dropdown;
pub use ratatui_select_core::input;
pub use ratatui_select_core::layout;
pub use ratatui_select_core::listener;
pub use ratatui_select_core::options;
pub use ratatui_select_core::render;
pub use ratatui_select_core::selection;
pub use ratatui_select_core::theme;
pub use ratatui_select_core::viewport;

#[cfg(feature = "crossterm")]
pub use ratatui_select_core::crossterm_input;

pub mod page;
