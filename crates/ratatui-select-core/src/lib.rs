//! `ratatui-select-core` provides the building blocks of a select dropdown for terminal UIs.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: everything runs on the main thread, and shared state is `Rc`-based.
//! - Pointer-driven: the widget reacts to clicks and the scroll wheel, hit-testing against the
//!   geometry of its last render.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `ratatui-select`. Useful entry points:
//! - [`dropdown::SelectDropdown`]: the widget, in single- or multi-select mode.
//! - [`options::OptionSet`]: the immutable, ordered labels a dropdown offers.
//! - [`selection::SelectionState`]: the tagged single/multi selection value.
//! - [`listener::PointerListeners`]: host-wide pointer-down registry for outside-click dismissal.
//!
//! ## Logging
//!
//! State transitions emit `tracing` events at debug level (`event = "dropdown.*"`). Install a
//! subscriber in your app to see them; nothing is printed otherwise.
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod input;
pub mod render;
pub mod viewport;

pub mod options;
pub mod selection;

pub mod layout;
pub mod listener;

pub mod dropdown;
