//! Menu tree data, action dispatch, and the menu interaction state machine.

pub mod actions;
pub mod controller;
pub mod model;

pub use actions::{ActionHandler, ActionRegistry, DispatchError};
pub use controller::{MenuBarState, MenuController, SUPPRESS_WINDOW_SECS};
pub use model::{ActionItem, ActionValue, MenuEntry, MenuItem, SEPARATOR_NAME};
