//! Window-chrome helpers that are not part of the titlebar itself.

pub mod resize_handles;
