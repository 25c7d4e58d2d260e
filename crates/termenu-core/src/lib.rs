//! Core menu navigation and escape-command dispatch for termenu.

mod error;
mod escape;
mod io;
mod item;
mod menu;
mod render;

pub use error::MenuError;
pub use escape::{EscapeCommand, EscapeHandler, EscapeManager, DEFAULT_ESCAPE_PREFIX};
pub use io::{Console, MenuIo};
pub use item::{ItemAction, ItemHandler, MenuItem, MenuItems, Toggle};
pub use menu::{
    Input, Menu, MenuOptions, DEFAULT_BANNER_WIDTH, DEFAULT_PROMPT, MAX_BANNER_WIDTH,
};
pub use termenu_types::{normalize_key, Flow, MenuOutline, Notice, NoticeKind};

/// Result type for menu operations.
pub type Result<T> = std::result::Result<T, MenuError>;
