//! Control signal passed back up the menu call chain.

/// What a menu loop should do after an escape command has run.
///
/// `Exit` is the only non-local control transfer a menu knows about. It is
/// deliberately not an error: handler failures travel through `Result`, while
/// leaving a menu travels through this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Keep prompting in the current menu
    #[default]
    Continue,
    /// Leave the innermost running menu
    Exit,
}

impl Flow {
    /// True if the current menu loop should stop.
    pub fn is_exit(self) -> bool {
        matches!(self, Flow::Exit)
    }
}
