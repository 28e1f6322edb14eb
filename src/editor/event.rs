use crate::topology::{EdgeIndex, Removal};

/// A pointer button.
///
/// Devices with a single means of input report it as `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Middle,
    Right,
    Other(u64),
}

/// Pointer input forwarded by the host, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed.
    ButtonDown { button: Button, x: f64, y: f64 },
    /// A button was released.
    ButtonUp { button: Button, x: f64, y: f64 },
    /// The pointer moved. Hosts only need to send these while a drag is active.
    Move { x: f64, y: f64 },
}

/// What an input event did to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing changed.
    Unchanged,
    /// A vertex was grabbed.
    DragStarted(EdgeIndex),
    /// The grabbed vertex was released.
    DragEnded,
    /// The grabbed vertex moved to a new cell.
    Moved(EdgeIndex),
    /// A vertex was inserted into the given slot.
    Inserted(EdgeIndex),
    /// A vertex was deleted.
    Deleted(Removal),
}

impl EditOutcome {
    /// Returns `true` if the polygon (and so the fill grid) changed.
    #[must_use]
    pub fn changed_geometry(&self) -> bool {
        matches!(self, Self::Moved(_) | Self::Inserted(_) | Self::Deleted(_))
    }
}
