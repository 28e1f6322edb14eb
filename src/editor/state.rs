use crate::topology::{EdgeIndex, Removal};

/// Whether a vertex is currently held by the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(EdgeIndex),
}

/// Interaction state owned by the host and passed into every
/// [`Editor::handle`](super::Editor::handle) call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorState {
    pub drag: DragState,
}

impl EditorState {
    /// Creates an idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The vertex being dragged, if any.
    #[must_use]
    pub fn dragged_vertex(&self) -> Option<EdgeIndex> {
        match self.drag {
            DragState::Idle => None,
            DragState::Dragging(vertex) => Some(vertex),
        }
    }

    /// Follows a slot relocation caused by a delete.
    ///
    /// Drops the drag if the dragged vertex itself was deleted.
    pub fn apply_removal(&mut self, removal: &Removal) {
        if let DragState::Dragging(vertex) = self.drag {
            self.drag = removal
                .remap(vertex)
                .map_or(DragState::Idle, DragState::Dragging);
        }
    }
}
