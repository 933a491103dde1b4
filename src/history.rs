use log::debug;

use crate::element::{Element, ElementType};

/// Manages the drawn elements for undo/redo functionality.
///
/// Elements move between two stacks: `committed` holds everything visible,
/// bottom-to-top in draw order, and `redo` holds what an unbroken run of
/// undos has peeled off. Each element lives in exactly one stack at a time.
#[derive(Default)]
pub struct History {
    /// Elements on the canvas, oldest first
    committed: Vec<ElementType>,
    /// Elements that can be redone, most recently undone on top
    redo: Vec<ElementType>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit an element to the canvas. Any redoable elements are dropped:
    /// the redo stack is only valid immediately after a run of undos.
    pub fn commit(&mut self, element: ElementType) {
        debug!("committing {} {}", element.kind(), element.id());
        self.committed.push(element);
        self.redo.clear();
    }

    /// Undo the most recent commit. Returns false (and changes nothing) when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(element) => {
                self.redo.push(element);
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone element. Returns false (and changes
    /// nothing) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(element) => {
                self.committed.push(element);
                true
            }
            None => false,
        }
    }

    /// Drop everything from both stacks
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo.clear();
    }

    /// Returns true if there are elements that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are elements that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// The committed elements, oldest first
    pub fn committed(&self) -> &[ElementType] {
        &self.committed
    }

    /// The redoable elements, most recently undone last
    pub fn redo_stack(&self) -> &[ElementType] {
        &self.redo
    }
}
