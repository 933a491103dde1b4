use egui::{Pos2, Rect};

// Re-export concrete implementations
pub(crate) mod common;
pub(crate) mod sticker;
pub(crate) mod stroke;

pub use common::{CANVAS_BACKGROUND, PREVIEW_TINT, STICKER_FONT_SIZE, STROKE_COLOR};
pub use sticker::Sticker;
pub use stroke::Stroke;

use crate::surface::DrawSurface;

/// Common trait that all drawable elements must implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> usize;

    /// Get the element kind as a string
    fn kind(&self) -> &'static str;

    /// Get the bounding rectangle for this element
    fn rect(&self) -> Rect;

    /// Grow the element with a new pointer position: strokes append a point,
    /// stickers move to it.
    fn extend(&mut self, pos: Pos2);

    /// Draw the element onto the given surface. Drawing never mutates the
    /// element, so repeated calls produce identical output.
    fn draw(&self, surface: &mut dyn DrawSurface);
}

/// Enumeration of all element kinds. The set is closed: every dispatch site
/// matches exhaustively, so adding a variant is a compile-time checklist.
#[derive(Clone, Debug)]
pub enum ElementType {
    Stroke(stroke::Stroke),
    Sticker(sticker::Sticker),
}

impl Element for ElementType {
    fn id(&self) -> usize {
        match self {
            ElementType::Stroke(s) => s.id(),
            ElementType::Sticker(s) => s.id(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ElementType::Stroke(_) => "stroke",
            ElementType::Sticker(_) => "sticker",
        }
    }

    fn rect(&self) -> Rect {
        match self {
            ElementType::Stroke(s) => s.rect(),
            ElementType::Sticker(s) => s.rect(),
        }
    }

    fn extend(&mut self, pos: Pos2) {
        match self {
            ElementType::Stroke(s) => s.extend(pos),
            ElementType::Sticker(s) => s.extend(pos),
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        match self {
            ElementType::Stroke(s) => s.draw(surface),
            ElementType::Sticker(s) => s.draw(surface),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use crate::id_generator::next_element_id;

    /// Create a new stroke element seeded at `origin`
    pub fn create_stroke(origin: Pos2, thickness: f32) -> ElementType {
        ElementType::Stroke(stroke::Stroke::new(next_element_id(), origin, thickness))
    }

    /// Create a new sticker element placed at `pos`
    pub fn create_sticker(pos: Pos2, glyph: impl Into<String>) -> ElementType {
        ElementType::Sticker(sticker::Sticker::new(next_element_id(), pos, glyph.into()))
    }
}
