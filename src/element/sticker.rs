use egui::{Pos2, Rect, Vec2};

use super::Element;
use crate::element::common;
use crate::surface::DrawSurface;

/// Sticker element: a single glyph (usually an emoji) stamped at one
/// position. Extending a sticker moves it instead of growing it, so it has
/// exactly one location at any time, its latest.
#[derive(Clone, Debug)]
pub struct Sticker {
    id: usize,
    pos: Pos2,
    glyph: String,
}

impl Sticker {
    pub(crate) fn new(id: usize, pos: Pos2, glyph: String) -> Self {
        Self { id, pos, glyph }
    }

    /// Current placement of the sticker
    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    /// The glyph this sticker stamps
    pub fn glyph(&self) -> &str {
        &self.glyph
    }
}

impl Element for Sticker {
    fn id(&self) -> usize {
        self.id
    }

    fn kind(&self) -> &'static str {
        "sticker"
    }

    fn rect(&self) -> Rect {
        Rect::from_center_size(self.pos, Vec2::splat(common::STICKER_FONT_SIZE))
    }

    fn extend(&mut self, pos: Pos2) {
        // Reposition rather than accumulate
        self.pos = pos;
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.glyph(
            &self.glyph,
            self.pos,
            common::STICKER_FONT_SIZE,
            common::STROKE_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_replaces_position() {
        let mut sticker = Sticker::new(1, Pos2::new(10.0, 10.0), "🌸".to_owned());
        sticker.extend(Pos2::new(50.0, 50.0));

        assert_eq!(sticker.pos(), Pos2::new(50.0, 50.0));
        assert_eq!(sticker.glyph(), "🌸");
        assert_eq!(sticker.rect().center(), Pos2::new(50.0, 50.0));
    }
}
