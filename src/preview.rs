use egui::Pos2;

use crate::element::{PREVIEW_TINT, STICKER_FONT_SIZE};
use crate::surface::DrawSurface;
use crate::tool::Tool;

/// Ephemeral hint of what the active tool would draw at the cursor.
///
/// A preview is recomputed on every idle cursor move and on tool switches,
/// and never enters the history. While an element is being drawn there is no
/// preview at all, so the two can never render together.
#[derive(Clone, Debug, PartialEq)]
pub enum ToolPreview {
    /// A dot the size of the marker tip
    Marker { pos: Pos2, thickness: f32 },
    /// The glyph about to be stamped, ghosted
    Sticker { pos: Pos2, glyph: String },
}

impl ToolPreview {
    /// Build the preview the given tool shows at `pos`
    pub fn for_tool(tool: &Tool, pos: Pos2) -> Self {
        match tool {
            Tool::Marker { thickness } => ToolPreview::Marker {
                pos,
                thickness: *thickness,
            },
            Tool::Sticker { glyph } => ToolPreview::Sticker {
                pos,
                glyph: glyph.clone(),
            },
        }
    }

    /// Draw the preview onto the surface
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        match self {
            ToolPreview::Marker { pos, thickness } => {
                surface.circle(*pos, thickness / 2.0, PREVIEW_TINT);
            }
            ToolPreview::Sticker { pos, glyph } => {
                surface.glyph(glyph, *pos, STICKER_FONT_SIZE, PREVIEW_TINT);
            }
        }
    }
}
