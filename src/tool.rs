use serde::{Deserialize, Serialize};

/// Thickness of the thin marker, in canvas units
pub const THIN_MARKER: f32 = 2.0;
/// Thickness of the thick marker
pub const THICK_MARKER: f32 = 6.0;

/// Sticker glyphs offered by default in the tools panel
pub const DEFAULT_STICKERS: [&str; 3] = ["🙂", "🌸", "⭐"];

/// The active drawing tool. Exactly one is selected at any time; switching
/// tools never touches the history or an element already being drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Tool {
    /// Freehand marker with a fixed thickness
    Marker { thickness: f32 },
    /// Glyph stamp
    Sticker { glyph: String },
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Marker {
            thickness: THIN_MARKER,
        }
    }
}

impl Tool {
    /// Short label for the tools panel
    pub fn label(&self) -> String {
        match self {
            Tool::Marker { thickness } if *thickness <= THIN_MARKER => "Thin marker".to_owned(),
            Tool::Marker { .. } => "Thick marker".to_owned(),
            Tool::Sticker { glyph } => format!("Sticker {glyph}"),
        }
    }
}
