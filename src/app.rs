use log::{info, warn};

use crate::input::InputHandler;
use crate::panels;
use crate::session::SketchSession;
use crate::tool::Tool;

/// Logical canvas size, in canvas units
pub const CANVAS_WIDTH: u32 = 256;
pub const CANVAS_HEIGHT: u32 = 256;

/// Upscale factor applied when exporting the canvas
pub const EXPORT_SCALE: u32 = 4;

#[cfg(not(target_arch = "wasm32"))]
const EXPORT_FILE: &str = "sketch.png";

pub struct SketchApp {
    session: SketchSession,
    input: InputHandler,
    /// Contents of the custom-sticker text field
    custom_glyph: String,
    /// Last session revision we presented a frame for
    presented_revision: u64,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            session: SketchSession::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            input: InputHandler::new(),
            custom_glyph: String::new(),
            presented_revision: 0,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();

        // Restore the last selected tool; canvas content is session-only.
        if let Some(tool) = cc
            .storage
            .and_then(|storage| eframe::get_value::<Tool>(storage, eframe::APP_KEY))
        {
            app.session.set_tool(tool);
        }

        app
    }

    pub fn session(&self) -> &SketchSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SketchSession {
        &mut self.session
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn custom_glyph_mut(&mut self) -> &mut String {
        &mut self.custom_glyph
    }

    /// Export the committed canvas as a PNG. Failures abort without partial
    /// output; the session is untouched either way.
    pub fn export(&mut self) {
        match self.session.export_png(EXPORT_SCALE) {
            Ok(bytes) => {
                #[cfg(not(target_arch = "wasm32"))]
                match std::fs::write(EXPORT_FILE, &bytes) {
                    Ok(()) => info!("exported {EXPORT_FILE} ({} bytes)", bytes.len()),
                    Err(err) => warn!("could not write {EXPORT_FILE}: {err}"),
                }
                #[cfg(target_arch = "wasm32")]
                info!("export produced {} bytes", bytes.len());
            }
            Err(err) => warn!("export aborted: {err}"),
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.session.tool());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        // Frame-ready signal: if an event this frame changed the session,
        // make sure a fresh frame is presented for it.
        if self.presented_revision != self.session.revision() {
            self.presented_revision = self.session.revision();
            ctx.request_repaint();
        }
    }
}
