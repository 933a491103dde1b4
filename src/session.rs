//! The interaction state machine driving the sketch surface.
//!
//! The session is in one of two states:
//!
//! ```text
//!               pointer_down
//!     ┌──────────────────────────┐
//!     │                          ▼
//! ┌───┴───┐                 ┌─────────┐   pointer_move
//! │ Idle  │                 │ Drawing │◄────── extends
//! └───────┘                 └────┬────┘
//!     ▲     pointer_up (commit)  │
//!     ├──────────────────────────┤
//!     │   pointer_leave (cancel) │
//!     └──────────────────────────┘
//! ```
//!
//! `Drawing` is exactly "an in-progress element exists". Previews are not a
//! third state: a preview is computed whenever the cursor moves while idle,
//! and dropped for the whole duration of a drag, so an in-progress element
//! and a preview can never coexist.

use egui::Pos2;
use log::{debug, info};

use crate::element::{Element, ElementType, factory};
use crate::export::{self, ExportError};
use crate::history::History;
use crate::preview::ToolPreview;
use crate::renderer;
use crate::surface::DrawSurface;
use crate::tool::Tool;

/// Complete state of one sketch session: the active tool, the committed
/// history, whatever is mid-drag, and the cursor preview. All mutations run
/// synchronously to completion, so every frame observes a fully applied
/// state.
pub struct SketchSession {
    width: u32,
    height: u32,
    tool: Tool,
    history: History,
    in_progress: Option<ElementType>,
    cursor: Option<Pos2>,
    preview: Option<ToolPreview>,
    /// Bumped by every state-changing operation; the presentation layer
    /// repaints when it observes a new value.
    revision: u64,
}

impl SketchSession {
    /// Create a session for a canvas of the given logical size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tool: Tool::default(),
            history: History::new(),
            in_progress: None,
            cursor: None,
            preview: None,
            revision: 0,
        }
    }

    /// Canvas size in logical units
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The frame-ready signal: changes whenever a redraw is due
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The currently selected tool
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// The committed/redo history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// True strictly between a pointer-down and its commit or cancel
    pub fn drawing_active(&self) -> bool {
        self.in_progress.is_some()
    }

    /// The element currently being drawn, if any
    pub fn in_progress(&self) -> Option<&ElementType> {
        self.in_progress.as_ref()
    }

    /// The current cursor preview, if any
    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    fn mark_dirty(&mut self) {
        self.revision += 1;
    }

    fn refresh_preview(&mut self) {
        self.preview = self
            .cursor
            .map(|pos| ToolPreview::for_tool(&self.tool, pos));
    }

    /// Pointer pressed on the canvas: start drawing a new element with the
    /// active tool, seeded at the press position.
    pub fn pointer_down(&mut self, pos: Pos2) {
        self.cursor = Some(pos);
        if self.in_progress.is_some() {
            // Duplicate down without an intervening up; keep the drag alive
            return;
        }

        let element = match &self.tool {
            Tool::Marker { thickness } => factory::create_stroke(pos, *thickness),
            Tool::Sticker { glyph } => factory::create_sticker(pos, glyph.clone()),
        };
        debug!("start {} {} at {pos:?}", element.kind(), element.id());
        self.in_progress = Some(element);
        self.preview = None;
        self.mark_dirty();
    }

    /// Pointer moved: extend the element being drawn, or move the preview.
    pub fn pointer_move(&mut self, pos: Pos2) {
        self.cursor = Some(pos);
        match &mut self.in_progress {
            Some(element) => element.extend(pos),
            None => self.refresh_preview(),
        }
        self.mark_dirty();
    }

    /// Pointer released: commit the element being drawn. A release without a
    /// matching press changes nothing. The preview reappears on the next
    /// idle cursor move.
    pub fn pointer_up(&mut self) {
        if let Some(element) = self.in_progress.take() {
            self.history.commit(element);
            self.mark_dirty();
        }
    }

    /// Pointer left the canvas: discard any element being drawn, without
    /// committing it. Leaving mid-stroke loses the stroke; this is not
    /// undoable. The preview disappears with the cursor.
    pub fn pointer_leave(&mut self) {
        if let Some(element) = self.in_progress.take() {
            info!("cancelled {} {}", element.kind(), element.id());
        }
        self.cursor = None;
        self.preview = None;
        self.mark_dirty();
    }

    /// Switch to a marker of the given thickness. The boundary validates
    /// thickness; a non-positive value is rejected there before reaching us.
    pub fn select_marker(&mut self, thickness: f32) {
        self.set_tool(Tool::Marker { thickness });
    }

    /// Switch to a sticker stamp. The glyph arrives validated (non-empty).
    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        self.set_tool(Tool::Sticker {
            glyph: glyph.into(),
        });
    }

    /// Switching tools never touches the history or an element mid-drag; if
    /// idle, the preview reflects the new tool immediately.
    pub fn set_tool(&mut self, tool: Tool) {
        debug!("tool -> {}", tool.label());
        self.tool = tool;
        if self.in_progress.is_none() {
            self.refresh_preview();
        }
        self.mark_dirty();
    }

    /// Undo the latest commit. Returns false, without requesting a redraw,
    /// when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            self.mark_dirty();
        }
        undone
    }

    /// Redo the latest undone element. Returns false, without requesting a
    /// redraw, when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            self.mark_dirty();
        }
        redone
    }

    /// Wipe the canvas: both history stacks and any element mid-drag.
    pub fn clear(&mut self) {
        self.history.clear();
        self.in_progress = None;
        self.mark_dirty();
    }

    /// Draw the full frame for the current state onto `surface`.
    pub fn redraw(&self, surface: &mut dyn DrawSurface) {
        renderer::redraw(
            surface,
            &self.history,
            self.in_progress.as_ref(),
            self.preview.as_ref(),
        );
    }

    /// Export the committed history as a PNG at `scale`x resolution.
    pub fn export_png(&self, scale: u32) -> Result<Vec<u8>, ExportError> {
        export::export_png(&self.history, self.width, self.height, scale)
    }
}
