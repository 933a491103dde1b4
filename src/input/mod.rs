use egui::{Context, Pos2, Rect};

use crate::session::SketchSession;

/// Pointer events the session consumes, already translated into
/// canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved while hovering or dragging inside the canvas
    PointerMove { pos: Pos2 },
    /// Primary button released inside the canvas
    PointerUp,
    /// Pointer left the canvas bounds
    PointerLeave,
}

/// Feed one event into the state machine
pub fn route_event(event: InputEvent, session: &mut SketchSession) {
    match event {
        InputEvent::PointerDown { pos } => session.pointer_down(pos),
        InputEvent::PointerMove { pos } => session.pointer_move(pos),
        InputEvent::PointerUp => session.pointer_up(),
        InputEvent::PointerLeave => session.pointer_leave(),
    }
}

/// Converts raw egui pointer state into canvas-local [`InputEvent`]s,
/// tracking enough state across frames to notice when the pointer crosses
/// the canvas boundary.
pub struct InputHandler {
    was_inside: bool,
    primary_down: bool,
    last_pos: Option<Pos2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            was_inside: false,
            primary_down: false,
            last_pos: None,
        }
    }

    /// Process this frame's pointer input against the canvas rectangle and
    /// return the events it amounts to, in the order they should be applied.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input
                .pointer
                .hover_pos()
                .filter(|pos| canvas_rect.contains(*pos));

            if self.was_inside && hover.is_none() {
                // Crossing out cancels any drag; a release that happens
                // out there is not ours to report.
                events.push(InputEvent::PointerLeave);
                self.primary_down = false;
            }

            if let Some(pos) = hover {
                let local = (pos - canvas_rect.min).to_pos2();

                if self.last_pos != Some(local) {
                    events.push(InputEvent::PointerMove { pos: local });
                }
                if input.pointer.primary_pressed() {
                    events.push(InputEvent::PointerDown { pos: local });
                    self.primary_down = true;
                }
                if input.pointer.primary_released() && self.primary_down {
                    events.push(InputEvent::PointerUp);
                    self.primary_down = false;
                }
                self.last_pos = Some(local);
            } else {
                self.last_pos = None;
            }

            self.was_inside = hover.is_some();
        });

        events
    }
}
