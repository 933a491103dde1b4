use crate::SketchApp;
use crate::input::route_event;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sticker Sketchup");

        let (width, height) = app.session().canvas_size();
        let (response, painter) = ui.allocate_painter(
            egui::vec2(width as f32, height as f32),
            egui::Sense::click_and_drag(),
        );
        let canvas_rect = response.rect;

        // Translate this frame's pointer input into canvas-local events and
        // feed them through the state machine before drawing, so the frame
        // below reflects exactly the state after the last event.
        let events = app.input_mut().process_input(ctx, canvas_rect);
        for event in events {
            route_event(event, app.session_mut());
        }

        // Clip to the canvas so strokes stop at its edge
        let painter = painter.with_clip_rect(canvas_rect);
        let mut surface = PainterSurface::new(&painter, canvas_rect.min);
        app.session().redraw(&mut surface);

        ui.label("Draw with the mouse; pick a sticker to stamp it.");
    });
}
