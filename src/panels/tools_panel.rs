use crate::SketchApp;
use crate::element::Element;
use crate::tool::{DEFAULT_STICKERS, THICK_MARKER, THIN_MARKER, Tool};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(170.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.session().tool().clone();

            let thin = matches!(active, Tool::Marker { thickness } if thickness == THIN_MARKER);
            if ui.selectable_label(thin, "✏ Thin marker").clicked() {
                app.session_mut().select_marker(THIN_MARKER);
            }
            let thick = matches!(active, Tool::Marker { thickness } if thickness == THICK_MARKER);
            if ui.selectable_label(thick, "🖌 Thick marker").clicked() {
                app.session_mut().select_marker(THICK_MARKER);
            }

            ui.separator();

            ui.label("Stickers");
            ui.horizontal(|ui| {
                for glyph in DEFAULT_STICKERS {
                    let selected = matches!(&active, Tool::Sticker { glyph: g } if g == glyph);
                    if ui.selectable_label(selected, glyph).clicked() {
                        log::info!("sticker selected from UI: {glyph}");
                        app.session_mut().select_sticker(glyph);
                    }
                }
            });

            // Custom sticker entry; an empty glyph never reaches the session
            ui.horizontal(|ui| {
                ui.text_edit_singleline(app.custom_glyph_mut());
                let glyph = app.custom_glyph_mut().trim().to_owned();
                if ui
                    .add_enabled(!glyph.is_empty(), egui::Button::new("Add"))
                    .clicked()
                {
                    app.session_mut().select_sticker(glyph);
                }
            });

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.session().history().can_undo();
                let can_redo = app.session().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.session_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.session_mut().redo();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.session_mut().clear();
                }
                if ui.button("Export PNG").clicked() {
                    app.export();
                }
            });

            ui.separator();

            let history = app.session().history();
            ui.label(format!(
                "Committed: {}  Redoable: {}",
                history.committed().len(),
                history.redo_stack().len()
            ));

            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([30.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Canvas");
                    ui.strong("Redo");
                    ui.end_row();

                    let committed = history.committed();
                    let redo = history.redo_stack();
                    let rows = committed.len().max(redo.len());
                    for i in 0..rows {
                        match committed.get(i) {
                            Some(element) => ui.label(element.kind()),
                            None => ui.label(""),
                        };
                        match redo.get(i) {
                            Some(element) => ui.label(element.kind()),
                            None => ui.label(""),
                        };
                        ui.end_row();
                    }
                });
        });
}
