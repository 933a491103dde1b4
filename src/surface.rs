use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke as EguiStroke};

/// Drawing primitives shared by the on-screen painter and the off-screen
/// raster target. Elements and previews render through this trait, so the
/// pipeline never cares which surface it is filling.
pub trait DrawSurface {
    /// Fill the whole surface with a single color, discarding prior content.
    fn clear(&mut self, color: Color32);

    /// Draw a connected polyline with round joins and caps.
    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Draw a filled circle.
    fn circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw a short text/emoji glyph centered (both axes) on `center`.
    fn glyph(&mut self, glyph: &str, center: Pos2, font_size: f32, color: Color32);
}

/// On-screen surface backed by an `egui::Painter`. Canvas-local coordinates
/// are offset by the canvas origin so callers never see screen space.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.origin.to_vec2()
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn clear(&mut self, color: Color32) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color);
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }

        let screen_points: Vec<Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();

        // egui strokes polylines with butt caps and miter joins; round dots
        // at every vertex give the round-cap/round-join look.
        for &point in &screen_points {
            self.painter.circle_filled(point, thickness / 2.0, color);
        }
        self.painter.add(egui::Shape::line(
            screen_points,
            EguiStroke::new(thickness, color),
        ));
    }

    fn circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(self.to_screen(center), radius, color);
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, font_size: f32, color: Color32) {
        self.painter.text(
            self.to_screen(center),
            Align2::CENTER_CENTER,
            glyph,
            FontId::proportional(font_size),
            color,
        );
    }
}
