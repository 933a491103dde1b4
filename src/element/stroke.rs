use egui::{Pos2, Rect};

use super::Element;
use crate::element::common;
use crate::surface::DrawSurface;

/// Freehand stroke element: an append-only series of connected points with a
/// thickness fixed at creation.
#[derive(Clone, Debug)]
pub struct Stroke {
    id: usize,
    points: Vec<Pos2>,
    thickness: f32,
}

impl Stroke {
    /// Create a new stroke seeded with its first point
    pub(crate) fn new(id: usize, origin: Pos2, thickness: f32) -> Self {
        Self {
            id,
            points: vec![origin],
            thickness,
        }
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// Get the stroke thickness
    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl Element for Stroke {
    fn id(&self) -> usize {
        self.id
    }

    fn kind(&self) -> &'static str {
        "stroke"
    }

    fn rect(&self) -> Rect {
        common::calculate_bounds(&self.points, self.thickness / 2.0)
    }

    fn extend(&mut self, pos: Pos2) {
        self.points.push(pos);
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        // A single recorded point leaves no mark; a stroke only becomes
        // visible once the pointer has actually moved.
        if self.points.len() < 2 {
            return;
        }

        surface.polyline(&self.points, self.thickness, common::STROKE_COLOR);
    }
}
