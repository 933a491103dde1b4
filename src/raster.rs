use egui::epaint::text::{FontDefinitions, Fonts};
use egui::epaint::{FontImage, ImageData, ImageDelta};
use egui::{Color32, FontId, Pos2};
use image::{Rgba, RgbaImage};

use crate::element::common::distance_to_line_segment;
use crate::surface::DrawSurface;

/// Side length of the glyph atlas texture
const ATLAS_TEXTURE_SIDE: usize = 2048;

/// Off-screen surface backed by a plain RGBA pixel buffer.
///
/// All coordinates arrive in canvas-local logical units and are mapped
/// through a uniform scale, so the same element draws identically on screen
/// and in an upscaled export. Polylines are filled as capsules around each
/// segment, which gives exact round joins and caps; glyphs are laid out with
/// egui's own font stack and blended from its coverage atlas, so exported
/// stickers match the on-screen ones.
pub struct RasterSurface {
    pixels: RgbaImage,
    scale: f32,
    fonts: Fonts,
    atlas: FontImage,
}

impl RasterSurface {
    /// Create a surface of `width` x `height` logical units, rasterized at
    /// `scale` physical pixels per unit.
    pub fn new(width: u32, height: u32, scale: u32) -> Self {
        // The font system rasterizes at `pixels_per_point == scale`, so
        // glyph coverage is produced at the exact output resolution and
        // blits one-to-one.
        let fonts = Fonts::new(
            scale as f32,
            ATLAS_TEXTURE_SIDE,
            FontDefinitions::default(),
        );

        Self {
            pixels: RgbaImage::new(width * scale, height * scale),
            scale: scale as f32,
            fonts,
            atlas: FontImage::new([0, 0]),
        }
    }

    /// Width of the backing buffer in physical pixels
    pub fn pixel_width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height of the backing buffer in physical pixels
    pub fn pixel_height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the backing buffer
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Consume the surface, keeping the backing buffer
    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Source-over blend of a premultiplied color at fractional coverage
    fn blend_pixel(&mut self, x: i64, y: i64, color: Color32, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        if x < 0 || y < 0 || x >= self.pixels.width() as i64 || y >= self.pixels.height() as i64 {
            return;
        }

        let cov = coverage.min(1.0);
        let src_alpha = color.a() as f32 / 255.0 * cov;
        let dst = self.pixels.get_pixel_mut(x as u32, y as u32);

        let mix = |src: u8, dst: u8| -> u8 {
            (src as f32 * cov + dst as f32 * (1.0 - src_alpha)).round() as u8
        };
        *dst = Rgba([
            mix(color.r(), dst.0[0]),
            mix(color.g(), dst.0[1]),
            mix(color.b(), dst.0[2]),
            mix(color.a(), dst.0[3]),
        ]);
    }

    /// Fill the capsule of radius `radius` around segment `a..b`, with a
    /// one-pixel anti-aliased rim. Coordinates are physical.
    fn fill_capsule(&mut self, a: Pos2, b: Pos2, radius: f32, color: Color32) {
        let min_x = (a.x.min(b.x) - radius - 1.0).floor() as i64;
        let min_y = (a.y.min(b.y) - radius - 1.0).floor() as i64;
        let max_x = (a.x.max(b.x) + radius + 1.0).ceil() as i64;
        let max_y = (a.y.max(b.y) + radius + 1.0).ceil() as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = distance_to_line_segment(center, a, b);
                let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0);
                self.blend_pixel(x, y, color, coverage);
            }
        }
    }

    /// Pull any new glyph coverage out of the font system into our cached
    /// copy of the atlas. The first delta carries the whole texture, later
    /// ones patch sub-rectangles in place.
    fn sync_atlas(&mut self) {
        let Some(delta) = self.fonts.font_image_delta() else {
            return;
        };
        let ImageDelta { image, pos, .. } = delta;
        let ImageData::Font(patch) = image else {
            return;
        };

        match pos {
            None => self.atlas = patch,
            Some([px, py]) => {
                let [patch_w, patch_h] = patch.size;
                let atlas_w = self.atlas.size[0];
                for y in 0..patch_h {
                    for x in 0..patch_w {
                        self.atlas.pixels[(py + y) * atlas_w + (px + x)] =
                            patch.pixels[y * patch_w + x];
                    }
                }
            }
        }
    }
}

impl DrawSurface for RasterSurface {
    fn clear(&mut self, color: Color32) {
        let fill = Rgba([color.r(), color.g(), color.b(), color.a()]);
        for pixel in self.pixels.pixels_mut() {
            *pixel = fill;
        }
    }

    fn polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }

        let radius = thickness / 2.0 * self.scale;
        for segment in points.windows(2) {
            let a = (segment[0].to_vec2() * self.scale).to_pos2();
            let b = (segment[1].to_vec2() * self.scale).to_pos2();
            self.fill_capsule(a, b, radius, color);
        }
    }

    fn circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let center = (center.to_vec2() * self.scale).to_pos2();
        self.fill_capsule(center, center, radius * self.scale, color);
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, font_size: f32, color: Color32) {
        let galley =
            self.fonts
                .layout_no_wrap(glyph.to_owned(), FontId::proportional(font_size), color);
        self.sync_atlas();

        // Center the laid-out text on `center`, in logical units
        let top_left = center - galley.size() / 2.0;

        for row in &galley.rows {
            for placed in &row.glyphs {
                let uv = placed.uv_rect;
                let texel_w = uv.max[0].saturating_sub(uv.min[0]) as usize;
                let texel_h = uv.max[1].saturating_sub(uv.min[1]) as usize;
                if texel_w == 0 || texel_h == 0 {
                    continue; // whitespace
                }

                // Physical top-left of this glyph's quad; atlas texels map
                // one-to-one onto output pixels at our pixels_per_point.
                let quad_min =
                    (top_left + placed.pos.to_vec2() + uv.offset).to_vec2() * self.scale;
                let quad_x = quad_min.x.round() as i64;
                let quad_y = quad_min.y.round() as i64;

                let atlas_w = self.atlas.size[0];
                for dy in 0..texel_h {
                    for dx in 0..texel_w {
                        let texel_x = uv.min[0] as usize + dx;
                        let texel_y = uv.min[1] as usize + dy;
                        let coverage = self.atlas.pixels[texel_y * atlas_w + texel_x];
                        self.blend_pixel(
                            quad_x + dx as i64,
                            quad_y + dy as i64,
                            color,
                            coverage,
                        );
                    }
                }
            }
        }
    }
}
