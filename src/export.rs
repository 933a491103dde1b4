use std::io::Cursor;

use image::ImageFormat;
use log::info;
use thiserror::Error;

use crate::element::{CANVAS_BACKGROUND, Element};
use crate::history::History;
use crate::raster::RasterSurface;
use crate::surface::DrawSurface;

/// Largest edge, in physical pixels, we are willing to allocate for an
/// export surface.
const MAX_EXPORT_SIDE: u32 = 8192;

/// Errors that can occur while exporting the canvas
#[derive(Debug, Error)]
pub enum ExportError {
    /// The scaled surface would be too large to allocate
    #[error("export surface of {width}x{height} pixels exceeds the {MAX_EXPORT_SIDE} pixel limit")]
    SurfaceTooLarge { width: u32, height: u32 },
    /// PNG encoding failed
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
}

/// Render the committed history at `scale`x resolution and encode it as PNG.
///
/// Only committed elements are drawn: whatever is mid-drag and whatever
/// preview the cursor shows stay out of the file. The history is read, never
/// mutated. On failure no partial output is produced.
pub fn export_png(
    history: &History,
    width: u32,
    height: u32,
    scale: u32,
) -> Result<Vec<u8>, ExportError> {
    let (out_w, out_h) = match (width.checked_mul(scale), height.checked_mul(scale)) {
        (Some(w), Some(h)) if w <= MAX_EXPORT_SIDE && h <= MAX_EXPORT_SIDE => (w, h),
        _ => {
            return Err(ExportError::SurfaceTooLarge {
                width: width.saturating_mul(scale),
                height: height.saturating_mul(scale),
            });
        }
    };

    let mut surface = RasterSurface::new(width, height, scale);
    surface.clear(CANVAS_BACKGROUND);
    for element in history.committed() {
        element.draw(&mut surface);
    }

    let mut bytes = Cursor::new(Vec::new());
    surface.into_image().write_to(&mut bytes, ImageFormat::Png)?;

    info!(
        "exported {} committed elements at {}x{}",
        history.committed().len(),
        out_w,
        out_h
    );
    Ok(bytes.into_inner())
}
