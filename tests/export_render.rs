use egui::Pos2;
use sticker_sketch::element::CANVAS_BACKGROUND;
use sticker_sketch::{DrawSurface, RasterSurface, SketchSession};

fn is_background(pixel: &image::Rgba<u8>) -> bool {
    pixel.0 == [255, 255, 255, 255]
}

#[test]
fn test_redraw_is_pure() {
    let mut session = SketchSession::new(64, 64);
    session.pointer_down(Pos2::new(10.0, 10.0));
    session.pointer_move(Pos2::new(40.0, 40.0));
    session.pointer_up();
    // Leave an idle preview showing as well
    session.pointer_move(Pos2::new(50.0, 20.0));

    let mut first = RasterSurface::new(64, 64, 1);
    session.redraw(&mut first);
    let mut second = RasterSurface::new(64, 64, 1);
    session.redraw(&mut second);

    // No intervening state change: bit-identical frames
    assert_eq!(first.image().as_raw(), second.image().as_raw());
}

#[test]
fn test_redraw_clears_stale_content() {
    let mut session = SketchSession::new(64, 64);
    session.pointer_down(Pos2::new(10.0, 32.0));
    session.pointer_move(Pos2::new(54.0, 32.0));
    session.pointer_up();

    let mut surface = RasterSurface::new(64, 64, 1);
    session.redraw(&mut surface);
    assert!(!is_background(surface.image().get_pixel(32, 32)));

    // Undo, redraw onto the same surface: the stroke must be gone
    assert!(session.undo());
    session.redraw(&mut surface);
    assert!(is_background(surface.image().get_pixel(32, 32)));
}

#[test]
fn test_export_dimensions_scale() {
    let session = SketchSession::new(256, 256);
    let bytes = session.export_png(4).expect("export should succeed");

    let decoded = image::load_from_memory(&bytes).expect("export should be a valid PNG");
    assert_eq!(decoded.width(), 1024);
    assert_eq!(decoded.height(), 1024);
}

#[test]
fn test_export_skips_in_progress_and_preview() {
    // Two sessions whose committed content is identical, one with extra
    // uncommitted state: their exports must be byte-identical.
    let mut committed_only = SketchSession::new(64, 64);
    committed_only.pointer_down(Pos2::new(10.0, 32.0));
    committed_only.pointer_move(Pos2::new(54.0, 32.0));
    committed_only.pointer_up();

    let mut with_extras = SketchSession::new(64, 64);
    with_extras.pointer_down(Pos2::new(10.0, 32.0));
    with_extras.pointer_move(Pos2::new(54.0, 32.0));
    with_extras.pointer_up();
    with_extras.select_sticker("🌸");
    with_extras.pointer_move(Pos2::new(20.0, 20.0)); // preview
    with_extras.pointer_down(Pos2::new(30.0, 30.0)); // in-progress sticker

    let first = committed_only.export_png(2).expect("export should succeed");
    let second = with_extras.export_png(2).expect("export should succeed");
    assert_eq!(first, second);
}

#[test]
fn test_export_renders_committed_at_scaled_positions() {
    let mut session = SketchSession::new(256, 256);

    // Commit a sticker at (5,5), then a stroke far away, then undo the
    // stroke: only the sticker remains committed.
    session.select_sticker("🌸");
    session.pointer_down(Pos2::new(5.0, 5.0));
    session.pointer_up();

    session.select_marker(2.0);
    session.pointer_down(Pos2::new(200.0, 240.0));
    session.pointer_move(Pos2::new(240.0, 240.0));
    session.pointer_up();
    assert!(session.undo());

    let bytes = session.export_png(4).expect("export should succeed");
    let decoded = image::load_from_memory(&bytes)
        .expect("export should be a valid PNG")
        .to_rgba8();

    // Some glyph ink lands around the scaled sticker position (20,20)
    let mut sticker_ink = 0usize;
    for y in 0..80 {
        for x in 0..80 {
            if !is_background(decoded.get_pixel(x, y)) {
                sticker_ink += 1;
            }
        }
    }
    assert!(sticker_ink > 0, "sticker should leave ink near (20,20)");

    // The undone stroke leaves none along its scaled path (y = 960)
    for x in 780..980 {
        assert!(
            is_background(decoded.get_pixel(x, 960)),
            "undone stroke must not be exported (pixel {x},960)"
        );
    }
}

#[test]
fn test_export_rejects_oversized_surface() {
    let session = SketchSession::new(256, 256);

    // 256 * 64 = 16384 > the 8192 pixel limit
    assert!(session.export_png(64).is_err());

    // Overflow-sized scale factors are rejected, not wrapped
    assert!(session.export_png(u32::MAX).is_err());
}

#[test]
fn test_raster_clear_resets_every_pixel() {
    let mut surface = RasterSurface::new(32, 32, 1);
    surface.clear(egui::Color32::BLACK);
    surface.clear(CANVAS_BACKGROUND);

    assert!(surface.image().pixels().all(is_background));
}
