use crate::element::{CANVAS_BACKGROUND, Element, ElementType};
use crate::history::History;
use crate::preview::ToolPreview;
use crate::surface::DrawSurface;

/// Produce one full frame from the current state.
///
/// The frame is always rebuilt from scratch, in a fixed order:
///
/// 1. clear the surface to the canvas background;
/// 2. every committed element, oldest first (z-order is draw order);
/// 3. the element currently being drawn, on top of all committed work;
/// 4. otherwise the tool preview, last of all.
///
/// There is no incremental patching, so redrawing with unchanged state is
/// idempotent and safe to call redundantly. An in-progress element and a
/// preview never coexist (the session drops the preview for the duration of
/// a drag), so steps 3 and 4 never both fire.
pub fn redraw(
    surface: &mut dyn DrawSurface,
    history: &History,
    in_progress: Option<&ElementType>,
    preview: Option<&ToolPreview>,
) {
    surface.clear(CANVAS_BACKGROUND);

    for element in history.committed() {
        element.draw(surface);
    }

    if let Some(element) = in_progress {
        element.draw(surface);
    } else if let Some(preview) = preview {
        preview.render(surface);
    }
}
