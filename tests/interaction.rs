use egui::Pos2;
use sticker_sketch::element::{Element, ElementType};
use sticker_sketch::{SketchSession, Tool};

fn session() -> SketchSession {
    SketchSession::new(256, 256)
}

#[test]
fn test_drag_commits_a_stroke() {
    let mut session = session();
    session.select_marker(2.0);

    session.pointer_down(Pos2::new(10.0, 10.0));
    assert!(session.drawing_active());

    session.pointer_move(Pos2::new(20.0, 20.0));
    session.pointer_up();

    assert!(!session.drawing_active());
    let committed = session.history().committed();
    assert_eq!(committed.len(), 1);
    match &committed[0] {
        ElementType::Stroke(stroke) => {
            assert_eq!(
                stroke.points(),
                &[Pos2::new(10.0, 10.0), Pos2::new(20.0, 20.0)]
            );
            assert_eq!(stroke.thickness(), 2.0);
        }
        other => panic!("expected a stroke, got a {}", other.kind()),
    }
}

#[test]
fn test_click_commits_single_point_stroke() {
    // A click without a drag still commits (it just draws nothing)
    let mut session = session();
    session.pointer_down(Pos2::new(10.0, 10.0));
    session.pointer_up();

    assert_eq!(session.history().committed().len(), 1);
}

#[test]
fn test_leave_while_drawing_discards() {
    let mut session = session();
    session.pointer_down(Pos2::new(10.0, 10.0));
    session.pointer_move(Pos2::new(20.0, 20.0));
    session.pointer_move(Pos2::new(30.0, 30.0));

    session.pointer_leave();

    // The stroke never reaches history, and nothing is left mid-drag
    assert!(!session.drawing_active());
    assert!(session.history().committed().is_empty());
    assert!(session.preview().is_none());

    // The cancellation is not undoable
    assert!(!session.undo());
}

#[test]
fn test_preview_follows_idle_cursor_only() {
    let mut session = session();

    session.pointer_move(Pos2::new(40.0, 40.0));
    assert!(session.preview().is_some());

    // While drawing there is no preview at all
    session.pointer_down(Pos2::new(40.0, 40.0));
    assert!(session.preview().is_none());
    session.pointer_move(Pos2::new(50.0, 50.0));
    assert!(session.preview().is_none());
    assert!(session.in_progress().is_some());

    session.pointer_up();
    assert!(session.in_progress().is_none());
}

#[test]
fn test_sticker_drag_repositions() {
    let mut session = session();
    session.select_sticker("🌸");

    session.pointer_down(Pos2::new(10.0, 10.0));
    session.pointer_move(Pos2::new(50.0, 50.0));
    session.pointer_up();

    let committed = session.history().committed();
    assert_eq!(committed.len(), 1);

    // A sticker has exactly one location: its latest
    match &committed[0] {
        ElementType::Sticker(sticker) => {
            assert_eq!(sticker.pos(), Pos2::new(50.0, 50.0));
            assert_eq!(sticker.glyph(), "🌸");
        }
        other => panic!("expected a sticker, got a {}", other.kind()),
    }
    assert!(!committed[0].rect().contains(Pos2::new(10.0, 10.0)));
}

#[test]
fn test_tool_switch_keeps_drag_and_history() {
    let mut session = session();
    session.pointer_down(Pos2::new(10.0, 10.0));

    session.select_sticker("🙂");

    // The element mid-drag keeps drawing with the tool it started with
    assert_eq!(session.in_progress().map(|e| e.kind()), Some("stroke"));
    session.pointer_move(Pos2::new(20.0, 20.0));
    session.pointer_up();

    assert_eq!(session.history().committed()[0].kind(), "stroke");
    assert_eq!(
        session.tool(),
        &Tool::Sticker {
            glyph: "🙂".to_owned()
        }
    );
}

#[test]
fn test_tool_switch_refreshes_idle_preview() {
    let mut session = session();
    session.pointer_move(Pos2::new(40.0, 40.0));

    session.select_sticker("🌸");

    match session.preview() {
        Some(sticker_sketch::ToolPreview::Sticker { pos, glyph }) => {
            assert_eq!(*pos, Pos2::new(40.0, 40.0));
            assert_eq!(glyph, "🌸");
        }
        other => panic!("expected a sticker preview, got {other:?}"),
    }
}

#[test]
fn test_failed_undo_requests_no_redraw() {
    let mut session = session();
    let before = session.revision();

    assert!(!session.undo());
    assert!(!session.redo());
    assert_eq!(session.revision(), before);
}

#[test]
fn test_mutations_bump_the_frame_signal() {
    let mut session = session();
    let mut last = session.revision();

    session.pointer_move(Pos2::new(10.0, 10.0));
    assert_ne!(session.revision(), last);
    last = session.revision();

    session.pointer_down(Pos2::new(10.0, 10.0));
    assert_ne!(session.revision(), last);
    last = session.revision();

    session.pointer_up();
    assert_ne!(session.revision(), last);
}

#[test]
fn test_clear_discards_everything() {
    let mut session = session();
    session.pointer_down(Pos2::new(10.0, 10.0));
    session.pointer_move(Pos2::new(20.0, 20.0));
    session.pointer_up();
    session.undo();

    session.pointer_down(Pos2::new(30.0, 30.0));
    session.clear();

    assert!(session.history().committed().is_empty());
    assert!(session.history().redo_stack().is_empty());
    assert!(!session.drawing_active());
    assert!(!session.undo());
}
