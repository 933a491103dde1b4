use std::sync::atomic::{AtomicUsize, Ordering};

// One shared counter covers both strokes and stickers, so ids are unique
// across element kinds within a session.
static NEXT_ELEMENT_ID: AtomicUsize = AtomicUsize::new(1);

pub fn next_element_id() -> usize {
    NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed)
}
