// Pure input math shared by the event wiring and host-side tests.

/// Pointer position normalized to [-1, 1] from the viewport center.
#[inline]
pub fn normalized_pointer(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> (f32, f32) {
    let w = viewport_w.max(1.0);
    let h = viewport_h.max(1.0);
    ((client_x / w) * 2.0 - 1.0, (client_y / h) * 2.0 - 1.0)
}

/// Scroll completion as a percentage for the progress bar.
///
/// A zero or negative scrollable range reports 0 rather than NaN.
#[inline]
pub fn progress_percent(scroll_y: f32, scroll_range: f32) -> f32 {
    if scroll_range <= 0.0 {
        return 0.0;
    }
    ((scroll_y / scroll_range) * 100.0).clamp(0.0, 100.0)
}

/// Card tilt rotation (degrees) from a pointer offset within the card.
///
/// `x`/`y` are relative to the card's top-left corner. The divisor sets how
/// aggressively the card follows the pointer; a pointer at the exact center
/// yields zero rotation on both axes.
#[inline]
pub fn tilt_angles(x: f32, y: f32, width: f32, height: f32, divisor: f32) -> (f32, f32) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    ((y - center_y) / divisor, (center_x - x) / divisor)
}

/// CSS transform for a tilted card, with the angle values substituted in.
#[inline]
pub fn tilt_transform(rotate_x: f32, rotate_y: f32) -> String {
    format!("translateY(-10px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg)")
}

/// Transform applied when the pointer leaves a card.
pub const TILT_RESET: &str = "translateY(0) rotateX(0) rotateY(0)";

/// Pixel value for the glow-highlight custom properties.
#[inline]
pub fn glow_offset_px(v: f32) -> String {
    format!("{v:.0}px")
}

/// Glow-highlight position when no pointer is over the card.
pub const GLOW_CENTER: &str = "50%";

/// Index of the section the page is currently "in": the last section whose
/// top edge is at or above the scroll position plus the lookahead margin.
/// `None` when the page has not reached the first section yet.
pub fn active_section(section_tops: &[f32], scroll_y: f32, margin: f32) -> Option<usize> {
    let mut current = None;
    for (index, top) in section_tops.iter().enumerate() {
        if scroll_y + margin >= *top {
            current = Some(index);
        }
    }
    current
}
