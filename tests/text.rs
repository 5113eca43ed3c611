#![allow(missing_docs)]
//! Host-level tests for text measurement and rotation-aware placement.

use matrix_panel::{Panel, TextRotation, sim::SimDevice};

/// 8×6-device panel: 64×48 pixels, roomy enough for a short word in any
/// direction.
fn panel() -> Panel<SimDevice<48>> {
    let mut panel = Panel::new(SimDevice::new(), 8, 6).expect("grid is non-zero");
    panel.begin();
    panel
}

#[test]
fn text_width_sums_glyphs_and_interior_spacing() {
    let panel = panel();
    assert_eq!(panel.text_width(""), 0);
    assert_eq!(panel.text_width("0"), 5);
    assert_eq!(panel.text_width("RUST"), 4 * 5 + 3);
}

#[test]
fn char_spacing_is_configurable() {
    let mut panel = panel();
    assert_eq!(panel.char_spacing(), 1);
    panel.set_char_spacing(2);
    assert_eq!(panel.char_spacing(), 2);
    assert_eq!(panel.text_width("RUST"), 4 * 5 + 3 * 2);
}

#[test]
fn glyphless_characters_are_zero_width_but_keep_spacing() {
    let panel = panel();
    // 'x', 'y', 'z' have no glyph in the simulator font.
    assert_eq!(panel.text_width("xyz"), 2);
    assert_eq!(panel.text_width("0x"), 5 + 1);
}

#[test]
fn draw_text_returns_the_measured_width_in_every_rotation() {
    for rotation in [
        TextRotation::Rot0,
        TextRotation::Rot90,
        TextRotation::Rot180,
        TextRotation::Rot270,
    ] {
        let mut panel = panel();
        let expected = panel.text_width("RUST");
        let drawn = panel.draw_text(30, 24, "RUST", rotation, true);
        assert_eq!(drawn, expected, "width mismatch for {rotation:?}");
    }
}

#[test]
fn rot0_anchors_the_top_left_of_the_first_character() {
    let mut panel = panel();
    panel.draw_text(0, 6, "T", TextRotation::Rot0, true);
    // Top bar across all five columns at the anchor row.
    for x in 0..5 {
        assert!(panel.get_point(x, 6), "top bar missing at x = {x}");
    }
    // Stem down the middle column.
    for y in 0..=6 {
        assert!(panel.get_point(2, y), "stem missing at y = {y}");
    }
    assert!(!panel.get_point(0, 5));
    assert!(!panel.get_point(5, 6));
}

#[test]
fn each_rotation_anchors_at_the_given_corner() {
    // 'T' has its full-height stem in column 2 and its bar in bit 0, which
    // makes the four orientations easy to tell apart.
    let mut panel = self::panel();
    panel.draw_text(10, 10, "T", TextRotation::Rot0, true);
    assert!(panel.get_point(10, 10));
    assert!(panel.get_point(14, 10));
    assert!(panel.get_point(12, 4));

    let mut panel = self::panel();
    panel.draw_text(10, 10, "T", TextRotation::Rot90, true);
    assert!(panel.get_point(10, 10));
    assert!(panel.get_point(10, 14));
    assert!(panel.get_point(16, 12));

    let mut panel = self::panel();
    panel.draw_text(10, 10, "T", TextRotation::Rot180, true);
    assert!(panel.get_point(10, 10));
    assert!(panel.get_point(6, 10));
    assert!(panel.get_point(8, 16));

    let mut panel = self::panel();
    panel.draw_text(10, 10, "T", TextRotation::Rot270, true);
    assert!(panel.get_point(10, 10));
    assert!(panel.get_point(10, 6));
    assert!(panel.get_point(4, 8));
}

#[test]
fn glyph_off_bits_blank_the_background() {
    let mut panel = panel();
    // (0, 5) falls inside the 'T' cell but is an off bit of the glyph.
    panel.set_point(0, 5, true);
    panel.draw_text(0, 6, "T", TextRotation::Rot0, true);
    assert!(!panel.get_point(0, 5));
}

#[test]
fn spacing_columns_blank_the_gap_between_characters() {
    let mut panel = panel();
    // Column 5 is the spacing column between the two 'T' cells.
    panel.draw_vline(5, 0, 6, true);
    panel.draw_text(0, 6, "TT", TextRotation::Rot0, true);
    for y in 0..=6 {
        assert!(!panel.get_point(5, y), "spacing not blanked at y = {y}");
    }
}

#[test]
fn text_occupies_exactly_its_measured_span() {
    let mut panel = panel();
    let width = panel.draw_text(0, 6, "RUST", TextRotation::Rot0, true);
    assert_eq!(width, 23);
    // Last column of the final 'T' is lit at the bar row; the column just
    // past the span is untouched.
    assert!(panel.get_point(22, 6));
    for y in 0..=6 {
        assert!(!panel.get_point(23, y), "(23, {y}) past the span");
    }
}

#[test]
fn clipped_text_draws_what_fits() {
    let mut panel = panel();
    // Anchor near the right edge: the string runs off the panel but the
    // part that fits is still drawn.
    let width = panel.draw_text(60, 6, "RUST", TextRotation::Rot0, true);
    assert_eq!(width, 23);
    assert!(panel.get_point(60, 6));
    assert!(panel.get_point(63, 6));
}

#[test]
fn off_state_text_clears_glyph_pixels() {
    let mut panel = panel();
    panel.draw_rectangle(0, 0, 10, 10, true);
    panel.draw_hline(6, 0, 4, true);
    panel.draw_text(0, 6, "T", TextRotation::Rot0, false);
    // state = false inverts: glyph bits clear, background bits set.
    assert!(!panel.get_point(0, 6));
    assert!(!panel.get_point(2, 0));
    assert!(panel.get_point(0, 5));
}
