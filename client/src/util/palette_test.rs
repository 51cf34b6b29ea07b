use super::*;
use crate::util::dark_mode::toggle;

#[test]
fn palettes_differ_by_theme() {
    assert_ne!(palette(true), palette(false));
    assert_eq!(palette(true).len(), 6);
    assert_eq!(palette(false).len(), 6);
}

#[cfg(not(feature = "csr"))]
#[test]
fn toggling_theme_twice_restores_palette() {
    for dark in [true, false] {
        let twice = toggle(toggle(dark));
        assert_eq!(palette(twice), palette(dark));
        assert_eq!(base_text_color(twice), base_text_color(dark));
    }
}

#[test]
fn base_text_color_follows_theme() {
    assert_eq!(base_text_color(true), "#FFFFFF");
    assert_eq!(base_text_color(false), "#111827");
}

#[test]
fn split_words_drops_extra_whitespace() {
    assert_eq!(split_words("  Jane   Doe "), vec!["Jane".to_owned(), "Doe".to_owned()]);
    assert!(split_words("   ").is_empty());
}

#[test]
fn picked_colors_come_from_theme_palette() {
    let mut picker = HoverPicker::seeded(7);
    for _ in 0..50 {
        assert!(DARK_PALETTE.contains(&picker.color(true)));
        assert!(LIGHT_PALETTE.contains(&picker.color(false)));
    }
}

#[test]
fn hover_rotation_stays_in_range() {
    let mut picker = HoverPicker::seeded(42);
    for _ in 0..100 {
        let hover = picker.hover(false);
        assert!(hover.rotate_x >= -HOVER_TILT_DEG && hover.rotate_x < HOVER_TILT_DEG);
        assert!(hover.rotate_y >= -HOVER_TILT_DEG && hover.rotate_y < HOVER_TILT_DEG);
    }
}

#[test]
fn same_seed_gives_same_sequence() {
    let mut a = HoverPicker::seeded(3);
    let mut b = HoverPicker::seeded(3);
    for _ in 0..10 {
        assert_eq!(a.hover(true), b.hover(true));
    }
}
