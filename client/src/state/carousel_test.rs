use super::*;

#[test]
fn scroll_delta_is_one_viewport_width() {
    assert_eq!(scroll_delta(ScrollDirection::Right, 640.0), 640.0);
    assert_eq!(scroll_delta(ScrollDirection::Left, 640.0), -640.0);
}

#[test]
fn max_scroll_never_negative() {
    assert_eq!(max_scroll(2000.0, 600.0), 1400.0);
    assert_eq!(max_scroll(300.0, 600.0), 0.0);
}

#[test]
fn scroll_right_then_left_round_trips() {
    let mut model = CarouselModel::new(600.0, 2400.0);
    model.offset = 300.0;
    let original = model.offset;
    model.scroll(ScrollDirection::Right);
    assert_eq!(model.offset, 900.0);
    model.scroll(ScrollDirection::Left);
    assert_eq!(model.offset, original);
}

#[test]
fn scroll_clamps_at_edges() {
    let mut model = CarouselModel::new(600.0, 1000.0);
    assert_eq!(model.scroll(ScrollDirection::Left), 0.0);
    assert_eq!(model.scroll(ScrollDirection::Right), 400.0);
    assert_eq!(model.scroll(ScrollDirection::Right), 400.0);
}

#[test]
fn drag_right_decreases_offset_by_amplified_delta() {
    let mut model = CarouselModel::new(600.0, 3000.0);
    model.offset = 1000.0;
    let mut drag = DragState::default();
    drag.press(200.0, model.offset);
    model.drag(&drag, 240.0);
    assert_eq!(model.offset, 1000.0 - 1.5 * 40.0);
}

#[test]
fn drag_left_increases_offset() {
    let mut drag = DragState::default();
    drag.press(500.0, 100.0);
    assert_eq!(drag.drag_to(400.0, 10_000.0), Some(250.0));
}

#[test]
fn drag_is_relative_to_offset_at_press() {
    let mut drag = DragState::default();
    drag.press(100.0, 500.0);
    assert_eq!(drag.drag_to(110.0, 10_000.0), Some(485.0));
    assert_eq!(drag.drag_to(120.0, 10_000.0), Some(470.0));
}

#[test]
fn drag_clamps_to_valid_range() {
    let mut drag = DragState::default();
    drag.press(0.0, 50.0);
    assert_eq!(drag.drag_to(1000.0, 800.0), Some(0.0));
    assert_eq!(drag.drag_to(-1000.0, 800.0), Some(800.0));
}

#[test]
fn moves_without_press_do_nothing() {
    let drag = DragState::default();
    assert_eq!(drag.drag_to(300.0, 800.0), None);
    let mut model = CarouselModel::new(600.0, 3000.0);
    model.drag(&drag, 300.0);
    assert_eq!(model.offset, 0.0);
}

#[test]
fn release_ends_gesture_and_restores_cursor() {
    let mut drag = DragState::default();
    drag.press(10.0, 20.0);
    assert_eq!(drag.cursor(), "grabbing");
    drag.release();
    assert!(!drag.dragging);
    assert_eq!(drag.cursor(), "grab");
    assert_eq!(drag.drag_to(50.0, 800.0), None);
}
