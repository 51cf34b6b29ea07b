use super::*;

const FRAME: f64 = 1.0 / 60.0;

fn run(spring: &mut SpringValue, frames: usize) {
    for _ in 0..frames {
        spring.step(FRAME);
    }
}

#[test]
fn damping_ratio_matches_config() {
    assert!((TILT_SPRING.damping_ratio() - 0.75).abs() < 1e-9);
    assert!(PARALLAX_SPRING.damping_ratio() > 1.0);
    assert!(WORD_SPRING.damping_ratio() < 1.0);
}

#[test]
fn spring_at_rest_does_not_move() {
    let mut spring = SpringValue::new(3.0, TILT_SPRING);
    spring.step(FRAME);
    assert_eq!(spring.value, 3.0);
    assert!(spring.is_resting());
}

#[test]
fn spring_moves_toward_target() {
    let mut spring = SpringValue::new(0.0, TILT_SPRING);
    spring.set_target(7.5);
    spring.step(FRAME);
    assert!(spring.value > 0.0);
    assert!(spring.value < 7.5);
}

#[test]
fn spring_settles_exactly_on_target() {
    let mut spring = SpringValue::new(-7.5, TILT_SPRING);
    spring.set_target(0.0);
    run(&mut spring, 600);
    assert_eq!(spring.value, 0.0);
    assert_eq!(spring.velocity, 0.0);
}

#[test]
fn overdamped_spring_settles_without_overshoot() {
    let mut spring = SpringValue::new(50.0, PARALLAX_SPRING);
    spring.set_target(100.0);
    for _ in 0..600 {
        spring.step(FRAME);
        assert!(spring.value <= 100.0);
    }
    assert_eq!(spring.value, 100.0);
}

#[test]
fn non_positive_dt_is_ignored() {
    let mut spring = SpringValue::new(0.0, TILT_SPRING);
    spring.set_target(5.0);
    spring.step(0.0);
    spring.step(-1.0);
    assert_eq!(spring.value, 0.0);
}

#[test]
fn underdamped_spring_maps_to_overshoot_curve() {
    let t = Transition::from_spring(WORD_SPRING);
    assert_eq!(t.easing, Easing::Spring);
    assert!(t.duration_s > 0.0 && t.duration_s <= 1.0);
    assert_eq!(Transition::from_spring(PARALLAX_SPRING).easing, Easing::EaseOut);
}

#[test]
fn transition_css_formats_duration_easing_and_delay() {
    let css = transition_css("opacity", PLACEHOLDER_FADE.with_delay(0.4));
    assert_eq!(css, "opacity 0.50s ease-out 0.40s");
}

#[test]
fn hover_transform_css_formats_scale_and_rotation() {
    assert_eq!(hover_transform_css(ARROW_LEFT_HOVER), "scale(1.2) rotate(-10deg)");
}

#[test]
fn ease_in_out_is_symmetric_and_clamped() {
    assert_eq!(ease_in_out(0.0), 0.0);
    assert_eq!(ease_in_out(1.0), 1.0);
    assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
    assert!((ease_in_out(0.25) + ease_in_out(0.75) - 1.0).abs() < 1e-12);
    assert_eq!(ease_in_out(2.0), 1.0);
}

#[test]
fn animation_css_formats_iterations() {
    assert_eq!(animation_css("spin", SPINNER_SPIN, true), "spin 1.20s linear 0.00s infinite both");
    assert_eq!(animation_css("reveal", REVEAL, false), "reveal 0.50s ease-out 0.00s 1 both");
}

#[test]
fn hover_style_sets_custom_property() {
    assert_eq!(hover_style(CARD_HOVER), "--hover-transform: scale(1.05) rotate(0deg);");
}
