//! Declarative animation parameters and the spring integrator behind them.
//!
//! DESIGN
//! ======
//! Components describe motion with plain records (`SpringConfig`,
//! `Transition`, `HoverEffect`). Pointer-driven values are stepped through
//! `SpringValue` from the frame loop; everything else is handed to CSS via the
//! `*_css` adaptors, so either engine can be swapped without touching callers.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Spring physics parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    #[must_use]
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping, mass: 1.0 }
    }

    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Approximate time for the spring to settle, in seconds.
    #[must_use]
    pub fn settle_secs(&self) -> f64 {
        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();
        if zeta < 1.0 { 4.0 / (zeta * omega) } else { 4.0 * zeta / omega }
    }
}

/// Hero portrait and headline tilt.
pub const TILT_SPRING: SpringConfig = SpringConfig::new(100.0, 15.0);
/// Hero background parallax.
pub const PARALLAX_SPRING: SpringConfig = SpringConfig::new(50.0, 20.0);
/// Hovered word pop.
pub const WORD_SPRING: SpringConfig = SpringConfig::new(300.0, 15.0);

const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

/// A single animated scalar chasing a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringValue {
    pub value: f64,
    pub velocity: f64,
    pub target: f64,
    pub config: SpringConfig,
}

impl SpringValue {
    #[must_use]
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self { value: initial, velocity: 0.0, target: initial, config }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds. Snaps exactly onto the target once close and slow.
    pub fn step(&mut self, dt: f64) {
        if self.is_resting() || dt <= 0.0 {
            return;
        }
        let displacement = self.value - self.target;
        let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
        self.velocity += force / self.config.mass * dt;
        self.value += self.velocity * dt;

        if (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

/// Easing curves understood by the CSS adaptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Overshooting curve used to approximate an underdamped spring.
    Spring,
}

impl Easing {
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// Time-based transition parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub const fn new(duration_s: f64, easing: Easing) -> Self {
        Self { duration_s, delay_s: 0.0, easing }
    }

    #[must_use]
    pub const fn with_delay(self, delay_s: f64) -> Self {
        Self { delay_s, ..self }
    }

    /// CSS approximation of a spring: settle time with an overshooting curve
    /// when underdamped.
    #[must_use]
    pub fn from_spring(spring: SpringConfig) -> Self {
        let easing = if spring.damping_ratio() < 1.0 { Easing::Spring } else { Easing::EaseOut };
        Self::new(spring.settle_secs().min(1.0), easing)
    }
}

/// Placeholder slot fade-in; slot `i` is delayed by `i * 0.2s`.
pub const PLACEHOLDER_FADE: Transition = Transition::new(0.5, Easing::EaseOut);
/// Spinner rotation period.
pub const SPINNER_SPIN: Transition = Transition::new(1.2, Easing::Linear);
/// One-shot reveal of list items entering the viewport.
pub const REVEAL: Transition = Transition::new(0.5, Easing::EaseOut);
/// Hero portrait entrance.
pub const PORTRAIT_ENTRANCE: Transition = Transition::new(0.8, Easing::EaseOut);
/// Ambient hero background loop.
pub const AMBIENT_LOOP: Transition = Transition::new(15.0, Easing::EaseInOut);

/// Scale and rotation applied while hovered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverEffect {
    pub scale: f64,
    pub rotate_deg: f64,
}

pub const CARD_HOVER: HoverEffect = HoverEffect { scale: 1.05, rotate_deg: 0.0 };
pub const PANEL_HOVER: HoverEffect = HoverEffect { scale: 1.03, rotate_deg: 0.0 };
pub const ARROW_LEFT_HOVER: HoverEffect = HoverEffect { scale: 1.2, rotate_deg: -10.0 };
pub const ARROW_RIGHT_HOVER: HoverEffect = HoverEffect { scale: 1.2, rotate_deg: 10.0 };
pub const WORD_HOVER_SCALE: f64 = 1.3;

/// `transition` declaration for `property`.
#[must_use]
pub fn transition_css(property: &str, transition: Transition) -> String {
    format!(
        "{property} {:.2}s {} {:.2}s",
        transition.duration_s,
        transition.easing.css(),
        transition.delay_s
    )
}

/// `animation` declaration running keyframes `name` with `transition` timing.
#[must_use]
pub fn animation_css(name: &str, transition: Transition, infinite: bool) -> String {
    let iterations = if infinite { "infinite" } else { "1" };
    format!(
        "{name} {:.2}s {} {:.2}s {iterations} both",
        transition.duration_s,
        transition.easing.css(),
        transition.delay_s
    )
}

/// Custom property consumed by `:hover` rules in the stylesheet.
#[must_use]
pub fn hover_style(effect: HoverEffect) -> String {
    format!("--hover-transform: {};", hover_transform_css(effect))
}

/// `transform` value for a hover effect.
#[must_use]
pub fn hover_transform_css(effect: HoverEffect) -> String {
    format!("scale({}) rotate({}deg)", effect.scale, effect.rotate_deg)
}

/// Standard ease-in-out curve over `t` in 0..=1.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 { 2.0 * t * t } else { 1.0 - (-2.0 * t + 2.0).powi(2) / 2.0 }
}
