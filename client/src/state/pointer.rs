//! Pointer-driven tilt and parallax for the hero banner.
//!
//! ARCHITECTURE
//! ============
//! Pointer events only set spring targets; the frame loop calls `advance` to
//! move the rendered values. Leaving the hero resets targets to neutral and
//! the springs carry the values back smoothly.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::util::motion::{AMBIENT_LOOP, PARALLAX_SPRING, SpringValue, TILT_SPRING, ease_in_out};

/// Full tilt range in degrees; offsets map to `±TILT_RANGE_DEG / 2`.
pub const TILT_RANGE_DEG: f64 = 15.0;
/// Background position at rest, in percent.
pub const PARALLAX_CENTER: f64 = 50.0;

const AMBIENT_SCALE_PEAK: f64 = 0.05;
const AMBIENT_OFFSET_PEAK: f64 = 2.0;

/// 3D rotation applied to the portrait and headline, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt { rotate_x: 0.0, rotate_y: 0.0 };
}

/// Background position, in percent on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub x: f64,
    pub y: f64,
}

impl Parallax {
    pub const CENTER: Parallax = Parallax { x: PARALLAX_CENTER, y: PARALLAX_CENTER };
}

/// Tilt target for a pointer at (`x`, `y`) inside a `width` × `height` viewport.
#[must_use]
pub fn tilt_target(x: f64, y: f64, width: f64, height: f64) -> Tilt {
    if width <= 0.0 || height <= 0.0 {
        return Tilt::NEUTRAL;
    }
    let nx = (x / width).clamp(0.0, 1.0) - 0.5;
    let ny = (y / height).clamp(0.0, 1.0) - 0.5;
    Tilt { rotate_x: -ny * TILT_RANGE_DEG, rotate_y: nx * TILT_RANGE_DEG }
}

/// Parallax target for a pointer at (`x`, `y`), 0–100 % per axis.
#[must_use]
pub fn parallax_target(x: f64, y: f64, width: f64, height: f64) -> Parallax {
    if width <= 0.0 || height <= 0.0 {
        return Parallax::CENTER;
    }
    Parallax { x: (x / width * 100.0).clamp(0.0, 100.0), y: (y / height * 100.0).clamp(0.0, 100.0) }
}

/// Ambient pan/zoom at time `t_secs`, independent of the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientFrame {
    pub scale: f64,
    pub offset_pct: f64,
}

/// One ease-in-out swell per loop: out to the peak at mid-loop and back.
#[must_use]
pub fn ambient_frame(t_secs: f64) -> AmbientFrame {
    let period = AMBIENT_LOOP.duration_s;
    let phase = (t_secs.rem_euclid(period)) / period;
    let swell = if phase < 0.5 { ease_in_out(phase * 2.0) } else { ease_in_out((1.0 - phase) * 2.0) };
    AmbientFrame { scale: 1.0 + AMBIENT_SCALE_PEAK * swell, offset_pct: AMBIENT_OFFSET_PEAK * swell }
}

/// Spring-smoothed hero motion values owned by one hero instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMotion {
    tilt_x: SpringValue,
    tilt_y: SpringValue,
    bg_x: SpringValue,
    bg_y: SpringValue,
    ambient: AmbientFrame,
}

impl Default for PointerMotion {
    fn default() -> Self {
        Self {
            tilt_x: SpringValue::new(0.0, TILT_SPRING),
            tilt_y: SpringValue::new(0.0, TILT_SPRING),
            bg_x: SpringValue::new(PARALLAX_CENTER, PARALLAX_SPRING),
            bg_y: SpringValue::new(PARALLAX_CENTER, PARALLAX_SPRING),
            ambient: ambient_frame(0.0),
        }
    }
}

impl PointerMotion {
    pub fn on_move(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let tilt = tilt_target(x, y, width, height);
        self.tilt_x.set_target(tilt.rotate_x);
        self.tilt_y.set_target(tilt.rotate_y);
        let parallax = parallax_target(x, y, width, height);
        self.bg_x.set_target(parallax.x);
        self.bg_y.set_target(parallax.y);
    }

    pub fn on_leave(&mut self) {
        self.tilt_x.set_target(Tilt::NEUTRAL.rotate_x);
        self.tilt_y.set_target(Tilt::NEUTRAL.rotate_y);
        self.bg_x.set_target(Parallax::CENTER.x);
        self.bg_y.set_target(Parallax::CENTER.y);
    }

    /// Step the springs by `dt` seconds and sample the ambient loop at `t_secs`.
    pub fn advance(&mut self, dt: f64, t_secs: f64) {
        self.tilt_x.step(dt);
        self.tilt_y.step(dt);
        self.bg_x.step(dt);
        self.bg_y.step(dt);
        self.ambient = ambient_frame(t_secs);
    }

    /// Current smoothed rotation.
    #[must_use]
    pub fn rotation(&self) -> Tilt {
        Tilt { rotate_x: self.tilt_x.value, rotate_y: self.tilt_y.value }
    }

    /// Rotation the springs are heading to.
    #[must_use]
    pub fn rotation_target(&self) -> Tilt {
        Tilt { rotate_x: self.tilt_x.target, rotate_y: self.tilt_y.target }
    }

    /// Current smoothed parallax position, without the ambient offset.
    #[must_use]
    pub fn parallax(&self) -> Parallax {
        Parallax { x: self.bg_x.value, y: self.bg_y.value }
    }

    #[must_use]
    pub fn ambient(&self) -> AmbientFrame {
        self.ambient
    }

    /// CSS `transform` for tilted elements.
    #[must_use]
    pub fn tilt_css(&self) -> String {
        let tilt = self.rotation();
        format!("perspective(800px) rotateX({:.3}deg) rotateY({:.3}deg)", tilt.rotate_x, tilt.rotate_y)
    }

    /// CSS `background-position` combining parallax and the ambient pan.
    #[must_use]
    pub fn background_position_css(&self) -> String {
        let p = self.parallax();
        let offset = self.ambient.offset_pct;
        format!("{:.2}% {:.2}%", p.x + offset, p.y + offset)
    }
}
