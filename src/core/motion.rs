use glam::DVec2;

use super::constants::*;

/// Translation for a magnetic button: a fraction of the pointer's offset from
/// the element center.
#[inline]
pub fn magnetic_offset(pointer: DVec2, center: DVec2) -> DVec2 {
    (pointer - center) * MAGNETIC_STRENGTH
}

pub fn magnetic_transform(offset: DVec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

pub const MAGNETIC_RESET: &str = "translate(0px, 0px)";

/// (rotateX, rotateY) in degrees for a pointer `offset` from the card center.
/// Pointer below center tips the card back; right of center turns it right.
#[inline]
pub fn tilt_angles(offset: DVec2) -> (f64, f64) {
    (-offset.y / TILT_DIVISOR, offset.x / TILT_DIVISOR)
}

pub fn tilt_transform(offset: DVec2) -> String {
    let (rx, ry) = tilt_angles(offset);
    format!("perspective({TILT_PERSPECTIVE_PX}px) rotateX({rx}deg) rotateY({ry}deg)")
}

pub fn tilt_reset() -> String {
    format!("perspective({TILT_PERSPECTIVE_PX}px) rotateX(0deg) rotateY(0deg)")
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFrame {
    pub opacity: f64,
    pub translate_y: f64,
}

/// Hero fade/drift for `scroll_y`. `None` once the hero has scrolled out,
/// leaving the last applied frame in place.
pub fn hero_parallax(scroll_y: f64, hero_height: f64) -> Option<HeroFrame> {
    if hero_height <= 0.0 || scroll_y >= hero_height {
        return None;
    }
    Some(HeroFrame {
        opacity: 1.0 - (scroll_y / hero_height) * HERO_FADE_SPAN,
        translate_y: scroll_y * HERO_PARALLAX_SPEED,
    })
}

/// Vertical drift of an image proportional to how far its center sits from
/// the viewport center.
#[inline]
pub fn image_parallax(element_center_y: f64, viewport_height: f64, speed: f64) -> f64 {
    (viewport_height / 2.0 - element_center_y) * speed
}

/// `data-speed` value, falling back to the default drift for missing or
/// unparsable input.
pub fn parallax_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(IMAGE_PARALLAX_DEFAULT_SPEED)
}

/// Coalesces bursts of scroll events into one update per animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLatch {
    in_flight: bool,
}

impl FrameLatch {
    /// True when the caller should schedule a frame; false if one is pending.
    pub fn request(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn release(&mut self) {
        self.in_flight = false;
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight
    }
}
