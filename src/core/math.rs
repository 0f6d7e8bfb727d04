// Deadzone and inversion arithmetic shared by the input engine

use glam::Vec2;

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp a value into the range spanned by two bounds, whichever order they come in
pub fn clamp_to_span(value: f32, a: f32, b: f32) -> f32 {
    clamp(value, a.min(b), a.max(b))
}

/// Sign multiplier for an axis (-1 when inverted)
pub fn inversion_sign(inverted: bool) -> f32 {
    if inverted {
        -1.0
    } else {
        1.0
    }
}

/// Check whether a raw reading sits inside the linear deadzone around `rest`
///
/// Readings at or above rest must clear `rest + offset`; readings below rest
/// must clear `rest - offset`. Landing exactly on the far edge still counts as
/// outside the band.
pub fn in_dead_zone(value: f32, rest: f32, offset: f32) -> bool {
    if value >= rest {
        value < rest + offset
    } else {
        value > rest - offset
    }
}

/// Zero a 2D reading whose magnitude does not exceed `dead_zone`
///
/// Readings beyond the threshold pass through unscaled.
pub fn radial_dead_zone(value: Vec2, dead_zone: f32) -> Vec2 {
    if value.length() <= dead_zone {
        Vec2::ZERO
    } else {
        value
    }
}
