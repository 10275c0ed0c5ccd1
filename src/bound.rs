//! Numeric helpers for keeping color components inside the ranges their space allows. Most
//! parameters are simply clamped: an sRGB channel can't go below 0 or above 255. Hue parameters are
//! circular instead, so 370 degrees is the same hue as 10 degrees and gets looped back into range
//! rather than cut off at 360.

use crate::coord::Coord;
use crate::space::{ColorParam, ColorSpace};

/// Restricts `value` to `[min, max]`.
/// # Example
/// ```
/// # use vermilion::bound::clamp;
/// assert_eq!(clamp(300., 0., 255.), 255.);
/// assert_eq!(clamp(-3., 0., 255.), 0.);
/// assert_eq!(clamp(12.5, 0., 255.), 12.5);
/// ```
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Loops `value` into `[min, max]` by adding or subtracting whole periods of `max - min`. Values
/// already in range, including `max` itself, are returned untouched. Values above the range come
/// down until they are no longer above it, so they can land on `max` but never on `min`; values
/// below the range go up until they reach `min` or pass it. Requires `min < max` and a finite
/// period; non-finite values are returned as they are.
/// # Example
/// ```
/// # use vermilion::bound::loop_value;
/// assert_eq!(loop_value(370., 0., 360.), 10.);
/// assert_eq!(loop_value(-90., 0., 360.), 270.);
/// assert_eq!(loop_value(360., 0., 360.), 360.);
/// assert_eq!(loop_value(720., 0., 360.), 360.);
/// assert_eq!(loop_value(-360., 0., 360.), 0.);
/// ```
pub fn loop_value(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min < max, "minimum value must be smaller than maximum value");
    if !value.is_finite() || (value >= min && value <= max) {
        return value;
    }
    let unit = max - min;
    if value > max {
        max - (max - value).rem_euclid(unit)
    } else {
        min + (value - min).rem_euclid(unit)
    }
}

/// Rounds to the given number of decimal places.
pub fn round_to(value: f64, decimal_places: i32) -> f64 {
    let factor = 10f64.powi(decimal_places);
    (value * factor).round() / factor
}

/// Rounds to the nearest integer with halves going towards positive infinity, so -2.5 becomes -2
/// and 2.5 becomes 3. `f64::round` sends halves away from zero instead, which disagrees with the
/// reference color difference tables for negative opponent axes.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Clamps or loops a single value according to its parameter description.
pub fn bound_param(value: f64, param: &ColorParam) -> f64 {
    if param.wraps {
        loop_value(value, param.min, param.max)
    } else {
        clamp(value, param.min, param.max)
    }
}

/// Brings every component of a triple in `space` into range. This is what every canonical color
/// goes through on construction.
pub fn bound_components(space: ColorSpace, components: [f64; 3]) -> [f64; 3] {
    let params = space.params();
    let mut bounded = [0.; 3];
    for i in 0..3 {
        bounded[i] = bound_param(components[i], &params[i]);
    }
    bounded
}

/// Clamps an sRGB point to the 0-255 cube. Inserted into conversion chains that leave RGB for a
/// hue-based space, because the trip through XYZ can land a hair outside the gamut.
pub fn clamp_rgb(point: Coord) -> Coord {
    Coord {
        x: clamp(point.x, 0., 255.),
        y: clamp(point.y, 0., 255.),
        z: clamp(point.z, 0., 255.),
    }
}
