//! This file implements what is usually called HSL: a simple transformation of sRGB that creates a
//! cylindrical space. HSL has the same problems with perceptual uniformity as sRGB does, but it
//! has some conception of common color attributes and it is what CSS uses. HSL and HSV are very
//! similar but have an important difference: *value* in HSV runs from black to fully saturated
//! colors, whereas *lightness* in HSL runs from black to fully saturated in the middle to white at
//! the end. Vermilion only converts HSL directly to and from HSV; every other space is reached
//! through that.

use crate::colors::hsvcolor::HSVColor;
use crate::coord::Coord;

/// A color in the HSL color space.
/// # Example
/// ```
/// # use vermilion::colors::HSLColor;
/// let gray = HSLColor{h: 0., s: 0., l: 50.}.to_hsv().to_rgb();
/// assert_eq!((gray.r, gray.g, gray.b), (127.5, 127.5, 127.5));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue component, from 0 to 360. Exactly the same as the hue of HSV.
    pub h: f64,
    /// The saturation component, from 0 to 100.
    pub s: f64,
    /// The lightness component, from 0 to 100: the average of the largest and smallest RGB
    /// channels.
    pub l: f64,
}

impl HSLColor {
    /// Stretches the bicone back into the HSV cone. Black has no saturation.
    pub fn to_hsv(self) -> HSVColor {
        let (s, l) = (self.s / 100., self.l / 100.);
        let v = l + s * l.min(1. - l);
        let s_v = if v == 0. { 0. } else { 2. - 2. * l / v };
        HSVColor {
            h: self.h,
            s: s_v * 100.,
            v: v * 100.,
        }
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLColor> for Coord {
    fn from(c: HSLColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.l,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsl_hsv_conversion() {
        let red = HSLColor { h: 0., s: 100., l: 50. }.to_hsv();
        assert_eq!((red.h, red.s, red.v), (0., 100., 100.));
        let black = HSLColor { h: 10., s: 60., l: 0. }.to_hsv();
        assert_eq!((black.s, black.v), (0., 0.));
        let pastel = HSLColor { h: 243.5, s: 56.8, l: 66.25 };
        let back = pastel.to_hsv().to_hsl();
        assert!((back.h - pastel.h).abs() <= 1e-9);
        assert!((back.s - pastel.s).abs() <= 1e-9);
        assert!((back.l - pastel.l).abs() <= 1e-9);
    }
}
