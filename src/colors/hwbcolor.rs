//! HWB describes a color as a pure hue with some amount of white and some amount of black mixed
//! in. It is the friendliest of the hue-based spaces to reason about by hand, and CSS Color Level 4
//! adopted it for that reason.

use crate::colors::hsvcolor::HSVColor;
use crate::coord::Coord;

/// A color in the HWB space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HWBColor {
    /// The hue, from 0 to 360, shared with HSV and HSL.
    pub h: f64,
    /// Whiteness, from 0 to 100.
    pub w: f64,
    /// Blackness, from 0 to 100.
    pub b: f64,
}

impl HWBColor {
    /// Converts to HSV. If whiteness and blackness add up to more than 100 they are scaled down
    /// proportionally first, which yields a gray.
    /// # Example
    /// ```
    /// # use vermilion::colors::HWBColor;
    /// let gray = HWBColor{h: 120., w: 80., b: 80.}.to_hsv();
    /// assert_eq!((gray.s, gray.v), (0., 50.));
    /// ```
    pub fn to_hsv(self) -> HSVColor {
        let (mut w, mut b) = (self.w / 100., self.b / 100.);
        let sum = w + b;
        if sum > 1. {
            w /= sum;
            b /= sum;
        }
        let v = 1. - b;
        let s = if v == 0. { 0. } else { 1. - w / v };
        HSVColor {
            h: self.h,
            s: s * 100.,
            v: v * 100.,
        }
    }
}

impl From<Coord> for HWBColor {
    fn from(c: Coord) -> HWBColor {
        HWBColor {
            h: c.x,
            w: c.y,
            b: c.z,
        }
    }
}

impl From<HWBColor> for Coord {
    fn from(c: HWBColor) -> Coord {
        Coord {
            x: c.h,
            y: c.w,
            z: c.b,
        }
    }
}
