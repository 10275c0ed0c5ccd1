//! This file implements the CIELCH color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes.

use crate::colors::cielabcolor::CIELABColor;
use crate::coord::Coord;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
/// # Example
///
/// ```
/// # use vermilion::colors::{CIELABColor, CIELCHColor};
/// // hue-shift a red towards yellow while keeping lightness and chroma
/// let red = CIELABColor{l: 53.24, a: 80.09, b: 67.2}.to_lch();
/// let shifted = CIELCHColor{h: red.h + 40., ..red}.to_lab();
/// assert!((shifted.l - 53.24).abs() <= 1e-10);
/// assert!(shifted.b > shifted.a);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELCHColor {
    /// The luminance component, identical to CIELAB's.
    pub l: f64,
    /// The chroma component, the distance from the gray of the same luminance. Never negative and
    /// roughly 0 to 150 for visible colors.
    pub c: f64,
    /// The hue angle in degrees, from 0 to 360. 90 degrees is yellow, 180 green, 270 blue.
    pub h: f64,
}

impl CIELCHColor {
    /// Back to opponent axes: `a = c cos h`, `b = c sin h`.
    pub fn to_lab(self) -> CIELABColor {
        let (sin, cos) = self.h.to_radians().sin_cos();
        CIELABColor {
            l: self.l,
            a: self.c * cos,
            b: self.c * sin,
        }
    }
}

impl From<Coord> for CIELCHColor {
    fn from(c: Coord) -> CIELCHColor {
        CIELCHColor {
            l: c.x,
            c: c.y,
            h: c.z,
        }
    }
}

impl From<CIELCHColor> for Coord {
    fn from(c: CIELCHColor) -> Coord {
        Coord {
            x: c.l,
            y: c.c,
            z: c.h,
        }
    }
}
