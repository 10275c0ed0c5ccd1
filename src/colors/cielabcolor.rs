//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, A\*, and B\* to distinguish them from generic Lab, but for convenience they are just `l`,
//! `a`, and `b` in this module. Vermilion's CIELAB is always referenced to D65, and CIEDE2000 is
//! computed on it.

use crate::colors::cielchcolor::CIELCHColor;
use crate::colors::xyzcolor::XYZColor;
use crate::consts::{D65_WHITE_POINT, LAB_EPSILON, LAB_KAPPA};
use crate::coord::Coord;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is black and 100 is diffuse white:
    /// higher values are possible for reflective surfaces.
    pub l: f64,
    /// The first opponent color axis. Usually between -128 and 127, with negative values being
    /// green and positive values magenta, but it is unbounded.
    pub a: f64,
    /// The second opponent color axis. Negative values are blue and positive values yellow.
    pub b: f64,
}

impl CIELABColor {
    /// Undoes the CIE nonlinearity and scales by the D65 white point.
    pub fn to_xyz(self) -> XYZColor {
        let f_inv = |t: f64| {
            let cube = t * t * t;
            if cube > LAB_EPSILON {
                cube
            } else {
                (t - 16. / 116.) / LAB_KAPPA
            }
        };
        let fy = (self.l + 16.) / 116.;
        let fx = self.a / 500. + fy;
        let fz = fy - self.b / 200.;
        XYZColor {
            x: f_inv(fx) * D65_WHITE_POINT[0],
            y: f_inv(fy) * D65_WHITE_POINT[1],
            z: f_inv(fz) * D65_WHITE_POINT[2],
        }
    }

    /// Converts to polar form. The hue angle is in degrees, in [0, 360).
    /// # Example
    /// ```
    /// # use vermilion::colors::CIELABColor;
    /// let lch = CIELABColor{l: 50., a: 0., b: -20.}.to_lch();
    /// assert!((lch.c - 20.).abs() <= 1e-10);
    /// assert!((lch.h - 270.).abs() <= 1e-10);
    /// ```
    pub fn to_lch(self) -> CIELCHColor {
        let c = self.a.hypot(self.b);
        let unbounded_h = self.b.atan2(self.a).to_degrees();
        let h = if unbounded_h < 0. {
            unbounded_h + 360.
        } else {
            unbounded_h
        };
        CIELCHColor { l: self.l, c, h }
    }
}

impl From<Coord> for CIELABColor {
    fn from(c: Coord) -> CIELABColor {
        CIELABColor {
            l: c.x,
            a: c.y,
            b: c.z,
        }
    }
}

impl From<CIELABColor> for Coord {
    fn from(c: CIELABColor) -> Coord {
        Coord {
            x: c.l,
            y: c.a,
            z: c.b,
        }
    }
}
