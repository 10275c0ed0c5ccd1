//! The CIE 1931 XYZ color space, the device-independent hub that connects sRGB to CIELAB. Every
//! XYZ value in Vermilion is relative to the D65 white point and scaled so that white has a Y
//! (luminance) of 100.

use crate::colors::cielabcolor::CIELABColor;
use crate::colors::rgbcolor::RGBColor;
use crate::consts::{D65_WHITE_POINT, LAB_EPSILON, LAB_KAPPA, SRGB_ENCODE_THRESHOLD, XYZ_TO_SRGB};
use crate::coord::Coord;
use na::Vector3;

/// A point in the CIE 1931 XYZ color space under D65.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X axis, a mix of the cone responses.
    pub x: f64,
    /// The Y axis, luminance. 100 is diffuse white.
    pub y: f64,
    /// The Z axis, roughly the short-wavelength cone response.
    pub z: f64,
}

// sRGB transfer function, linear 0-1 to encoded 0-1
fn encode_gamma(v: f64) -> f64 {
    if v > SRGB_ENCODE_THRESHOLD {
        1.055 * v.powf(1. / 2.4) - 0.055
    } else {
        12.92 * v
    }
}

impl XYZColor {
    /// Applies the inverse sRGB matrix and re-encodes the transfer curve. Colors outside the sRGB
    /// gamut come back with channels outside 0-255: nothing is clamped here.
    pub fn to_rgb(self) -> RGBColor {
        let linear = XYZ_TO_SRGB() * Vector3::new(self.x / 100., self.y / 100., self.z / 100.);
        RGBColor {
            r: encode_gamma(linear[0]) * 255.,
            g: encode_gamma(linear[1]) * 255.,
            b: encode_gamma(linear[2]) * 255.,
        }
    }

    /// The CIE nonlinear transform to CIELAB, with the cube root replaced by a line near black.
    pub fn to_lab(self) -> CIELABColor {
        let f = |t: f64| {
            if t > LAB_EPSILON {
                t.cbrt()
            } else {
                LAB_KAPPA * t + 16. / 116.
            }
        };
        let fx = f(self.x / D65_WHITE_POINT[0]);
        let fy = f(self.y / D65_WHITE_POINT[1]);
        let fz = f(self.z / D65_WHITE_POINT[2]);
        // a and b are opponent axes: red-green and yellow-blue
        CIELABColor {
            l: 116. * fy - 16.,
            a: 500. * (fx - fy),
            b: 200. * (fy - fz),
        }
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(c: XYZColor) -> Coord {
        Coord {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_xyz_rgb_round_trip() {
        for &(r, g, b) in &[(255., 0., 0.), (12., 200., 93.5), (255., 255., 255.), (3., 3., 3.)] {
            let back = RGBColor { r, g, b }.to_xyz().to_rgb();
            // the inverse matrix is rounded, and the linear segment near 0 amplifies that drift
            assert!((back.r - r).abs() <= 0.5);
            assert!((back.g - g).abs() <= 0.5);
            assert!((back.b - b).abs() <= 0.5);
        }
    }

    #[test]
    fn test_out_of_gamut_is_not_clamped() {
        let rgb = XYZColor { x: 0., y: 80., z: 0. }.to_rgb();
        assert!(rgb.r < 0.);
        assert!(rgb.g > 255.);
    }

    #[test]
    fn test_white_to_lab() {
        let lab = XYZColor { x: 95.047, y: 100., z: 108.883 }.to_lab();
        assert!((lab.l - 100.).abs() <= 1e-9);
        assert!(lab.a.abs() <= 1e-9);
        assert!(lab.b.abs() <= 1e-9);
        let black = XYZColor { x: 0., y: 0., z: 0. }.to_lab();
        assert!(black.l.abs() <= 1e-9);
    }
}
