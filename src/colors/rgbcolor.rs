//! sRGB, the space most colors arrive in. Channels run from 0 to 255 as floating-point values, so
//! no precision is lost until a color is written out as hex. RGB is one of the two hubs of the
//! conversion graph: the hue-based spaces reach the CIE spaces through it.

use crate::colors::hsvcolor::HSVColor;
use crate::colors::xyzcolor::XYZColor;
use crate::consts::{SRGB_DECODE_THRESHOLD, SRGB_TO_XYZ};
use crate::coord::Coord;
use na::Vector3;

/// A color in sRGB.
/// # Example
/// ```
/// # use vermilion::colors::RGBColor;
/// let orange = RGBColor{r: 255., g: 128., b: 0.};
/// let hsv = orange.to_hsv();
/// assert!((hsv.h - 30.1176).abs() <= 1e-4);
/// assert_eq!((hsv.s, hsv.v), (100., 100.));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel, 0 to 255.
    pub r: f64,
    /// The green channel, 0 to 255.
    pub g: f64,
    /// The blue channel, 0 to 255.
    pub b: f64,
}

// sRGB transfer function, encoded 0-1 to linear 0-1
fn decode_gamma(v: f64) -> f64 {
    if v > SRGB_DECODE_THRESHOLD {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

impl RGBColor {
    /// Hexagonal projection into HSV. Grays, where every channel is equal, get a hue and
    /// saturation of 0.
    pub fn to_hsv(self) -> HSVColor {
        let (r, g, b) = (self.r / 255., self.g / 255., self.b / 255.);
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let delta = max_c - min_c;

        if delta == 0.0 {
            return HSVColor {
                h: 0.,
                s: 0.,
                v: max_c * 100.,
            };
        }

        // position along the hexagon, measured from the sector of the largest channel
        let hue = if max_c == r {
            ((g - b) / delta) * 60.0
        } else if max_c == g {
            ((b - r) / delta) * 60.0 + 120.0
        } else {
            ((r - g) / delta) * 60.0 + 240.0
        };
        let hue = if hue < 0.0 { hue + 360.0 } else { hue };

        HSVColor {
            h: hue,
            s: delta / max_c * 100.,
            v: max_c * 100.,
        }
    }

    /// Decodes the sRGB transfer curve and applies the D65 sRGB matrix.
    pub fn to_xyz(self) -> XYZColor {
        let linear = Vector3::new(
            decode_gamma(self.r / 255.) * 100.,
            decode_gamma(self.g / 255.) * 100.,
            decode_gamma(self.b / 255.) * 100.,
        );
        let xyz = SRGB_TO_XYZ() * linear;
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for Coord {
    fn from(c: RGBColor) -> Coord {
        Coord {
            x: c.r,
            y: c.g,
            z: c.b,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_primaries_to_hsv() {
        let red = RGBColor { r: 255., g: 0., b: 0. }.to_hsv();
        assert_eq!((red.h, red.s, red.v), (0., 100., 100.));
        let green = RGBColor { r: 0., g: 255., b: 0. }.to_hsv();
        assert_eq!(green.h, 120.);
        let blue = RGBColor { r: 0., g: 0., b: 255. }.to_hsv();
        assert_eq!(blue.h, 240.);
        // magenta sits at the end of the red sector, so hue comes out negative before wrapping
        let magenta = RGBColor { r: 255., g: 0., b: 128. }.to_hsv();
        assert!(magenta.h > 300. && magenta.h < 360.);
    }

    #[test]
    fn test_gray_to_hsv() {
        let gray = RGBColor { r: 128., g: 128., b: 128. }.to_hsv();
        assert_eq!(gray.h, 0.);
        assert_eq!(gray.s, 0.);
        assert!((gray.v - 50.196).abs() <= 1e-3);
        let black = RGBColor { r: 0., g: 0., b: 0. }.to_hsv();
        assert_eq!((black.h, black.s, black.v), (0., 0., 0.));
    }

    #[test]
    fn test_rgb_xyz_conversion() {
        let red = RGBColor { r: 255., g: 0., b: 0. }.to_xyz();
        assert!((red.x - 41.24564).abs() <= 1e-6);
        assert!((red.y - 21.26729).abs() <= 1e-6);
        assert!((red.z - 1.93339).abs() <= 1e-6);
        let white = RGBColor { r: 255., g: 255., b: 255. }.to_xyz();
        assert!((white.x - 95.047).abs() <= 1e-3);
        assert!((white.y - 100.).abs() <= 1e-3);
        assert!((white.z - 108.883).abs() <= 1e-3);
        // the linear segment of the transfer curve
        let dark = RGBColor { r: 10., g: 10., b: 10. }.to_xyz();
        assert!((dark.y - 10. / 255. / 12.92 * 100.).abs() <= 1e-4);
    }
}
