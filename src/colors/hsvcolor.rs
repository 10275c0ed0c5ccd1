//! This module implements the HSV color space, a cousin of the HSL color space. The definition of
//! value differs from lightness: it goes from black to full saturation instead of black to
//! white. This makes value an extraordinarily poor analog of luminance (dark purple is the same
//! value as white, despite reflecting one-tenth the light), but it makes HSV the natural pivot for
//! the other hue-based spaces: HSL and HWB are both a closed-form reshaping of HSV, and HSV is the
//! only one of the three with a direct path to RGB.

use crate::colors::hslcolor::HSLColor;
use crate::colors::hwbcolor::HWBColor;
use crate::colors::rgbcolor::RGBColor;
use crate::coord::Coord;

/// An HSV color, defining parameters for hue, saturation, and value from the RGB space.
/// # Example
/// As with HSL, changing a red to a yellow results in a lightness increase as well.
///
/// ```
/// # use vermilion::colors::HSVColor;
/// let red = HSVColor{h: 0., s: 50., v: 80.}.to_rgb();
/// let yellow = HSVColor{h: 50., s: 50., v: 80.}.to_rgb();
/// assert!((red.r - 204.).abs() <= 1e-9);
/// assert!((red.g - 102.).abs() <= 1e-9 && (red.b - 102.).abs() <= 1e-9);
/// assert!(yellow.g > red.g);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, an angle from 0 to 360 degrees.
    pub h: f64,
    /// The saturation: distance from the gray of the same value, from 0 to 100.
    pub s: f64,
    /// The value, the largest RGB channel, from 0 to 100.
    pub v: f64,
}

impl HSVColor {
    /// Unfolds the hexagon back into RGB, one sector at a time.
    pub fn to_rgb(self) -> RGBColor {
        let (s, v) = (self.s / 100., self.v / 100.);
        if s == 0.0 {
            return RGBColor {
                r: v * 255.,
                g: v * 255.,
                b: v * 255.,
            };
        }
        // 360 degrees lands back in the first sector, and so do hues a hair below 0, which
        // rem_euclid rounds up to exactly 6
        let hp = (self.h / 60.).rem_euclid(6.);
        let hp = if hp >= 6. { 0. } else { hp };
        let sector = hp.floor();
        let f = hp - sector;
        let c1 = v * (1. - s);
        let c2 = v * (1. - s * f);
        let c3 = v * (1. - s * (1. - f));
        let (r, g, b) = match sector as u8 {
            0 => (v, c3, c1),
            1 => (c2, v, c1),
            2 => (c1, v, c3),
            3 => (c1, c2, v),
            4 => (c3, c1, v),
            _ => (v, c1, c2),
        };
        RGBColor {
            r: r * 255.,
            g: g * 255.,
            b: b * 255.,
        }
    }

    /// Reshapes the HSV cone into the HSL bicone. Pure black and pure white have no meaningful
    /// saturation and get 0.
    pub fn to_hsl(self) -> HSLColor {
        let (s, v) = (self.s / 100., self.v / 100.);
        let l = v - v * s / 2.;
        let s_l = if l == 0. || l == 1. {
            0.
        } else {
            (v - l) / l.min(1. - l)
        };
        HSLColor {
            h: self.h,
            s: s_l * 100.,
            l: l * 100.,
        }
    }

    /// Whiteness is the amount of white mixed in, blackness the amount of black.
    pub fn to_hwb(self) -> HWBColor {
        let (s, v) = (self.s / 100., self.v / 100.);
        HWBColor {
            h: self.h,
            w: (1. - s) * v * 100.,
            b: (1. - v) * 100.,
        }
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl From<HSVColor> for Coord {
    fn from(c: HSVColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.v,
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use crate::convert::convert_components;
    use crate::space::ColorSpace;

    #[test]
    fn test_hsv_rgb_conversion() {
        let red = HSVColor { h: 0., s: 100., v: 100. }.to_rgb();
        assert_eq!((red.r, red.g, red.b), (255., 0., 0.));
        let wrapped_red = HSVColor { h: 360., s: 100., v: 100. }.to_rgb();
        assert_eq!((wrapped_red.r, wrapped_red.g, wrapped_red.b), (255., 0., 0.));
        let gray = HSVColor { h: 200., s: 0., v: 50. }.to_rgb();
        assert_eq!((gray.r, gray.g, gray.b), (127.5, 127.5, 127.5));
        let cyan = HSVColor { h: 180., s: 100., v: 100. }.to_rgb();
        assert_eq!((cyan.r, cyan.g, cyan.b), (0., 255., 255.));
    }

    #[test]
    fn test_tiny_negative_hue_is_red() {
        let red = HSVColor { h: -1e-20, s: 100., v: 100. }.to_rgb();
        assert_eq!((red.r, red.g, red.b), (255., 0., 0.));
        let hsv = convert_components([-1e-20, 100., 100.], ColorSpace::Hsv, ColorSpace::Rgb);
        assert_eq!(hsv, [255., 0., 0.]);
        let hsl = convert_components([-1e-20, 100., 50.], ColorSpace::Hsl, ColorSpace::Rgb);
        assert_eq!(hsl, [255., 0., 0.]);
        let hwb = convert_components([-1e-20, 0., 0.], ColorSpace::Hwb, ColorSpace::Rgb);
        assert_eq!(hwb, [255., 0., 0.]);
    }

    #[test]
    fn test_rgb_round_trip() {
        for &(r, g, b) in &[(12., 200., 93.5), (255., 254., 0.), (1., 2., 3.), (99., 7., 240.)] {
            let back = RGBColor { r, g, b }.to_hsv().to_rgb();
            assert!((back.r - r).abs() <= 1e-6);
            assert!((back.g - g).abs() <= 1e-6);
            assert!((back.b - b).abs() <= 1e-6);
        }
    }

    #[test]
    fn test_hsv_hsl_degenerate() {
        let black = HSVColor { h: 30., s: 80., v: 0. }.to_hsl();
        assert_eq!((black.h, black.s, black.l), (30., 0., 0.));
        let white = HSVColor { h: 30., s: 0., v: 100. }.to_hsl();
        assert_eq!((white.s, white.l), (0., 100.));
        let pure = HSVColor { h: 120., s: 100., v: 100. }.to_hsl();
        assert_eq!((pure.s, pure.l), (100., 50.));
    }

    #[test]
    fn test_hsv_hwb() {
        let hwb = HSVColor { h: 90., s: 50., v: 80. }.to_hwb();
        assert_eq!(hwb.h, 90.);
        assert!((hwb.w - 40.).abs() <= 1e-10);
        assert!((hwb.b - 20.).abs() <= 1e-10);
    }
}
