//! The seven color spaces Vermilion understands, and the descriptor table that says what their
//! parameters are called, which values they may take, and which of them are circular. This table
//! is the only place those facts live: clamping, hue wrapping, mapping structured objects to and
//! from positional triples, and string serialization all read it.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A color space tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// sRGB, each channel from 0 to 255.
    Rgb,
    /// Hue, saturation, lightness derived from sRGB.
    Hsl,
    /// Hue, saturation, value derived from sRGB.
    Hsv,
    /// Hue, whiteness, blackness derived from sRGB.
    Hwb,
    /// CIE 1931 XYZ, D65, scaled so that white has Y = 100.
    Xyz,
    /// CIELAB referenced to D65.
    Lab,
    /// The cylindrical form of CIELAB.
    Lch,
}

/// One parameter of a color space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorParam {
    /// The field name used by structured color objects, e.g. `"h"`.
    pub name: &'static str,
    /// Smallest valid value. May be negative infinity.
    pub min: f64,
    /// Largest valid value. May be infinity.
    pub max: f64,
    /// Whether the parameter is an angle that loops around instead of clamping.
    pub wraps: bool,
    /// Unit suffix used when writing the value out as CSS.
    pub suffix: Option<&'static str>,
}

const fn param(name: &'static str, min: f64, max: f64) -> ColorParam {
    ColorParam {
        name,
        min,
        max,
        wraps: false,
        suffix: None,
    }
}

const fn percent(name: &'static str) -> ColorParam {
    ColorParam {
        name,
        min: 0.,
        max: 100.,
        wraps: false,
        suffix: Some("%"),
    }
}

const HUE: ColorParam = ColorParam {
    name: "h",
    min: 0.,
    max: 360.,
    wraps: true,
    suffix: Some("deg"),
};

const LIGHTNESS: ColorParam = ColorParam {
    name: "l",
    min: 0.,
    max: f64::INFINITY,
    wraps: false,
    suffix: Some("%"),
};

const RGB_PARAMS: [ColorParam; 3] = [param("r", 0., 255.), param("g", 0., 255.), param("b", 0., 255.)];
const HSL_PARAMS: [ColorParam; 3] = [HUE, percent("s"), percent("l")];
const HSV_PARAMS: [ColorParam; 3] = [HUE, percent("s"), percent("v")];
const HWB_PARAMS: [ColorParam; 3] = [HUE, percent("w"), percent("b")];
const XYZ_PARAMS: [ColorParam; 3] = [
    param("x", f64::NEG_INFINITY, f64::INFINITY),
    param("y", f64::NEG_INFINITY, f64::INFINITY),
    param("z", f64::NEG_INFINITY, f64::INFINITY),
];
const LAB_PARAMS: [ColorParam; 3] = [
    LIGHTNESS,
    param("a", f64::NEG_INFINITY, f64::INFINITY),
    param("b", f64::NEG_INFINITY, f64::INFINITY),
];
const LCH_PARAMS: [ColorParam; 3] = [LIGHTNESS, param("c", 0., f64::INFINITY), HUE];

impl ColorSpace {
    /// Every space, in the order used when detecting the space of a structured object.
    pub const ALL: [ColorSpace; 7] = [
        ColorSpace::Rgb,
        ColorSpace::Hsl,
        ColorSpace::Hsv,
        ColorSpace::Hwb,
        ColorSpace::Xyz,
        ColorSpace::Lab,
        ColorSpace::Lch,
    ];

    /// The lowercase tag, as used in CSS function names.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Hwb => "hwb",
            ColorSpace::Xyz => "xyz",
            ColorSpace::Lab => "lab",
            ColorSpace::Lch => "lch",
        }
    }

    /// The three parameters of this space, in positional order.
    /// # Example
    /// ```
    /// # use vermilion::space::ColorSpace;
    /// let names: Vec<&str> = ColorSpace::Hwb.params().iter().map(|p| p.name).collect();
    /// assert_eq!(names, vec!["h", "w", "b"]);
    /// assert!(ColorSpace::Hwb.params()[0].wraps);
    /// ```
    pub fn params(self) -> &'static [ColorParam; 3] {
        match self {
            ColorSpace::Rgb => &RGB_PARAMS,
            ColorSpace::Hsl => &HSL_PARAMS,
            ColorSpace::Hsv => &HSV_PARAMS,
            ColorSpace::Hwb => &HWB_PARAMS,
            ColorSpace::Xyz => &XYZ_PARAMS,
            ColorSpace::Lab => &LAB_PARAMS,
            ColorSpace::Lch => &LCH_PARAMS,
        }
    }

    /// Position of the named parameter, if this space has it.
    pub fn param_index(self, name: &str) -> Option<usize> {
        self.params().iter().position(|p| p.name == name)
    }

    // row/column of the conversion table
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<ColorSpace, ColorError> {
        ColorSpace::ALL
            .iter()
            .cloned()
            .find(|space| space.name() == s)
            .ok_or_else(|| ColorError::InvalidColorSpace(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_tags() {
        for space in ColorSpace::ALL.iter() {
            assert_eq!(space.name().parse::<ColorSpace>().unwrap(), *space);
        }
        assert_eq!(
            "cmyk".parse::<ColorSpace>(),
            Err(ColorError::InvalidColorSpace("cmyk".to_string()))
        );
        // tags are exact
        assert!("RGB".parse::<ColorSpace>().is_err());
    }

    #[test]
    fn test_descriptor_table() {
        for (i, space) in ColorSpace::ALL.iter().enumerate() {
            assert_eq!(space.index(), i);
            for p in space.params().iter() {
                assert!(p.min < p.max);
                if p.wraps {
                    assert_eq!((p.min, p.max), (0., 360.));
                }
            }
        }
        assert_eq!(ColorSpace::Lch.param_index("c"), Some(1));
        assert_eq!(ColorSpace::Lab.param_index("c"), None);
        assert_eq!(ColorSpace::Hsl.params()[1].suffix, Some("%"));
        assert_eq!(ColorSpace::Rgb.params()[0].suffix, None);
    }
}
