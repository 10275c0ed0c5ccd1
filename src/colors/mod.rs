//! This module contains one struct per color space, each carrying the closed-form conversions to
//! its neighbors in the conversion graph, plus [`ColorObject`], which can hold any of them. For
//! convenience, each struct is imported into this module's namespace directly.
//!
//! The direct conversions are:
//!
//! - RGB to and from HSV, and RGB to and from XYZ
//! - HSV to and from HSL, and HSV to and from HWB
//! - XYZ to and from CIELAB
//! - CIELAB to and from CIELCH
//!
//! Everything else is a composition of these; see [`convert`](crate::convert).
pub mod cielabcolor;
pub mod cielchcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod hwbcolor;
pub mod rgbcolor;
pub mod xyzcolor;

use std::collections::HashMap;

use crate::coord::Coord;
use crate::error::ColorError;
use crate::space::ColorSpace;

pub use self::cielabcolor::CIELABColor;
pub use self::cielchcolor::CIELCHColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::hwbcolor::HWBColor;
pub use self::rgbcolor::RGBColor;
pub use self::xyzcolor::XYZColor;

/// A structured color in any of the seven spaces. When deserialized, the first space (in the order
/// of [`ColorSpace::ALL`]) whose field names are all present wins, which means `{l, a, b}` is read
/// as CIELAB but `{h, w, b}` is read as HWB. A bare three-element sequence is also accepted, the
/// way serde reads any struct from a sequence, and always comes back as RGB.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorObject {
    /// sRGB.
    Rgb(RGBColor),
    /// HSL.
    Hsl(HSLColor),
    /// HSV.
    Hsv(HSVColor),
    /// HWB.
    Hwb(HWBColor),
    /// CIE XYZ.
    Xyz(XYZColor),
    /// CIELAB.
    Lab(CIELABColor),
    /// CIELCH.
    Lch(CIELCHColor),
}

impl ColorObject {
    /// Builds the structured form of a positional triple. No clamping happens here.
    pub fn from_components(space: ColorSpace, components: [f64; 3]) -> ColorObject {
        let c = Coord::from(components);
        match space {
            ColorSpace::Rgb => ColorObject::Rgb(c.into()),
            ColorSpace::Hsl => ColorObject::Hsl(c.into()),
            ColorSpace::Hsv => ColorObject::Hsv(c.into()),
            ColorSpace::Hwb => ColorObject::Hwb(c.into()),
            ColorSpace::Xyz => ColorObject::Xyz(c.into()),
            ColorSpace::Lab => ColorObject::Lab(c.into()),
            ColorSpace::Lch => ColorObject::Lch(c.into()),
        }
    }

    /// Reads a structured object given as loose named fields, such as a parsed JSON object. The
    /// space is the first one whose every parameter name is present; other keys are ignored.
    /// # Example
    /// ```
    /// # use std::collections::HashMap;
    /// # use vermilion::colors::{ColorObject, HWBColor};
    /// let mut fields = HashMap::new();
    /// fields.insert("h".to_string(), 120.);
    /// fields.insert("w".to_string(), 10.);
    /// fields.insert("b".to_string(), 30.);
    /// assert_eq!(ColorObject::from_fields(&fields).unwrap(),
    ///            ColorObject::Hwb(HWBColor{h: 120., w: 10., b: 30.}));
    /// fields.remove("w");
    /// assert!(ColorObject::from_fields(&fields).is_err());
    /// ```
    pub fn from_fields(fields: &HashMap<String, f64>) -> Result<ColorObject, ColorError> {
        for space in ColorSpace::ALL.iter() {
            let params = space.params();
            let found: Vec<f64> = params
                .iter()
                .filter_map(|p| fields.get(p.name).cloned())
                .collect();
            if found.len() == params.len() {
                return Ok(ColorObject::from_components(
                    *space,
                    [found[0], found[1], found[2]],
                ));
            }
        }
        let mut properties: Vec<String> = fields.keys().cloned().collect();
        properties.sort();
        Err(ColorError::InvalidColorObject { properties })
    }

    /// The space this object is in.
    pub fn space(&self) -> ColorSpace {
        match self {
            ColorObject::Rgb(_) => ColorSpace::Rgb,
            ColorObject::Hsl(_) => ColorSpace::Hsl,
            ColorObject::Hsv(_) => ColorSpace::Hsv,
            ColorObject::Hwb(_) => ColorSpace::Hwb,
            ColorObject::Xyz(_) => ColorSpace::Xyz,
            ColorObject::Lab(_) => ColorSpace::Lab,
            ColorObject::Lch(_) => ColorSpace::Lch,
        }
    }

    /// The components in the positional order of the space's descriptor.
    pub fn components(&self) -> [f64; 3] {
        Coord::from(*self).into()
    }

    /// Looks up one component by its parameter name.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.space()
            .param_index(name)
            .map(|i| self.components()[i])
    }
}

impl From<ColorObject> for Coord {
    fn from(c: ColorObject) -> Coord {
        match c {
            ColorObject::Rgb(c) => c.into(),
            ColorObject::Hsl(c) => c.into(),
            ColorObject::Hsv(c) => c.into(),
            ColorObject::Hwb(c) => c.into(),
            ColorObject::Xyz(c) => c.into(),
            ColorObject::Lab(c) => c.into(),
            ColorObject::Lch(c) => c.into(),
        }
    }
}

macro_rules! impl_from_color {
    ($($variant:ident($ty:ty)),*) => {
        $(
            impl From<$ty> for ColorObject {
                fn from(c: $ty) -> ColorObject {
                    ColorObject::$variant(c)
                }
            }
        )*
    };
}

impl_from_color!(
    Rgb(RGBColor),
    Hsl(HSLColor),
    Hsv(HSVColor),
    Hwb(HWBColor),
    Xyz(XYZColor),
    Lab(CIELABColor),
    Lch(CIELCHColor)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_follow_descriptor_order() {
        for space in ColorSpace::ALL.iter() {
            let obj = ColorObject::from_components(*space, [1., 2., 3.]);
            assert_eq!(obj.space(), *space);
            assert_eq!(obj.components(), [1., 2., 3.]);
            for (i, p) in space.params().iter().enumerate() {
                assert_eq!(obj.get(p.name), Some((i + 1) as f64));
            }
        }
        let lch = ColorObject::from(CIELCHColor { l: 1., c: 2., h: 3. });
        assert_eq!(lch.get("c"), Some(2.));
        assert_eq!(lch.get("a"), None);
    }

    #[test]
    fn test_field_detection_order() {
        let mut fields = HashMap::new();
        for (k, v) in &[("l", 50.), ("a", 10.), ("b", -10.), ("h", 30.), ("s", 20.)] {
            fields.insert(k.to_string(), *v);
        }
        // h, s, l comes before l, a, b
        assert_eq!(
            ColorObject::from_fields(&fields).unwrap(),
            ColorObject::Hsl(HSLColor { h: 30., s: 20., l: 50. })
        );
        fields.remove("s");
        assert_eq!(
            ColorObject::from_fields(&fields).unwrap(),
            ColorObject::Lab(CIELABColor { l: 50., a: 10., b: -10. })
        );
    }

    #[test]
    fn test_invalid_object() {
        let mut fields = HashMap::new();
        fields.insert("r".to_string(), 1.);
        fields.insert("q".to_string(), 1.);
        assert_eq!(
            ColorObject::from_fields(&fields),
            Err(ColorError::InvalidColorObject {
                properties: vec!["q".to_string(), "r".to_string()]
            })
        );
    }

    #[test]
    fn test_serde_untagged() {
        let obj: ColorObject = serde_json::from_str(r#"{"h": 10, "w": 20, "b": 30}"#).unwrap();
        assert_eq!(obj, ColorObject::Hwb(HWBColor { h: 10., w: 20., b: 30. }));
        let obj: ColorObject = serde_json::from_str(r#"{"l": 10, "a": 20, "b": 30}"#).unwrap();
        assert_eq!(obj.space(), ColorSpace::Lab);
        let json = serde_json::to_string(&ColorObject::Rgb(RGBColor { r: 1., g: 2., b: 3. })).unwrap();
        assert_eq!(json, r#"{"r":1.0,"g":2.0,"b":3.0}"#);
    }

    #[test]
    fn test_serde_sequence_is_rgb() {
        let obj: ColorObject = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(obj, ColorObject::Rgb(RGBColor { r: 1., g: 2., b: 3. }));
        assert!(serde_json::from_str::<ColorObject>("[1, 2]").is_err());
    }
}
