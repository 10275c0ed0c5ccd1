//! The single error type returned by the fallible, boundary-facing parts of Vermilion: parsing
//! strings, reading structured objects, and naming spaces or components at runtime. The numeric
//! core (conversion, difference, distance) never fails.

use crate::space::ColorSpace;

/// Everything that can go wrong when turning outside input into a [`Color`](crate::color::Color).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The given space tag is not one of rgb, hsl, hsv, hwb, xyz, lab, lch.
    #[error("invalid color space \"{0}\", supported color spaces are rgb, hsl, hsv, hwb, xyz, lab and lch")]
    InvalidColorSpace(String),
    /// A structured object did not contain the full numeric parameter set of any space.
    #[error("invalid color object with properties [{}], a color object must contain one of the sets of numeric properties: r, g, b | h, s, l | h, s, v | h, w, b | x, y, z | l, a, b | l, c, h", .properties.join(", "))]
    InvalidColorObject {
        /// The property names that were present.
        properties: Vec<String>,
    },
    /// The named component does not exist in the given space.
    #[error("invalid color component, \"{component}\" is not a component of \"{space}\"")]
    InvalidColorSpaceComponent {
        /// The space that was asked.
        space: ColorSpace,
        /// The offending component name.
        component: String,
    },
    /// The string is not a CSS color, hex code, or color name.
    #[error("invalid color string \"{0}\"")]
    UnableToParse(String),
    /// A component list must contain three numbers, or four with alpha.
    #[error("invalid color components: got {0} numbers, color components may only contain either 3 or 4 numbers")]
    InvalidColorComponents(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ColorError::InvalidColorSpace("cmyk".to_string());
        assert!(err.to_string().contains("\"cmyk\""));
        let err = ColorError::InvalidColorSpaceComponent {
            space: ColorSpace::Hsl,
            component: "v".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid color component, \"v\" is not a component of \"hsl\""
        );
        let err = ColorError::InvalidColorObject {
            properties: vec!["q".to_string(), "r".to_string()],
        };
        assert!(err.to_string().starts_with("invalid color object with properties [q, r]"));
    }
}
