//! This file separates out the numeric side of CSS color parsing: single tokens such as `"204"`,
//! `"40%"`, `"0.5turn"` or `".25"`, and what they mean as an RGB channel, a hue, a percentage or an
//! alpha value. `csscolor.rs` finds the tokens; this file gives them values. (Source for CSS
//! syntax: [https://www.w3.org/TR/css-color-4/](https://www.w3.org/TR/css-color-4/).)

use std::f64::consts::PI;

use regex::Regex;

use crate::error::ColorError;

/// Regex fragment matching an unsigned or signed decimal, with or without a leading integer part.
pub(crate) const NUMBER_PATTERN: &str = r"[+-]?(?:\d+(?:\.\d+)?|\.\d+)";

/// The units a hue may carry. A bare number is in degrees.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub(crate) enum AngleUnit {
    Deg,
    Grad,
    Rad,
    Turn,
}

impl AngleUnit {
    fn from_suffix(suffix: &str) -> Option<AngleUnit> {
        match suffix {
            "deg" => Some(AngleUnit::Deg),
            "grad" => Some(AngleUnit::Grad),
            "rad" => Some(AngleUnit::Rad),
            "turn" => Some(AngleUnit::Turn),
            _ => None,
        }
    }

    fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleUnit::Deg => value,
            AngleUnit::Grad => value * 0.9,
            AngleUnit::Rad => value * (180. / PI),
            AngleUnit::Turn => value * 360.,
        }
    }
}

/// A CSS numeric token.
#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) enum CSSNumeric {
    /// A plain number, like 255 or 0.8.
    Number(f64),
    /// A number followed by `%`, stored as written: `"40%"` is `Percentage(40.)`.
    Percentage(f64),
    /// A number followed by an angle unit.
    Angle(f64, AngleUnit),
}

lazy_static! {
    static ref NUMERIC_TOKEN: Regex = Regex::new(&format!(
        r"^({})(%|deg|grad|rad|turn)?$",
        NUMBER_PATTERN
    ))
    .expect("numeric token pattern is valid");
}

/// Parses one numeric token. Surrounding whitespace is not allowed.
pub(crate) fn parse_css_number(token: &str) -> Result<CSSNumeric, ColorError> {
    let captures = NUMERIC_TOKEN
        .captures(token)
        .ok_or_else(|| ColorError::UnableToParse(token.to_string()))?;
    let value: f64 = captures[1]
        .parse()
        .map_err(|_| ColorError::UnableToParse(token.to_string()))?;
    match captures.get(2).map(|m| m.as_str()) {
        None => Ok(CSSNumeric::Number(value)),
        Some("%") => Ok(CSSNumeric::Percentage(value)),
        Some(unit) => AngleUnit::from_suffix(unit)
            .map(|unit| CSSNumeric::Angle(value, unit))
            .ok_or_else(|| ColorError::UnableToParse(token.to_string())),
    }
}

impl CSSNumeric {
    /// The number as written, ignoring any unit.
    pub(crate) fn value(self) -> f64 {
        match self {
            CSSNumeric::Number(v) | CSSNumeric::Percentage(v) | CSSNumeric::Angle(v, _) => v,
        }
    }

    /// An sRGB channel: numbers are taken as 0-255, percentages are scaled onto 0-255.
    pub(crate) fn as_rgb_channel(self) -> f64 {
        match self {
            CSSNumeric::Percentage(v) => v / 100. * 255.,
            other => other.value(),
        }
    }

    /// A hue in degrees. Angles are converted from their unit.
    pub(crate) fn as_degrees(self) -> f64 {
        match self {
            CSSNumeric::Angle(v, unit) => unit.to_degrees(v),
            other => other.value(),
        }
    }

    /// An alpha value: numbers are taken as 0-1, percentages are divided by 100.
    pub(crate) fn as_alpha(self) -> f64 {
        match self {
            CSSNumeric::Percentage(v) => v / 100.,
            other => other.value(),
        }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_css_parse_numbers() {
        assert_eq!(parse_css_number("184").unwrap(), CSSNumeric::Number(184.));
        // leading zeros and signs
        assert_eq!(parse_css_number("00423").unwrap(), CSSNumeric::Number(423.));
        assert_eq!(parse_css_number("-00.423").unwrap(), CSSNumeric::Number(-0.423));
        assert_eq!(parse_css_number("+0.5").unwrap(), CSSNumeric::Number(0.5));
        // no integer part
        assert_eq!(parse_css_number(".25").unwrap(), CSSNumeric::Number(0.25));
    }

    #[test]
    fn test_css_parse_units() {
        assert_eq!(parse_css_number("40%").unwrap(), CSSNumeric::Percentage(40.));
        assert_eq!(parse_css_number("12.5%").unwrap(), CSSNumeric::Percentage(12.5));
        assert_eq!(
            parse_css_number("0.5turn").unwrap(),
            CSSNumeric::Angle(0.5, AngleUnit::Turn)
        );
        assert_eq!(parse_css_number("90deg").unwrap().as_degrees(), 90.);
        assert_eq!(parse_css_number("100grad").unwrap().as_degrees(), 90.);
        assert_eq!(parse_css_number("0.5turn").unwrap().as_degrees(), 180.);
        let rad = parse_css_number("3.14159rad").unwrap().as_degrees();
        assert!((rad - 180.).abs() <= 1e-3);
    }

    #[test]
    fn test_interpretation() {
        assert_eq!(parse_css_number("50%").unwrap().as_rgb_channel(), 127.5);
        assert_eq!(parse_css_number("128").unwrap().as_rgb_channel(), 128.);
        assert_eq!(parse_css_number("50%").unwrap().as_alpha(), 0.5);
        assert_eq!(parse_css_number("0.3").unwrap().as_alpha(), 0.3);
        assert_eq!(parse_css_number("210").unwrap().as_degrees(), 210.);
    }

    #[test]
    fn test_errors() {
        for bad in &["abc", "14.23.2", "-24%%", "1%2%", "12px", "", "5.", " 5"] {
            assert_eq!(
                parse_css_number(bad),
                Err(ColorError::UnableToParse(bad.to_string()))
            );
        }
    }
}
