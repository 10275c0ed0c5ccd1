//! This file uses the CSS numeric parsing in `cssnumeric.rs` to read color strings: CSS named
//! colors, hex codes, and functional notation for every space Vermilion has. Each function form
//! accepts both the modern space-separated syntax (`hsl(210 40% 50% / 0.5)`) and the legacy
//! comma-separated one (`hsla(210, 40%, 50%, 0.5)`). Arithmetic such as `calc()` is not supported.
//!
//! The accepted forms are:
//!
//! - hex codes of 3, 4, 6 or 8 digits, with or without the leading `#`
//! - `rgb()` / `rgba()` with three numbers or three percentages (not mixed)
//! - `hsl()`, `hsv()` and `hwb()`, plus their `a`-suffixed aliases, with a hue (optionally in
//!   `deg`, `grad`, `rad` or `turn`) and two percentages
//! - `lab(L% a b)`, `lch(L% c h)` and `xyz(x y z)`
//!
//! An alpha value, given after the components, may be a number from 0 to 1 or a percentage.

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::cssnumeric::{parse_css_number, NUMBER_PATTERN};
use crate::error::ColorError;
use crate::named;
use crate::space::ColorSpace;

/// A color read from a string, not yet normalized.
pub(crate) type ParsedColor = (ColorSpace, [f64; 3], f64);

/// What kind of token a functional notation expects in each position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Segment {
    Number,
    Percentage,
    Hue,
}

impl Segment {
    fn pattern(self) -> String {
        match self {
            Segment::Number => format!("({})", NUMBER_PATTERN),
            Segment::Percentage => format!("({}%)", NUMBER_PATTERN),
            Segment::Hue => format!("({}(?:deg|grad|rad|turn)?)", NUMBER_PATTERN),
        }
    }
}

fn alpha_pattern() -> String {
    format!("({}%?)", NUMBER_PATTERN)
}

/// One functional notation: the space it produces, the token kinds it takes, and the two regexes
/// (space-separated and comma-separated) that recognize it.
struct ColorModel {
    space: ColorSpace,
    segments: [Segment; 3],
    patterns: [Regex; 2],
}

impl ColorModel {
    fn new(space: ColorSpace, segments: [Segment; 3], alpha_alias: bool) -> ColorModel {
        let p1 = segments[0].pattern();
        let p2 = segments[1].pattern();
        let p3 = segments[2].pattern();
        let alpha = alpha_pattern();
        let name = if alpha_alias {
            format!("{}a?", space.name())
        } else {
            space.name().to_string()
        };
        let spaced = format!(r"{} +{} +{}(?: */ *{})?", p1, p2, p3, alpha);
        let commas = format!(r"{} *, *{} *, *{}(?: *, *{})?", p1, p2, p3, alpha);
        let build = |content: &str| {
            Regex::new(&format!(r"^{}\( *{} *\)$", name, content))
                .expect("color notation pattern is valid")
        };
        ColorModel {
            space,
            segments,
            patterns: [build(&spaced), build(&commas)],
        }
    }

    fn transform(&self, captures: &Captures) -> Result<ParsedColor, ColorError> {
        let mut components = [0.; 3];
        for (i, segment) in self.segments.iter().enumerate() {
            let token = parse_css_number(&captures[i + 1])?;
            components[i] = match (self.space, segment) {
                (ColorSpace::Rgb, _) => token.as_rgb_channel(),
                (_, Segment::Hue) => token.as_degrees(),
                _ => token.value(),
            };
        }
        let alpha = match captures.get(4) {
            Some(m) => parse_css_number(m.as_str())?.as_alpha(),
            None => 1.,
        };
        Ok((self.space, components, alpha))
    }
}

lazy_static! {
    static ref HEX: Regex = Regex::new(r"^#?([0-9a-f]{3}|[0-9a-f]{4}|[0-9a-f]{6}|[0-9a-f]{8})$")
        .expect("hex pattern is valid");
    static ref MODELS: Vec<ColorModel> = {
        use self::Segment::*;
        vec![
            ColorModel::new(ColorSpace::Rgb, [Number, Number, Number], true),
            ColorModel::new(ColorSpace::Rgb, [Percentage, Percentage, Percentage], true),
            ColorModel::new(ColorSpace::Hsl, [Hue, Percentage, Percentage], true),
            ColorModel::new(ColorSpace::Hsv, [Hue, Percentage, Percentage], true),
            ColorModel::new(ColorSpace::Hwb, [Hue, Percentage, Percentage], true),
            ColorModel::new(ColorSpace::Lab, [Percentage, Number, Number], false),
            ColorModel::new(ColorSpace::Lch, [Percentage, Number, Hue], false),
            ColorModel::new(ColorSpace::Xyz, [Number, Number, Number], false),
        ]
    };
}

/// Reads the digits of a hex code that has already matched [`HEX`]. Short forms double each digit.
fn parse_hex_digits(digits: &str) -> Result<ParsedColor, ColorError> {
    let pairs: Vec<String> = if digits.len() <= 4 {
        digits.chars().map(|c| c.to_string().repeat(2)).collect()
    } else {
        digits
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect()
    };
    let mut values = Vec::with_capacity(4);
    for pair in &pairs {
        let value = u8::from_str_radix(pair, 16)
            .map_err(|_| ColorError::UnableToParse(digits.to_string()))?;
        values.push(f64::from(value));
    }
    let alpha = values.get(3).map_or(1., |a| a / 255.);
    Ok((ColorSpace::Rgb, [values[0], values[1], values[2]], alpha))
}

/// Parses any supported color string. Matching ignores case and surrounding whitespace; named
/// colors are tried first, then hex codes, then each functional notation in turn.
pub(crate) fn parse_color(input: &str) -> Result<ParsedColor, ColorError> {
    let normalized = input.trim().to_lowercase();
    trace!(input = %normalized, "parsing color string");

    if let Some(hex) = named::lookup(&normalized) {
        return parse_hex(hex);
    }
    if HEX.is_match(&normalized) {
        return parse_hex(&normalized);
    }
    for model in MODELS.iter() {
        for pattern in model.patterns.iter() {
            if let Some(captures) = pattern.captures(&normalized) {
                return model.transform(&captures);
            }
        }
    }

    debug!(input = %input, "no color notation matched");
    Err(ColorError::UnableToParse(input.to_string()))
}

/// Parses a hex code alone, with or without the leading `#`.
pub(crate) fn parse_hex(code: &str) -> Result<ParsedColor, ColorError> {
    let captures = HEX
        .captures(code)
        .ok_or_else(|| ColorError::UnableToParse(code.to_string()))?;
    parse_hex_digits(&captures[1])
}
