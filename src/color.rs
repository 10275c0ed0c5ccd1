//! This file defines [`Color`], the value most users of Vermilion work with. A `Color` remembers
//! the space it was created in, its three components in that space, and an alpha value. Whenever
//! it is asked for its components in some other space, it converts on the fly through the
//! [conversion table](crate::convert), so nothing is lost by creating a color in one space and
//! reading it in another.
//!
//! Every `Color` is normalized when it is made: hue components are looped into 0-360, every other
//! component is clamped to the range its space allows (see [`space`](crate::space)), and alpha is
//! clamped to 0-1. Colors are immutable values; every edit returns a new `Color`.
//!
//! Colors can be made from components, from hex numbers, from structured objects, or from strings,
//! which accept CSS color names, hex codes, and CSS functional notation for every space:
//!
//! ```
//! # use vermilion::color::Color;
//! # use vermilion::space::ColorSpace;
//! let teal = Color::parse("hsl(180deg 100% 25%)").unwrap();
//! assert_eq!(teal.to_string(), "#008080");
//! assert_eq!(teal, Color::from_components([180., 100., 25.], ColorSpace::Hsl));
//! let shifted = teal.add_to_component(ColorSpace::Hsl, "h", 200.).unwrap();
//! assert_eq!(shifted.component(ColorSpace::Hsl, "h").unwrap(), 20.);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use float_cmp::{ApproxEq, F64Margin};

use crate::bound::{bound_components, clamp, round_half_up, round_to};
use crate::colors::{CIELABColor, ColorObject};
use crate::convert::convert_components;
use crate::coord::Coord;
use crate::csscolor::parse_color;
use crate::deltae::{ciede2000, DeltaE2000Weights};
use crate::error::ColorError;
use crate::euclidean_distance::distance;
use crate::space::ColorSpace;

/// The luma above which [`Color::contrasting_text_color`] picks black text.
pub const DEFAULT_TEXT_CONTRAST_THRESHOLD: f64 = 180.;

/// A color in one of the seven spaces, with an alpha value.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColor")]
pub struct Color {
    space: ColorSpace,
    components: [f64; 3],
    alpha: f64,
}

fn opaque() -> f64 {
    1.
}

// deserialized form, normalized on the way in
#[derive(Deserialize)]
struct RawColor {
    space: ColorSpace,
    components: [f64; 3],
    #[serde(default = "opaque")]
    alpha: f64,
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Color {
        Color::new(raw.space, raw.components, raw.alpha)
    }
}

/// How [`Color::pick_closest`] compares colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMethod {
    /// CIEDE2000 with default weights, the perceptual choice.
    Difference,
    /// Euclidean distance in RGB.
    Distance,
}

impl Default for ComparisonMethod {
    fn default() -> ComparisonMethod {
        ComparisonMethod::Difference
    }
}

/// A change in components within one space, as produced by [`Color::mutation_to`]. Applying it
/// to another color shifts that color by the same amounts.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorMutation {
    /// The space the deltas are measured in.
    pub space: ColorSpace,
    /// One delta per component, in the space's positional order.
    pub deltas: [f64; 3],
}

/// The notation [`Color::to_string_with`] writes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StringFormat {
    /// `#rrggbb` or `#rrggbbaa`.
    Hex,
    /// Functional notation in the given space, such as `hsl(210deg,40%,50%)`.
    Space(ColorSpace),
}

impl From<ColorSpace> for StringFormat {
    fn from(space: ColorSpace) -> StringFormat {
        StringFormat::Space(space)
    }
}

/// Options for [`Color::to_string_with`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StringOptions {
    /// Hex or functional notation.
    pub format: StringFormat,
    /// Whether to write alpha. `None` writes it only when the color is not fully opaque.
    pub alpha: Option<bool>,
    /// Comma-separated legacy syntax when true, space-separated with `/ alpha` when false.
    pub serialized: bool,
    /// Decimal places to round components to. Not applied to hex, which is always integral.
    pub precision: Option<i32>,
}

impl Default for StringOptions {
    fn default() -> StringOptions {
        StringOptions {
            format: StringFormat::Hex,
            alpha: None,
            serialized: true,
            precision: None,
        }
    }
}

// shortest round-trip form, with negative zero written as 0
fn format_number(value: f64) -> String {
    if value == 0. {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl Color {
    /// Creates a color, normalizing the components for `space` and clamping alpha to 0-1.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// # use vermilion::space::ColorSpace;
    /// let c = Color::new(ColorSpace::Hsl, [370., 120., -5.], 1.5);
    /// assert_eq!(c.components(ColorSpace::Hsl), [10., 100., 0.]);
    /// assert_eq!(c.alpha(), 1.);
    /// ```
    pub fn new(space: ColorSpace, components: [f64; 3], alpha: f64) -> Color {
        Color {
            space,
            components: bound_components(space, components),
            alpha: clamp(alpha, 0., 1.),
        }
    }

    /// An opaque sRGB color with channels from 0 to 255.
    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color::new(ColorSpace::Rgb, [r, g, b], 1.)
    }

    /// An sRGB color with alpha.
    pub fn rgba(r: f64, g: f64, b: f64, alpha: f64) -> Color {
        Color::new(ColorSpace::Rgb, [r, g, b], alpha)
    }

    /// An opaque color from components in `space`.
    pub fn from_components(components: [f64; 3], space: ColorSpace) -> Color {
        Color::new(space, components, 1.)
    }

    /// A color from a list of three components, or four with alpha last.
    /// # Errors
    /// Returns `InvalidColorComponents` for any other length.
    pub fn from_slice(values: &[f64], space: ColorSpace) -> Result<Color, ColorError> {
        match *values {
            [c1, c2, c3] => Ok(Color::new(space, [c1, c2, c3], 1.)),
            [c1, c2, c3, alpha] => Ok(Color::new(space, [c1, c2, c3], alpha)),
            _ => Err(ColorError::InvalidColorComponents(values.len())),
        }
    }

    /// An opaque sRGB color from a number laid out as `0xRRGGBB`. Numbers above `0xFFFFFF` are
    /// treated as white.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// assert_eq!(Color::from_hex_number(0x1e90ff), Color::rgb(30., 144., 255.));
    /// assert_eq!(Color::from_hex_number(0x1000000), Color::rgb(255., 255., 255.));
    /// ```
    pub fn from_hex_number(hex: u32) -> Color {
        let hex = hex.min(0xFF_FFFF);
        Color::rgb(
            f64::from((hex >> 16) & 0xFF),
            f64::from((hex >> 8) & 0xFF),
            f64::from(hex & 0xFF),
        )
    }

    /// A color from a structured object in any space.
    pub fn from_object(object: ColorObject, alpha: f64) -> Color {
        Color::new(object.space(), object.components(), alpha)
    }

    /// A color from loose named fields, such as a parsed JSON object. The space is detected the
    /// same way [`ColorObject::from_fields`] does it; an `alpha` field is used if present.
    /// # Errors
    /// Returns `InvalidColorObject` if no space's full parameter set is present.
    pub fn from_fields(fields: &HashMap<String, f64>) -> Result<Color, ColorError> {
        let object = ColorObject::from_fields(fields)?;
        let alpha = fields.get("alpha").cloned().unwrap_or(1.);
        Ok(Color::from_object(object, alpha))
    }

    /// Parses a CSS color name, a hex code, or CSS functional notation in any space.
    /// # Errors
    /// Returns `UnableToParse` if the string is none of these.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// # use vermilion::space::ColorSpace;
    /// let c = Color::parse("lab(53.24% 80.09 67.2 / 50%)").unwrap();
    /// assert_eq!(c.space(), ColorSpace::Lab);
    /// assert_eq!(c.alpha(), 0.5);
    /// assert!(Color::parse("rgb(1, 2)").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Color, ColorError> {
        let (space, components, alpha) = parse_color(s)?;
        Ok(Color::new(space, components, alpha))
    }

    /// The space this color was created in.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The alpha value, from 0 (transparent) to 1 (opaque).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The same color with a different alpha.
    pub fn with_alpha(&self, alpha: f64) -> Color {
        Color::new(self.space, self.components, alpha)
    }

    /// The components in `space`, converting if needed. Converted values are not normalized: an
    /// LCH color outside the sRGB gamut will have RGB channels outside 0-255.
    pub fn components(&self, space: ColorSpace) -> [f64; 3] {
        convert_components(self.components, self.space, space)
    }

    /// The components in `space` followed by alpha.
    pub fn components_with_alpha(&self, space: ColorSpace) -> [f64; 4] {
        let [c1, c2, c3] = self.components(space);
        [c1, c2, c3, self.alpha]
    }

    /// The color as a structured object in `space`.
    pub fn to_object(&self, space: ColorSpace) -> ColorObject {
        ColorObject::from_components(space, self.components(space))
    }

    fn component_index(space: ColorSpace, name: &str) -> Result<usize, ColorError> {
        space
            .param_index(name)
            .ok_or_else(|| ColorError::InvalidColorSpaceComponent {
                space,
                component: name.to_string(),
            })
    }

    /// One named component in `space`.
    /// # Errors
    /// Returns `InvalidColorSpaceComponent` if `space` has no such component.
    pub fn component(&self, space: ColorSpace, name: &str) -> Result<f64, ColorError> {
        let i = Color::component_index(space, name)?;
        Ok(self.components(space)[i])
    }

    /// A new color in `space` with one component replaced. Alpha is kept.
    /// # Errors
    /// Returns `InvalidColorSpaceComponent` if `space` has no such component.
    pub fn with_component(&self, space: ColorSpace, name: &str, value: f64) -> Result<Color, ColorError> {
        let i = Color::component_index(space, name)?;
        let mut components = self.components(space);
        components[i] = value;
        Ok(Color::new(space, components, self.alpha))
    }

    /// A new color in `space` with `delta` added to one component. Alpha is kept.
    /// # Errors
    /// Returns `InvalidColorSpaceComponent` if `space` has no such component.
    pub fn add_to_component(&self, space: ColorSpace, name: &str, delta: f64) -> Result<Color, ColorError> {
        let current = self.component(space, name)?;
        self.with_component(space, name, current + delta)
    }

    /// A new color in `space` with every component replaced. Alpha is kept.
    pub fn with_components(&self, space: ColorSpace, components: [f64; 3]) -> Color {
        Color::new(space, components, self.alpha)
    }

    /// A new color in `space` with `deltas` added component-wise. Alpha is kept.
    pub fn add_to_components(&self, space: ColorSpace, deltas: [f64; 3]) -> Color {
        let sum = Coord::from(self.components(space)) + Coord::from(deltas);
        Color::new(space, sum.into(), self.alpha)
    }

    /// The change in `space` that takes this color to `target`.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// # use vermilion::space::ColorSpace;
    /// // darken a palette by the amount that takes one swatch to its shade
    /// let swatch = Color::parse("hsv(210, 60%, 90%)").unwrap();
    /// let shade = Color::parse("hsv(210, 60%, 60%)").unwrap();
    /// let darken = swatch.mutation_to(&shade, ColorSpace::Hsv);
    /// assert_eq!(darken.deltas, [0., 0., -30.]);
    /// let other = Color::parse("hsv(40, 80%, 70%)").unwrap().apply_mutation(&darken);
    /// assert_eq!(other.components(ColorSpace::Hsv), [40., 80., 40.]);
    /// ```
    pub fn mutation_to(&self, target: &Color, space: ColorSpace) -> ColorMutation {
        let delta = Coord::from(target.components(space)) - Coord::from(self.components(space));
        ColorMutation {
            space,
            deltas: delta.into(),
        }
    }

    /// The change in `space` that takes `source` to this color.
    pub fn mutation_from(&self, source: &Color, space: ColorSpace) -> ColorMutation {
        source.mutation_to(self, space)
    }

    /// Shifts this color by a mutation, in the mutation's space. Alpha is kept.
    pub fn apply_mutation(&self, mutation: &ColorMutation) -> Color {
        self.add_to_components(mutation.space, mutation.deltas)
    }

    /// The perceptual CIEDE2000 difference to `other`, with default weights.
    pub fn difference(&self, other: &Color) -> f64 {
        self.difference_with(other, DeltaE2000Weights::default())
    }

    /// The CIEDE2000 difference to `other` with custom weights.
    pub fn difference_with(&self, other: &Color, weights: DeltaE2000Weights) -> f64 {
        let reference = CIELABColor::from(Coord::from(self.components(ColorSpace::Lab)));
        let compared = CIELABColor::from(Coord::from(other.components(ColorSpace::Lab)));
        ciede2000(reference, compared, weights)
    }

    /// Euclidean distance to `other` in RGB.
    pub fn distance(&self, other: &Color) -> f64 {
        self.distance_in(other, ColorSpace::Rgb)
    }

    /// Euclidean distance to `other` in `space`.
    pub fn distance_in(&self, other: &Color, space: ColorSpace) -> f64 {
        distance(self, other, space)
    }

    /// The palette entry closest to this color, or `None` if the palette is empty. Ties go to the
    /// earliest entry.
    /// # Example
    /// ```
    /// # use vermilion::color::{Color, ComparisonMethod};
    /// let palette: Vec<Color> = ["red", "lime", "blue"].iter().map(|s| s.parse().unwrap()).collect();
    /// let coral = Color::parse("coral").unwrap();
    /// assert_eq!(coral.pick_closest(&palette, ComparisonMethod::Difference), Some(&palette[0]));
    /// assert_eq!(coral.pick_closest(&[], ComparisonMethod::Difference), None);
    /// ```
    pub fn pick_closest<'a>(&self, palette: &'a [Color], method: ComparisonMethod) -> Option<&'a Color> {
        let mut closest = palette.first()?;
        let mut smallest = f64::INFINITY;
        for color in palette {
            let d = match method {
                ComparisonMethod::Difference => self.difference(color),
                ComparisonMethod::Distance => self.distance(color),
            };
            if d < smallest {
                closest = color;
                smallest = d;
            }
        }
        Some(closest)
    }

    /// Black or white, whichever reads better on top of this color. The luma
    /// `0.299 r + 0.587 g + 0.114 b` is compared against `threshold`
    /// ([`DEFAULT_TEXT_CONTRAST_THRESHOLD`] is a sensible choice): above it gives black.
    /// # Example
    /// ```
    /// # use vermilion::color::{Color, DEFAULT_TEXT_CONTRAST_THRESHOLD};
    /// let black = Color::rgb(0., 0., 0.);
    /// let white = Color::rgb(255., 255., 255.);
    /// let gold = Color::parse("gold").unwrap();
    /// assert_eq!(gold.contrasting_text_color(DEFAULT_TEXT_CONTRAST_THRESHOLD), black);
    /// let navy = Color::parse("navy").unwrap();
    /// assert_eq!(navy.contrasting_text_color(DEFAULT_TEXT_CONTRAST_THRESHOLD), white);
    /// ```
    pub fn contrasting_text_color(&self, threshold: f64) -> Color {
        let [r, g, b] = self.components(ColorSpace::Rgb);
        let luma = r * 0.299 + g * 0.587 + b * 0.114;
        if luma > threshold {
            Color::from_hex_number(0x000000)
        } else {
            Color::from_hex_number(0xFFFFFF)
        }
    }

    /// Writes the color as `#rrggbb`, with an alpha byte appended if `alpha` is true. Channels are
    /// rounded, halves up, and clamped to 0-255.
    pub fn to_hex(&self, alpha: bool) -> String {
        let [r, g, b] = self.components(ColorSpace::Rgb);
        let mut channels = vec![r, g, b];
        if alpha {
            channels.push(self.alpha * 255.);
        }
        channels
            .iter()
            .map(|c| format!("{:02x}", clamp(round_half_up(*c), 0., 255.) as u8))
            .fold("#".to_string(), |acc, c| acc + &c)
    }

    /// Writes the color with the given options.
    /// # Example
    /// ```
    /// # use vermilion::color::{Color, StringFormat, StringOptions};
    /// # use vermilion::space::ColorSpace;
    /// let c = Color::rgba(255., 0., 0., 0.5);
    /// assert_eq!(c.to_string(), "#ff000080");
    /// let hsl = StringOptions{format: ColorSpace::Hsl.into(), ..Default::default()};
    /// assert_eq!(c.to_string_with(&hsl), "hsl(0deg,100%,50%,0.5)");
    /// let lab = StringOptions{
    ///     format: StringFormat::Space(ColorSpace::Lab),
    ///     alpha: Some(false),
    ///     serialized: false,
    ///     precision: Some(1),
    /// };
    /// assert_eq!(c.to_string_with(&lab), "lab(53.2% 80.1 67.2)");
    /// ```
    pub fn to_string_with(&self, options: &StringOptions) -> String {
        let alpha = options.alpha.unwrap_or(self.alpha != 1.);
        let space = match options.format {
            StringFormat::Hex => return self.to_hex(alpha),
            StringFormat::Space(space) => space,
        };
        let components: Vec<String> = self
            .components(space)
            .iter()
            .zip(space.params().iter())
            .map(|(value, param)| {
                let value = match options.precision {
                    Some(places) => round_to(*value, places),
                    None => *value,
                };
                format_number(value) + param.suffix.unwrap_or("")
            })
            .collect();
        let separator = if options.serialized { "," } else { " " };
        let alpha = if !alpha {
            String::new()
        } else if options.serialized {
            format!(",{}", format_number(self.alpha))
        } else {
            format!(" / {}", format_number(self.alpha))
        };
        format!("{}({}{})", space, components.join(separator), alpha)
    }
}

impl From<ColorObject> for Color {
    fn from(object: ColorObject) -> Color {
        Color::from_object(object, 1.)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Color, ColorError> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_string_with(&StringOptions::default()))
    }
}

/// Compares components and alpha in the first color's space, within the margin.
impl ApproxEq for Color {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Color, margin: M) -> bool {
        let margin = margin.into();
        let ours = self.components_with_alpha(self.space);
        let theirs = other.components_with_alpha(self.space);
        ours.iter()
            .zip(theirs.iter())
            .all(|(a, b)| (*a).approx_eq(*b, margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn test_normalization() {
        let hsl = Color::from_components([370., 50., 50.], ColorSpace::Hsl);
        assert_eq!(hsl, Color::from_components([10., 50., 50.], ColorSpace::Hsl));
        assert_eq!(
            Color::from_components([-350., 50., 50.], ColorSpace::Hsl),
            Color::from_components([10., 50., 50.], ColorSpace::Hsl)
        );
        let rgb = Color::rgba(300., -20., 12.5, -1.);
        assert_eq!(rgb.components_with_alpha(ColorSpace::Rgb), [255., 0., 12.5, 0.]);
        assert_eq!(rgb.space(), ColorSpace::Rgb);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            Color::from_slice(&[10., 20., 30.], ColorSpace::Hwb).unwrap(),
            Color::new(ColorSpace::Hwb, [10., 20., 30.], 1.)
        );
        assert_eq!(
            Color::from_slice(&[10., 20., 30., 0.25], ColorSpace::Lab).unwrap().alpha(),
            0.25
        );
        assert_eq!(
            Color::from_slice(&[1., 2.], ColorSpace::Rgb),
            Err(ColorError::InvalidColorComponents(2))
        );
        assert_eq!(
            Color::from_slice(&[1., 2., 3., 4., 5.], ColorSpace::Rgb),
            Err(ColorError::InvalidColorComponents(5))
        );
        assert_eq!(Color::from_hex_number(0), Color::rgb(0., 0., 0.));

        let mut fields = HashMap::new();
        fields.insert("l".to_string(), 50.);
        fields.insert("c".to_string(), 30.);
        fields.insert("h".to_string(), 400.);
        fields.insert("alpha".to_string(), 0.5);
        let lch = Color::from_fields(&fields).unwrap();
        assert_eq!(lch.components_with_alpha(ColorSpace::Lch), [50., 30., 40., 0.5]);
        fields.remove("c");
        assert!(Color::from_fields(&fields).is_err());
    }

    #[test]
    fn test_identity_and_grays() {
        for space in ColorSpace::ALL.iter() {
            let c = Color::from_components([20., 30., 40.], *space);
            assert_eq!(c.components(*space), [20., 30., 40.]);
        }
        let gray = Color::rgb(128., 128., 128.);
        assert_eq!(gray.component(ColorSpace::Hsv, "s").unwrap(), 0.);
        let mid = Color::from_components([0., 0., 50.], ColorSpace::Hsl);
        assert_eq!(mid.components(ColorSpace::Rgb), [127.5, 127.5, 127.5]);
        assert_eq!(mid.to_string(), "#808080");
    }

    #[test]
    fn test_components_by_name() {
        let red = Color::rgb(255., 0., 0.);
        let lab = red.to_object(ColorSpace::Lab);
        assert_eq!(lab.space(), ColorSpace::Lab);
        assert!((red.component(ColorSpace::Lab, "l").unwrap() - 53.24).abs() <= 0.5);
        assert_eq!(
            red.component(ColorSpace::Hsl, "v"),
            Err(ColorError::InvalidColorSpaceComponent {
                space: ColorSpace::Hsl,
                component: "v".to_string()
            })
        );
        assert!(red.with_component(ColorSpace::Rgb, "x", 1.).is_err());
        assert!(red.add_to_component(ColorSpace::Lch, "a", 1.).is_err());
    }

    #[test]
    fn test_edits_keep_alpha() {
        let c = Color::rgba(255., 0., 0., 0.4);
        let blue = c.with_component(ColorSpace::Hsl, "h", 240.).unwrap();
        assert_eq!(blue.space(), ColorSpace::Hsl);
        assert_eq!(blue.alpha(), 0.4);
        assert_eq!(blue.to_hex(false), "#0000ff");
        let lighter = c.add_to_components(ColorSpace::Hsl, [0., 0., 25.]);
        assert_eq!(lighter.components_with_alpha(ColorSpace::Hsl), [0., 100., 75., 0.4]);
        let replaced = c.with_components(ColorSpace::Hwb, [120., 0., 0.]);
        assert_eq!(replaced.alpha(), 0.4);
        assert_eq!(replaced.to_hex(false), "#00ff00");
        // clamping applies to edits too
        let over = c.add_to_component(ColorSpace::Rgb, "r", 100.).unwrap();
        assert_eq!(over.component(ColorSpace::Rgb, "r").unwrap(), 255.);
    }

    #[test]
    fn test_mutations() {
        let a = Color::rgb(200., 30., 60.);
        let b = Color::rgb(20., 130., 160.);
        let forward = a.mutation_to(&b, ColorSpace::Rgb);
        assert_eq!(forward, b.mutation_from(&a, ColorSpace::Rgb));
        assert_eq!(forward.deltas, [-180., 100., 100.]);
        assert_eq!(a.apply_mutation(&forward), b);
        let in_hsv = a.mutation_to(&b, ColorSpace::Hsv);
        let moved = a.apply_mutation(&in_hsv);
        assert_eq!(moved.space(), ColorSpace::Hsv);
        assert!(moved.distance(&b) <= 1e-9);
    }

    #[test]
    fn test_difference_and_distance() {
        let samples = [
            Color::rgb(255., 0., 0.),
            Color::parse("hsl(210, 40%, 50%)").unwrap(),
            Color::parse("lch(70% 40 120)").unwrap(),
        ];
        for x in samples.iter() {
            assert_eq!(x.difference(x), 0.);
            assert_eq!(x.distance(x), 0.);
            for y in samples.iter() {
                assert_eq!(x.distance(y), y.distance(x));
            }
        }
        let black = Color::rgb(0., 0., 0.);
        let white = Color::rgb(255., 255., 255.);
        assert!(approx_eq!(f64, black.distance(&white), 255. * 3f64.sqrt(), epsilon = 1e-9));
        assert!(black.difference(&white) > 99.);
        let textile = DeltaE2000Weights { luminance: 2., ..Default::default() };
        assert!(black.difference_with(&white, textile) < black.difference(&white));
    }

    #[test]
    fn test_pick_closest() {
        let palette = [
            Color::rgb(255., 0., 0.),
            Color::rgb(0., 255., 0.),
            Color::rgb(0., 0., 255.),
            Color::rgb(0., 0., 255.),
        ];
        let navy = Color::parse("navy").unwrap();
        assert_eq!(navy.pick_closest(&palette, ComparisonMethod::Distance), Some(&palette[2]));
        // the duplicate is never picked over the first match
        let picked = navy.pick_closest(&palette, ComparisonMethod::Difference).unwrap();
        assert!(std::ptr::eq(picked, &palette[2]));
        assert_eq!(ComparisonMethod::default(), ComparisonMethod::Difference);
    }

    #[test]
    fn test_contrasting_text() {
        let black = Color::from_hex_number(0x000000);
        let white = Color::from_hex_number(0xFFFFFF);
        assert_eq!(white.contrasting_text_color(DEFAULT_TEXT_CONTRAST_THRESHOLD), black);
        assert_eq!(black.contrasting_text_color(DEFAULT_TEXT_CONTRAST_THRESHOLD), white);
        // luma of exactly the threshold is not above it
        let gray = Color::rgb(180., 180., 180.);
        assert_eq!(gray.contrasting_text_color(180.), white);
        assert_eq!(gray.contrasting_text_color(179.), black);
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Color::rgb(255., 128., 0.).to_string(), "#ff8000");
        assert_eq!(Color::rgb(254.5, 0.49, 12.).to_string(), "#ff000c");
        assert_eq!(Color::rgba(255., 128., 0., 0.).to_string(), "#ff800000");
        assert_eq!(Color::rgba(255., 128., 0., 0.).to_hex(false), "#ff8000");
        // out-of-gamut colors are clamped on output
        let green = Color::parse("lab(60% -120 40)").unwrap();
        assert!(green.to_hex(false).starts_with("#00"));
    }

    #[test]
    fn test_functional_output() {
        let c = Color::from_components([210., 40., 50.], ColorSpace::Hsl);
        let options = StringOptions { format: ColorSpace::Hsl.into(), ..Default::default() };
        assert_eq!(c.to_string_with(&options), "hsl(210deg,40%,50%)");
        let spaced = StringOptions { alpha: Some(true), serialized: false, ..options };
        assert_eq!(c.to_string_with(&spaced), "hsl(210deg 40% 50% / 1)");
        let rgb = StringOptions { format: ColorSpace::Rgb.into(), precision: Some(0), ..Default::default() };
        assert_eq!(Color::rgb(12.4, 0., 255.).to_string_with(&rgb), "rgb(12,0,255)");
        // everything written in functional notation parses back
        for space in ColorSpace::ALL.iter() {
            let options = StringOptions { format: (*space).into(), ..Default::default() };
            let written = c.to_string_with(&options);
            let back: Color = written.parse().unwrap();
            assert!(approx_eq!(Color, back, c.with_components(*space, c.components(*space)), epsilon = 1e-9));
        }
    }

    #[test]
    fn test_serde() {
        let c = Color::from_components([10., 50., 50.], ColorSpace::Hsl);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"space":"hsl","components":[10.0,50.0,50.0],"alpha":1.0}"#);
        let back: Color = serde_json::from_str(r#"{"space":"hsl","components":[370,50,50]}"#).unwrap();
        assert_eq!(back, c);
        let clamped: Color =
            serde_json::from_str(r#"{"space":"rgb","components":[-5,0,500],"alpha":3}"#).unwrap();
        assert_eq!(clamped, Color::rgb(0., 0., 255.));
        let mutation = ColorMutation { space: ColorSpace::Lch, deltas: [1., 2., 3.] };
        let json = serde_json::to_string(&mutation).unwrap();
        assert_eq!(serde_json::from_str::<ColorMutation>(&json).unwrap(), mutation);
    }

    #[test]
    fn test_approx_eq() {
        let a = Color::rgb(10., 20., 30.);
        let b = Color::rgb(10. + 1e-12, 20., 30.);
        assert_ne!(a, b);
        assert!(approx_eq!(Color, a, b, epsilon = 1e-9));
        assert!(!approx_eq!(Color, a, b.with_alpha(0.9), epsilon = 1e-9));
        // compared in the first color's space
        let via_hsv = Color::new(ColorSpace::Hsv, a.components(ColorSpace::Hsv), 1.);
        assert!(approx_eq!(Color, a, via_hsv, epsilon = 1e-9));
    }
}
