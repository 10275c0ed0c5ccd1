//! Mixing, in this context, is taking a point on the line between two color projections in some
//! space. There is one crucial thing to remember about it: it depends on the space being used.
//! Mixing two colors in RGB can give a very different result from mixing the same two colors in
//! CIELAB or HSL, so every mixing operation on [`Color`] names its space explicitly.
//!
//! Mixing is purely linear, component by component. In particular hues are blended as plain
//! numbers: mixing hues of 350 and 10 degrees gives 180, not 0.
//!
//! Especially note that color mixing as one thinks of with paints or other subtractive mixtures will
//! almost definitely not agree with this, because computer monitors use additive mixing while
//! pigments use subtractive mixing. Yellow mixed with blue in most RGB or other systems is gray, not
//! green.

use crate::color::Color;
use crate::colors::{
    CIELABColor, CIELCHColor, HSLColor, HSVColor, HWBColor, RGBColor, XYZColor,
};
use crate::coord::Coord;
use crate::space::ColorSpace;

/// Describes a color that can be mixed with other colors in its own 3D space.
pub trait Mix: Sized + Into<Coord> + From<Coord> {
    /// Returns the point on the segment joining the two colors where `weight` is the share of
    /// `self`: a weight of 1 gives `self` and 0 gives `other`.
    fn weighted_mix(self, other: Self, weight: f64) -> Self {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        Self::from(c1.weighted_midpoint(&c2, weight))
    }

    /// The midpoint of the two colors.
    fn mix(self, other: Self) -> Self {
        self.weighted_mix(other, 0.5)
    }
}

impl Mix for Coord {}
impl Mix for RGBColor {}
impl Mix for HSLColor {}
impl Mix for HSVColor {}
impl Mix for HWBColor {}
impl Mix for XYZColor {}
impl Mix for CIELABColor {}
impl Mix for CIELCHColor {}

impl Color {
    /// Blends this color with `other` in `space`. `weight` is the share of `self`, so 0.5 gives the
    /// midpoint; alpha is blended the same way. The result is in `space` and normalized like any
    /// other new color.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// # use vermilion::space::ColorSpace;
    /// let blue = Color::rgb(0., 0., 255.);
    /// let red = Color::rgb(255., 0., 1.);
    /// assert_eq!(blue.mix(&red, 0.5, ColorSpace::Rgb).to_string(), "#800080");
    /// ```
    pub fn mix(&self, other: &Color, weight: f64, space: ColorSpace) -> Color {
        let c1 = Coord::from(self.components(space));
        let c2 = Coord::from(other.components(space));
        let mixed = c1.weighted_mix(c2, weight);
        let alpha = self.alpha() * weight + (1. - weight) * other.alpha();
        Color::new(space, mixed.into(), alpha)
    }

    /// The arithmetic mean of the colors' components in `space`, and of their alphas. Returns
    /// `None` for an empty slice.
    /// # Example
    /// ```
    /// # use vermilion::color::Color;
    /// # use vermilion::space::ColorSpace;
    /// let colors = [Color::rgb(255., 0., 0.), Color::rgb(0., 0., 255.), Color::rgba(0., 255., 0., 0.4)];
    /// let mean = Color::average(&colors, ColorSpace::Rgb).unwrap();
    /// assert_eq!(mean.components(ColorSpace::Rgb), [85., 85., 85.]);
    /// assert!((mean.alpha() - 0.8).abs() <= 1e-12);
    /// assert!(Color::average(&[], ColorSpace::Rgb).is_none());
    /// ```
    pub fn average(colors: &[Color], space: ColorSpace) -> Option<Color> {
        let (first, rest) = colors.split_first()?;
        let others: Vec<Coord> = rest.iter().map(|c| Coord::from(c.components(space))).collect();
        let mean = Coord::from(first.components(space)).average(&others);
        let alpha = colors.iter().map(|c| c.alpha()).sum::<f64>() / colors.len() as f64;
        Some(Color::new(space, mean.into(), alpha))
    }
}
