//! This file provides the standard idea of **Euclidean distance**: treating two colors as points in
//! 3D space, and returning the length of the line between them. Note that this is not perceptually
//! accurate (i.e., what humans would describe as colors looking different) in any color space. In
//! fact, this may have bizarre results: in HSV, for example, two blacks with different hue values
//! are far apart despite their complete visual equivalence. To get the perceptual analog of
//! distance, use [`Color::difference`](crate::color::Color::difference).
//!
//! The typed color structs get this through the [`EuclideanDistance`] trait; whole colors, which
//! may live in different spaces, use [`distance`], which first brings both into one space.

use crate::color::Color;
use crate::colors::{
    CIELABColor, CIELCHColor, HSLColor, HSVColor, HWBColor, RGBColor, XYZColor,
};
use crate::coord::Coord;
use crate::space::ColorSpace;

/// A color whose components can be read as a point in 3D space.
pub trait EuclideanDistance: Into<Coord> {
    /// Gets the Euclidean distance between these two points when embedded in 3D space. Formally
    /// speaking, this is a *metric*: it is 0 if and only if self and other are the same, it is
    /// symmetric, and it obeys the triangle inequality.
    fn euclidean_distance(self, other: Self) -> f64 {
        let c1: Coord = self.into();
        let c2: Coord = other.into();
        c1.euclidean_distance(&c2)
    }
}

impl EuclideanDistance for RGBColor {}
impl EuclideanDistance for HSLColor {}
impl EuclideanDistance for HSVColor {}
impl EuclideanDistance for HWBColor {}
impl EuclideanDistance for XYZColor {}
impl EuclideanDistance for CIELABColor {}
impl EuclideanDistance for CIELCHColor {}

/// The straight-line distance between two colors after converting both into `space`. Alpha is not
/// part of it.
/// # Example
/// ```
/// # use vermilion::color::Color;
/// # use vermilion::euclidean_distance::distance;
/// # use vermilion::space::ColorSpace;
/// let black = Color::rgb(0., 0., 0.);
/// let blue = Color::rgb(0., 0., 255.);
/// assert_eq!(distance(&black, &blue, ColorSpace::Rgb), 255.);
/// // hsv puts blue at (240, 100, 100) and black at the origin
/// assert_eq!(distance(&black, &blue, ColorSpace::Hsv), 77600f64.sqrt());
/// ```
pub fn distance(reference: &Color, compared: &Color, space: ColorSpace) -> f64 {
    let c1 = Coord::from(reference.components(space));
    let c2 = Coord::from(compared.components(space));
    c1.euclidean_distance(&c2)
}
