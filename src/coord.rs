//! This module contains [`Coord`], a point in 3D space with the handful of arithmetic operations
//! that color math needs. Every color space in Vermilion has exactly three components, so each
//! color can be laid out as a `Coord` with its components on the `x`, `y` and `z` axes in order:
//! an HSL color has `h` on x, `s` on y and `l` on z. The conversion table passes `Coord`s between
//! its steps, and blending and Euclidean distance are defined on them.

use std::ops::{Add, Div, Mul, Sub};

use num::{Num, NumCast};

/// Anything numeric that a [`Coord`] can be scaled by.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space.
///
/// # Example
/// ```
/// # use vermilion::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// assert_eq!(point_1 + point_2, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(point_1 - point_2, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(point_1 * 2u8, Coord{x: 2., y: 16., z: 14.});
/// assert_eq!(point_1 / 2., Coord{x: 0.5, y: 4., z: 3.5});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// A scalar that can't be represented as f64 scales to NaN rather than panicking.
fn scalar_to_f64<U: Scalar>(s: U) -> f64 {
    num::cast(s).unwrap_or(f64::NAN)
}

impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r = scalar_to_f64(rhs);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

/// Division by zero follows IEEE 754 and yields infinities or NaN.
impl<U: Scalar> Div<U> for Coord {
    type Output = Coord;
    fn div(self, rhs: U) -> Coord {
        let r = scalar_to_f64(rhs);
        Coord {
            x: self.x / r,
            y: self.y / r,
            z: self.z / r,
        }
    }
}

impl From<[f64; 3]> for Coord {
    fn from(c: [f64; 3]) -> Coord {
        Coord {
            x: c[0],
            y: c[1],
            z: c[2],
        }
    }
}

impl From<Coord> for [f64; 3] {
    fn from(c: Coord) -> [f64; 3] {
        [c.x, c.y, c.z]
    }
}

impl Coord {
    /// The midpoint between two points.
    pub fn midpoint(&self, other: &Coord) -> Coord {
        (*self + *other) / 2.0
    }

    /// A weighted average of two points. A weight of 1 gives `self`, 0 gives `other`, and values
    /// in between move along the straight line joining them.
    /// # Example
    /// ```
    /// # use vermilion::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.weighted_midpoint(&point2, 0.25);
    /// assert!((mid.x - 0.8).abs() <= 1e-10);
    /// assert!((mid.y - 0.6).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn weighted_midpoint(&self, other: &Coord, weight: f64) -> Coord {
        Coord {
            x: self.x * weight + (1.0 - weight) * other.x,
            y: self.y * weight + (1.0 - weight) * other.y,
            z: self.z * weight + (1.0 - weight) * other.z,
        }
    }

    /// Straight-line distance between two points.
    /// # Example
    /// ```
    /// # use vermilion::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// assert!((point1.euclidean_distance(&point2) - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }

    /// Arithmetic mean of `self` and every point in `others`.
    pub fn average(self, others: &[Coord]) -> Coord {
        let n = others.len() + 1;
        others.iter().fold(self, |acc, c| acc + *c) / n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average() {
        let point1 = Coord { x: 0., y: 0., z: 1. };
        let others = [Coord { x: 1., y: 1., z: 1. }, Coord { x: 2., y: 1., z: 1. }];
        let mean = point1.average(&others);
        assert!((mean.x - 1.).abs() <= 1e-10);
        assert!((mean.y - 2. / 3.).abs() <= 1e-10);
        assert!((mean.z - 1.).abs() <= 1e-10);
        assert_eq!(point1.average(&[]), point1);
    }

    #[test]
    fn test_array_conversion() {
        let c: Coord = [1., 2., 3.].into();
        assert_eq!(c, Coord { x: 1., y: 2., z: 3. });
        let arr: [f64; 3] = c.into();
        assert_eq!(arr, [1., 2., 3.]);
        assert_eq!(c.midpoint(&Coord { x: 3., y: 2., z: 1. }), Coord { x: 2., y: 2., z: 2. });
    }

    #[test]
    fn test_division_by_zero() {
        let c = Coord { x: 1., y: -1., z: 0. } / 0;
        assert_eq!(c.x, f64::INFINITY);
        assert_eq!(c.y, f64::NEG_INFINITY);
        assert!(c.z.is_nan());
    }
}
