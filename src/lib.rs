//! Vermilion is a library for working with colors in seven interchangeable spaces: sRGB, HSL, HSV,
//! HWB, CIE XYZ, CIELAB and CIELCH. A [`Color`](color::Color) can be created in any of them, read
//! back in any of them, edited component by component, written out as hex or CSS, and compared with
//! other colors using the CIEDE2000 perceptual difference formula.
//!
//! ```
//! use vermilion::prelude::*;
//!
//! let accent: Color = "rebeccapurple".parse().unwrap();
//! let lighter = accent.add_to_component(ColorSpace::Lch, "l", 20.).unwrap();
//! assert_eq!(lighter.space(), ColorSpace::Lch);
//! assert!(accent.difference(&lighter) > 10.);
//! ```
//!
//! Conversions between spaces follow a fixed graph of closed-form steps; see
//! [`convert`](convert) for the routes.

#![doc(html_root_url = "https://docs.rs/vermilion/0.3.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
// compare -0.96924 with -0.96_924
#![allow(clippy::unreadable_literal)]

extern crate csv;
extern crate float_cmp;
extern crate nalgebra as na;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;

pub mod bound;
pub mod color;
pub mod colors;
pub mod consts;
pub mod convert;
pub mod coord;
mod csscolor;
mod cssnumeric;
pub mod deltae;
pub mod error;
pub mod euclidean_distance;
pub mod mix;
pub mod named;
pub mod prelude;
pub mod space;
