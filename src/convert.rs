//! The conversion graph. Only neighboring spaces have direct conversions (see
//! [`colors`](crate::colors)); every other pair is a fixed chain of those, written out below once
//! per pair rather than searched for. The chains are composed into a 7×7 table of converters the
//! first time any conversion runs, so a conversion is a table lookup plus the arithmetic itself.
//!
//! The routes are:
//!
//! - HSL and HWB go through HSV, HSV goes through RGB, RGB goes through XYZ, and LCH goes through
//!   LAB, in whichever direction is needed.
//! - Chains that leave XYZ, LAB or LCH for HSL, HSV or HWB clamp the intermediate RGB to 0-255,
//!   because out-of-gamut channels would otherwise produce hues and saturations that mean nothing.
//!
//! Which intermediate spaces are visited, and where the clamps sit, changes results in the last
//! few bits, so the routes are part of the behavior and not an implementation detail.

use std::collections::HashMap;

use crate::bound::clamp_rgb;
use crate::colors::{
    CIELABColor, CIELCHColor, ColorObject, HSLColor, HSVColor, HWBColor, RGBColor, XYZColor,
};
use crate::coord::Coord;
use crate::error::ColorError;
use crate::space::ColorSpace;
use tracing::debug;

/// One edge of the conversion graph, acting on positional triples.
#[derive(Copy, Clone)]
struct Step {
    target: ColorSpace,
    apply: fn(Coord) -> Coord,
}

macro_rules! step {
    ($name:ident, $from:ty => $method:ident, $target:expr) => {
        const $name: Step = Step {
            target: $target,
            apply: {
                fn apply(c: Coord) -> Coord {
                    <$from>::from(c).$method().into()
                }
                apply
            },
        };
    };
}

step!(RGB_HSV, RGBColor => to_hsv, ColorSpace::Hsv);
step!(RGB_XYZ, RGBColor => to_xyz, ColorSpace::Xyz);
step!(HSV_RGB, HSVColor => to_rgb, ColorSpace::Rgb);
step!(HSV_HSL, HSVColor => to_hsl, ColorSpace::Hsl);
step!(HSV_HWB, HSVColor => to_hwb, ColorSpace::Hwb);
step!(HSL_HSV, HSLColor => to_hsv, ColorSpace::Hsv);
step!(HWB_HSV, HWBColor => to_hsv, ColorSpace::Hsv);
step!(XYZ_RGB, XYZColor => to_rgb, ColorSpace::Rgb);
step!(XYZ_LAB, XYZColor => to_lab, ColorSpace::Lab);
step!(LAB_XYZ, CIELABColor => to_xyz, ColorSpace::Xyz);
step!(LAB_LCH, CIELABColor => to_lch, ColorSpace::Lch);
step!(LCH_LAB, CIELCHColor => to_lab, ColorSpace::Lab);

const CLAMP_RGB: Step = Step {
    target: ColorSpace::Rgb,
    apply: clamp_rgb,
};

/// The fixed chain of steps for each ordered pair of spaces. Identity is the empty chain.
fn chain(from: ColorSpace, to: ColorSpace) -> &'static [Step] {
    use crate::space::ColorSpace::*;
    match (from, to) {
        (Rgb, Hsl) => &[RGB_HSV, HSV_HSL],
        (Rgb, Hsv) => &[RGB_HSV],
        (Rgb, Hwb) => &[RGB_HSV, HSV_HWB],
        (Rgb, Xyz) => &[RGB_XYZ],
        (Rgb, Lab) => &[RGB_XYZ, XYZ_LAB],
        (Rgb, Lch) => &[RGB_XYZ, XYZ_LAB, LAB_LCH],

        (Hsl, Rgb) => &[HSL_HSV, HSV_RGB],
        (Hsl, Hsv) => &[HSL_HSV],
        (Hsl, Hwb) => &[HSL_HSV, HSV_HWB],
        (Hsl, Xyz) => &[HSL_HSV, HSV_RGB, RGB_XYZ],
        (Hsl, Lab) => &[HSL_HSV, HSV_RGB, RGB_XYZ, XYZ_LAB],
        (Hsl, Lch) => &[HSL_HSV, HSV_RGB, RGB_XYZ, XYZ_LAB, LAB_LCH],

        (Hsv, Rgb) => &[HSV_RGB],
        (Hsv, Hsl) => &[HSV_HSL],
        (Hsv, Hwb) => &[HSV_HWB],
        (Hsv, Xyz) => &[HSV_RGB, RGB_XYZ],
        (Hsv, Lab) => &[HSV_RGB, RGB_XYZ, XYZ_LAB],
        (Hsv, Lch) => &[HSV_RGB, RGB_XYZ, XYZ_LAB, LAB_LCH],

        (Hwb, Rgb) => &[HWB_HSV, HSV_RGB],
        (Hwb, Hsl) => &[HWB_HSV, HSV_HSL],
        (Hwb, Hsv) => &[HWB_HSV],
        (Hwb, Xyz) => &[HWB_HSV, HSV_RGB, RGB_XYZ],
        (Hwb, Lab) => &[HWB_HSV, HSV_RGB, RGB_XYZ, XYZ_LAB],
        (Hwb, Lch) => &[HWB_HSV, HSV_RGB, RGB_XYZ, XYZ_LAB, LAB_LCH],

        (Xyz, Rgb) => &[XYZ_RGB],
        (Xyz, Hsl) => &[XYZ_RGB, CLAMP_RGB, RGB_HSV, HSV_HSL],
        (Xyz, Hsv) => &[XYZ_RGB, CLAMP_RGB, RGB_HSV],
        (Xyz, Hwb) => &[XYZ_RGB, CLAMP_RGB, RGB_HSV, HSV_HWB],
        (Xyz, Lab) => &[XYZ_LAB],
        (Xyz, Lch) => &[XYZ_LAB, LAB_LCH],

        (Lab, Rgb) => &[LAB_XYZ, XYZ_RGB],
        (Lab, Hsl) => &[LAB_XYZ, XYZ_RGB, CLAMP_RGB, RGB_HSV, HSV_HSL],
        (Lab, Hsv) => &[LAB_XYZ, XYZ_RGB, CLAMP_RGB, RGB_HSV],
        (Lab, Hwb) => &[LAB_XYZ, XYZ_RGB, CLAMP_RGB, RGB_HSV, HSV_HWB],
        (Lab, Xyz) => &[LAB_XYZ],
        (Lab, Lch) => &[LAB_LCH],

        (Lch, Rgb) => &[LCH_LAB, LAB_XYZ, XYZ_RGB],
        (Lch, Hsl) => &[LCH_LAB, LAB_XYZ, XYZ_RGB, CLAMP_RGB, RGB_HSV, HSV_HSL],
        (Lch, Hsv) => &[LCH_LAB, LAB_XYZ, XYZ_RGB, CLAMP_RGB, RGB_HSV],
        (Lch, Hwb) => &[LCH_LAB, LAB_XYZ, XYZ_RGB, CLAMP_RGB, RGB_HSV, HSV_HWB],
        (Lch, Xyz) => &[LCH_LAB, LAB_XYZ],
        (Lch, Lab) => &[LCH_LAB],

        _ => &[],
    }
}

type Converter = Box<dyn Fn(Coord) -> Coord + Send + Sync>;

fn compose(steps: &'static [Step]) -> Converter {
    let identity: Converter = Box::new(|c: Coord| c);
    steps.iter().fold(identity, |acc: Converter, step: &Step| -> Converter {
        let apply = step.apply;
        Box::new(move |c: Coord| apply(acc(c)))
    })
}

lazy_static! {
    static ref CONVERT_MAP: Vec<Converter> = {
        let mut table = Vec::with_capacity(ColorSpace::ALL.len() * ColorSpace::ALL.len());
        for from in ColorSpace::ALL.iter() {
            for to in ColorSpace::ALL.iter() {
                table.push(compose(chain(*from, *to)));
            }
        }
        debug!(entries = table.len(), "built color conversion table");
        table
    };
}

fn converter(from: ColorSpace, to: ColorSpace) -> &'static Converter {
    &CONVERT_MAP[from.index() * ColorSpace::ALL.len() + to.index()]
}

/// Converts a positional triple from one space to another. Nothing is clamped or wrapped at the
/// ends of the chain: out-of-range results, such as negative RGB channels for colors outside the
/// sRGB gamut, are passed through.
/// # Example
/// ```
/// # use vermilion::convert::convert_components;
/// # use vermilion::space::ColorSpace;
/// let hsv = convert_components([255., 0., 0.], ColorSpace::Rgb, ColorSpace::Hsv);
/// assert_eq!(hsv, [0., 100., 100.]);
/// ```
pub fn convert_components(components: [f64; 3], from: ColorSpace, to: ColorSpace) -> [f64; 3] {
    converter(from, to)(Coord::from(components)).into()
}

/// Converts a structured color into `target`.
/// # Example
/// ```
/// # use vermilion::colors::{ColorObject, HSLColor, RGBColor};
/// # use vermilion::convert::convert;
/// # use vermilion::space::ColorSpace;
/// let gray = ColorObject::Hsl(HSLColor{h: 0., s: 0., l: 50.});
/// assert_eq!(convert(&gray, ColorSpace::Rgb),
///            ColorObject::Rgb(RGBColor{r: 127.5, g: 127.5, b: 127.5}));
/// ```
pub fn convert(color: &ColorObject, target: ColorSpace) -> ColorObject {
    let components = convert_components(color.components(), color.space(), target);
    ColorObject::from_components(target, components)
}

/// Converts loosely typed input: a set of named fields and a space tag. Fails with
/// `InvalidColorSpace` if the tag is unknown and `InvalidColorObject` if the fields do not make up
/// any space's full parameter set.
pub fn convert_fields(fields: &HashMap<String, f64>, target: &str) -> Result<ColorObject, ColorError> {
    let target: ColorSpace = target.parse()?;
    let source = ColorObject::from_fields(fields)?;
    Ok(convert(&source, target))
}

/// The spaces a conversion passes through after leaving `from`, in order. The RGB clamp shows up
/// as an extra RGB entry. Empty for identity.
/// # Example
/// ```
/// # use vermilion::convert::route;
/// # use vermilion::space::ColorSpace::*;
/// assert_eq!(route(Hsl, Lab), vec![Hsv, Rgb, Xyz, Lab]);
/// assert_eq!(route(Lab, Hwb), vec![Xyz, Rgb, Rgb, Hsv, Hwb]);
/// ```
pub fn route(from: ColorSpace, to: ColorSpace) -> Vec<ColorSpace> {
    chain(from, to).iter().map(|step| step.target).collect()
}
