//! Constants used by the conversions and by CIEDE2000. Everything here is fixed at compile time:
//! Vermilion works in a single D65 world and never adapts between illuminants.

use na::Matrix3;

/// XYZ of the D65 reference white, 2° observer, normalized so that Y is 100.
pub const D65_WHITE_POINT: [f64; 3] = [95.047, 100.0, 108.883];

/// Linear sRGB to XYZ, rows giving X, Y and Z.
#[allow(non_snake_case)]
pub fn SRGB_TO_XYZ() -> Matrix3<f64> {
    Matrix3::new(
        0.4124564, 0.3575761, 0.1804375,
        0.2126729, 0.7151522, 0.0721750,
        0.0193339, 0.1191920, 0.9503041,
    )
}

/// XYZ to linear sRGB. Rounded published values rather than the exact inverse of
/// [`SRGB_TO_XYZ`], so a round trip through XYZ drifts slightly.
#[allow(non_snake_case)]
pub fn XYZ_TO_SRGB() -> Matrix3<f64> {
    Matrix3::new(
        03.2406, -1.5372, -0.4986,
        -0.9689, 01.8758, 00.0415,
        00.0557, -0.2040, 01.0570,
    )
}

/// Encoded sRGB values at or below this are on the linear segment.
pub const SRGB_DECODE_THRESHOLD: f64 = 0.04045;
/// Linear-light values at or below this are on the linear segment.
pub const SRGB_ENCODE_THRESHOLD: f64 = 0.0031308;

/// Below this normalized XYZ value CIELAB switches from the cube root to its linear segment.
pub const LAB_EPSILON: f64 = 0.008856;
/// Slope of the CIELAB linear segment.
pub const LAB_KAPPA: f64 = 7.787;

/// 25^7, used by the CIEDE2000 chroma compensation and rotation terms.
pub const POW25_7: f64 = 6103515625.0;
