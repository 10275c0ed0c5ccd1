//! CIEDE2000, the CIE's 2000 color difference formula, following Bruce Lindbloom's write-up at
//! <http://www.brucelindbloom.com/index.html?Eqn_DeltaE_CIE2000.html>. It corrects CIELAB's
//! Euclidean distance for the eye's uneven sensitivity across lightness, chroma and hue, and is
//! the metric behind [`Color::difference`](crate::color::Color::difference).
//!
//! Both colors' CIELAB channels are rounded to integers before anything else is computed. That
//! matches the reference tables this implementation is checked against, at the price of making the
//! metric step-shaped for differences below one unit: two colors that round to the same integers
//! have a difference of exactly 0.

use crate::bound::round_half_up;
use crate::colors::CIELABColor;
use crate::consts::POW25_7;

/// The parametric weighting factors kL, kC and kH. Raising one makes the formula more tolerant of
/// differences along that dimension: textiles commonly use a lightness weight of 2.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaE2000Weights {
    /// kL, the lightness weight.
    pub luminance: f64,
    /// kC, the chroma weight.
    pub chroma: f64,
    /// kH, the hue weight.
    pub hue: f64,
}

impl Default for DeltaE2000Weights {
    fn default() -> DeltaE2000Weights {
        DeltaE2000Weights {
            luminance: 1.,
            chroma: 1.,
            hue: 1.,
        }
    }
}

// hue angle of (a', b') in degrees, 0 for the neutral axis
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if b == 0. && a_prime == 0. {
        return 0.;
    }
    let angle = b.atan2(a_prime).to_degrees();
    if angle >= 0. {
        angle
    } else {
        angle + 360.
    }
}

/// The CIEDE2000 difference between a reference color and a compared color.
/// # Example
/// ```
/// # use vermilion::colors::CIELABColor;
/// # use vermilion::deltae::{ciede2000, DeltaE2000Weights};
/// let gray50 = CIELABColor{l: 50., a: 0., b: 0.};
/// let gray60 = CIELABColor{l: 60., a: 0., b: 0.};
/// let diff = ciede2000(gray50, gray60, DeltaE2000Weights::default());
/// assert!((diff - 9.4705786).abs() <= 1e-6);
/// ```
pub fn ciede2000(reference: CIELABColor, compared: CIELABColor, weights: DeltaE2000Weights) -> f64 {
    let (l1, a1, b1) = (
        round_half_up(reference.l),
        round_half_up(reference.a),
        round_half_up(reference.b),
    );
    let (l2, a2, b2) = (
        round_half_up(compared.l),
        round_half_up(compared.a),
        round_half_up(compared.b),
    );

    let l_bar = (l1 + l2) / 2.;
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar = (c1 + c2) / 2.;
    let c_bar_7 = c_bar.powi(7);
    let g = (1. - (c_bar_7 / (c_bar_7 + POW25_7)).sqrt()) / 2.;
    let a1_prime = a1 * (1. + g);
    let a2_prime = a2 * (1. + g);

    let c1_prime = a1_prime.hypot(b1);
    let c2_prime = a2_prime.hypot(b2);
    let c_bar_prime = (c1_prime + c2_prime) / 2.;

    let h1_prime = hue_angle(b1, a1_prime);
    let h2_prime = hue_angle(b2, a2_prime);

    let mut delta_h_prime = h2_prime - h1_prime;
    if delta_h_prime.abs() > 180. {
        if h2_prime <= h1_prime {
            delta_h_prime += 360.;
        } else {
            delta_h_prime -= 360.;
        }
    }

    let delta_big_h_prime =
        2. * (c1_prime * c2_prime).sqrt() * (delta_h_prime.to_radians() / 2.).sin();

    let h_bar_prime = if (h1_prime - h2_prime).abs() > 180. {
        (h1_prime + h2_prime + 360.) / 2.
    } else {
        (h1_prime + h2_prime) / 2.
    };

    let t = 1. - 0.17 * (h_bar_prime - 30.).to_radians().cos()
        + 0.24 * (2. * h_bar_prime).to_radians().cos()
        + 0.32 * (3. * h_bar_prime + 6.).to_radians().cos()
        - 0.2 * (4. * h_bar_prime - 63.).to_radians().cos();

    let delta_l_prime = l2 - l1;
    let delta_c_prime = c2_prime - c1_prime;

    let l_offset_sq = (l_bar - 50.).powi(2);
    let s_l = 1. + (0.015 * l_offset_sq) / (20. + l_offset_sq).sqrt();
    let s_c = 1. + 0.045 * c_bar_prime;
    let s_h = 1. + 0.015 * c_bar_prime * t;

    let delta_theta = 30. * (-((h_bar_prime - 275.) / 25.).powi(2)).exp();
    let c_bar_prime_7 = c_bar_prime.powi(7);
    let r_c = 2. * (c_bar_prime_7 / (c_bar_prime_7 + POW25_7)).sqrt();
    let r_t = -r_c * (2. * delta_theta).to_radians().sin();

    let l_term = delta_l_prime / (weights.luminance * s_l);
    let c_term = delta_c_prime / (weights.chroma * s_c);
    let h_term = delta_big_h_prime / (weights.hue * s_h);

    (l_term.powi(2) + c_term.powi(2) + h_term.powi(2) + r_t * c_term * h_term).sqrt()
}
