use crate::hue::hue_from_rgb;
use crate::Triple;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Convert an RGB color to HLS.
///
/// # Arguments
///
/// * `r` - The red channel in the range [0, 1].
/// * `g` - The green channel in the range [0, 1].
/// * `b` - The blue channel in the range [0, 1].
///
/// # Returns
///
/// The HLS triple with the following components:
///
/// * H: The hue as a fraction of a full turn in the range [0, 1).
/// * L: The lightness in the range [0, 1].
/// * S: The saturation in the range [0, 1].
///
/// A gray input returns `[0, l, 0]`.
///
/// # Example
///
/// ```
/// use colorsys_convert::rgb_to_hls;
///
/// assert_eq!(rgb_to_hls(1.0, 0.0, 0.0), [0.0, 0.5, 1.0]);
/// assert_eq!(rgb_to_hls(1.0, 1.0, 1.0), [0.0, 1.0, 0.0]);
/// ```
pub fn rgb_to_hls(r: f64, g: f64, b: f64) -> Triple {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let l = sum / 2.0;

    if range == 0.0 {
        return [0.0, l, 0.0];
    }

    // 2 - max - min instead of 2 - sum keeps the rounding of the lower branch
    let s = if l <= 0.5 {
        range / sum
    } else {
        range / (2.0 - max - min)
    };
    let h = hue_from_rgb(r, g, b, max, range);

    [h, l, s]
}

/// Convert an HLS color to RGB.
///
/// Each channel is read off a trapezoid over the hue circle that rises from
/// `m1` to `m2` over the first sixth of a turn, stays at `m2` until half a
/// turn, falls back to `m1` at two thirds and stays there. Red samples the
/// trapezoid at `h + 1/3`, green at `h` and blue at `h - 1/3`.
///
/// # Arguments
///
/// * `h` - The hue as a fraction of a full turn.
/// * `l` - The lightness in the range [0, 1].
/// * `s` - The saturation in the range [0, 1].
///
/// # Returns
///
/// The `[r, g, b]` triple. A zero saturation returns `[l, l, l]`.
///
/// # Example
///
/// ```
/// use colorsys_convert::hls_to_rgb;
///
/// assert_eq!(hls_to_rgb(2.0 / 3.0, 0.5, 1.0), [0.0, 0.0, 1.0]);
/// ```
pub fn hls_to_rgb(h: f64, l: f64, s: f64) -> Triple {
    if s == 0.0 {
        return [l, l, l];
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    [
        channel_from_hue(m1, m2, h + ONE_THIRD),
        channel_from_hue(m1, m2, h),
        channel_from_hue(m1, m2, h - ONE_THIRD),
    ]
}

fn channel_from_hue(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);

    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}
