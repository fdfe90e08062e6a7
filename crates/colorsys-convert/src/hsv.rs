use crate::hue::hue_from_rgb;
use crate::Triple;

/// Convert an RGB color to HSV.
///
/// # Arguments
///
/// * `r` - The red channel in the range [0, 1].
/// * `g` - The green channel in the range [0, 1].
/// * `b` - The blue channel in the range [0, 1].
///
/// # Returns
///
/// The HSV triple with the following components:
///
/// * H: The hue as a fraction of a full turn in the range [0, 1).
/// * S: The saturation in the range [0, 1].
/// * V: The value in the range [0, 1].
///
/// A gray input (all channels equal) has no hue and returns `[0, 0, v]`.
///
/// # Example
///
/// ```
/// use colorsys_convert::rgb_to_hsv;
///
/// assert_eq!(rgb_to_hsv(0.0, 0.0, 1.0), [4.0 / 6.0, 1.0, 1.0]);
/// assert_eq!(rgb_to_hsv(0.5, 0.5, 0.5), [0.0, 0.0, 0.5]);
/// ```
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Triple {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let range = max - min;

    if range == 0.0 {
        return [0.0, 0.0, max];
    }

    let s = range / max;
    let h = hue_from_rgb(r, g, b, max, range);

    [h, s, max]
}

/// Convert an HSV color to RGB.
///
/// The hue is split into six sectors of one sixth of a turn each. The sector
/// index is `floor(h * 6)` taken modulo 6 with euclidean remainder, so
/// `h == 1.0` falls in sector 0 (same as `h == 0.0`) and negative hues wrap
/// around instead of being truncated towards zero.
///
/// # Arguments
///
/// * `h` - The hue as a fraction of a full turn.
/// * `s` - The saturation in the range [0, 1].
/// * `v` - The value in the range [0, 1].
///
/// # Returns
///
/// The `[r, g, b]` triple. A zero saturation returns `[v, v, v]`.
///
/// # Example
///
/// ```
/// use colorsys_convert::hsv_to_rgb;
///
/// assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), [0.0, 1.0, 1.0]);
/// assert_eq!(hsv_to_rgb(1.0, 1.0, 1.0), [1.0, 0.0, 0.0]);
/// ```
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Triple {
    if s == 0.0 {
        return [v, v, v];
    }

    let h6 = h * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
