/// Compute the hue of an RGB triple as a fraction of a full turn.
///
/// `max` is the largest channel and `range` is `max - min`. The gray case
/// (`range == 0`) has no hue and must be handled by the caller.
///
/// When two channels tie for the maximum, red wins over green and green wins
/// over blue. This fixes the boundary hues: yellow is `1/6`, cyan is `3/6` and
/// magenta is `5/6`.
pub(crate) fn hue_from_rgb(r: f64, g: f64, b: f64, max: f64, range: f64) -> f64 {
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    wrap_hue(h / 6.0)
}

/// Wrap a hue, as a fraction of a full turn, into `[0, 1)`.
///
/// Hues already in `[0, 1)` are returned unchanged. `rem_euclid` rounds tiny
/// negative values up to exactly `1.0`, which is folded back onto `0.0`.
///
/// # Example
///
/// ```
/// use colorsys_convert::wrap_hue;
///
/// assert_eq!(wrap_hue(1.0), 0.0);
/// assert_eq!(wrap_hue(-0.25), 0.75);
/// assert_eq!(wrap_hue(0.5), 0.5);
/// ```
pub fn wrap_hue(h: f64) -> f64 {
    let h = h.rem_euclid(1.0);
    if h >= 1.0 {
        0.0
    } else {
        h
    }
}
