use crate::Triple;

// inverse of the rgb -> yiq matrix
const R_FROM_I: f64 = 0.946_882_217_090_069_3;
const R_FROM_Q: f64 = 0.623_556_581_986_143_3;
const G_FROM_I: f64 = -0.274_787_646_298_978_34;
const G_FROM_Q: f64 = -0.635_691_079_187_380_1;
const B_FROM_I: f64 = -1.108_545_034_642_032_2;
const B_FROM_Q: f64 = 1.709_006_928_406_466_6;

/// Convert an RGB color to YIQ.
///
/// Uses the NTSC luma weights `0.30, 0.59, 0.11` and projects the two color
/// differences `r - y` and `b - y` onto the I and Q axes.
///
/// # Arguments
///
/// * `r` - The red channel in the range [0, 1].
/// * `g` - The green channel in the range [0, 1].
/// * `b` - The blue channel in the range [0, 1].
///
/// # Returns
///
/// The YIQ triple with the following components:
///
/// * Y: The luma in the range [0, 1].
/// * I: The in-phase chrominance, roughly in [-0.6, 0.6].
/// * Q: The quadrature chrominance, roughly in [-0.53, 0.53].
///
/// # Example
///
/// ```
/// use colorsys_convert::rgb_to_yiq;
///
/// let [y, i, q] = rgb_to_yiq(0.0, 0.0, 1.0);
/// assert!((y - 0.11).abs() < 1e-12);
/// assert!((i + 0.3217).abs() < 1e-12);
/// assert!((q - 0.3121).abs() < 1e-12);
/// ```
pub fn rgb_to_yiq(r: f64, g: f64, b: f64) -> Triple {
    let y = 0.30 * r + 0.59 * g + 0.11 * b;
    let i = 0.74 * (r - y) - 0.27 * (b - y);
    let q = 0.48 * (r - y) + 0.41 * (b - y);

    [y, i, q]
}

/// Convert a YIQ color to RGB.
///
/// The output is not clamped: YIQ triples that do not come from an in-gamut
/// RGB color produce channels outside [0, 1]. Clamping is left to the caller.
///
/// # Arguments
///
/// * `y` - The luma.
/// * `i` - The in-phase chrominance.
/// * `q` - The quadrature chrominance.
///
/// # Returns
///
/// The `[r, g, b]` triple.
///
/// # Example
///
/// ```
/// use colorsys_convert::yiq_to_rgb;
///
/// let [r, g, b] = yiq_to_rgb(0.3, 0.599, 0.213);
/// assert!((r - 1.0).abs() < 1e-7);
/// assert!(g.abs() < 1e-7);
/// assert!(b.abs() < 1e-7);
/// ```
pub fn yiq_to_rgb(y: f64, i: f64, q: f64) -> Triple {
    let r = y + R_FROM_I * i + R_FROM_Q * q;
    let g = y + G_FROM_I * i + G_FROM_Q * q;
    let b = y + B_FROM_I * i + B_FROM_Q * q;

    [r, g, b]
}
