use std::fmt;
use std::str::FromStr;

use crate::{
    error::ConvertError, hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv, rgb_to_yiq, wrap_hue,
    yiq_to_rgb, Triple,
};

/// The color spaces supported by the conversion functions.
///
/// Useful when the source or target space is only known at runtime, e.g. when
/// it comes from a command line flag.
///
/// # Example
///
/// ```
/// use colorsys_convert::ColorSpace;
///
/// let space: ColorSpace = "hsv".parse().unwrap();
/// let rgb = space.to_rgb([0.5, 1.0, 1.0]);
/// assert_eq!(rgb, [0.0, 1.0, 1.0]);
/// assert_eq!(space.components(), ["hue", "saturation", "value"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Red, green, blue.
    Rgb,
    /// Hue, saturation, value.
    Hsv,
    /// Hue, lightness, saturation.
    Hls,
    /// Luma, in-phase, quadrature.
    Yiq,
}

impl ColorSpace {
    /// All the supported color spaces.
    pub const ALL: [ColorSpace; 4] = [
        ColorSpace::Rgb,
        ColorSpace::Hsv,
        ColorSpace::Hls,
        ColorSpace::Yiq,
    ];

    /// Lowercase name of the color space.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Hls => "hls",
            ColorSpace::Yiq => "yiq",
        }
    }

    /// Names of the three components, in order.
    pub fn components(self) -> [&'static str; 3] {
        match self {
            ColorSpace::Rgb => ["red", "green", "blue"],
            ColorSpace::Hsv => ["hue", "saturation", "value"],
            ColorSpace::Hls => ["hue", "lightness", "saturation"],
            ColorSpace::Yiq => ["luma", "in_phase", "quadrature"],
        }
    }

    /// Convert a triple expressed in this space to RGB.
    pub fn to_rgb(self, [a, b, c]: Triple) -> Triple {
        match self {
            ColorSpace::Rgb => [a, b, c],
            ColorSpace::Hsv => hsv_to_rgb(a, b, c),
            ColorSpace::Hls => hls_to_rgb(a, b, c),
            ColorSpace::Yiq => yiq_to_rgb(a, b, c),
        }
    }

    /// Project an RGB triple into this space.
    pub fn project(self, [r, g, b]: Triple) -> Triple {
        match self {
            ColorSpace::Rgb => [r, g, b],
            ColorSpace::Hsv => rgb_to_hsv(r, g, b),
            ColorSpace::Hls => rgb_to_hls(r, g, b),
            ColorSpace::Yiq => rgb_to_yiq(r, g, b),
        }
    }

    /// Bring a triple of this space into its canonical form.
    ///
    /// The hue of HSV and HLS triples is wrapped into `[0, 1)`; every other
    /// component is returned as given.
    pub fn normalize(self, [a, b, c]: Triple) -> Triple {
        match self {
            ColorSpace::Hsv | ColorSpace::Hls => [wrap_hue(a), b, c],
            ColorSpace::Rgb | ColorSpace::Yiq => [a, b, c],
        }
    }

    /// Convert a triple from this space to `target`, going through RGB.
    ///
    /// Converting to the same space returns the triple untouched.
    pub fn convert(self, target: ColorSpace, triple: Triple) -> Triple {
        log::trace!("converting {:?} from {} to {}", triple, self, target);
        if self == target {
            return triple;
        }
        target.project(self.to_rgb(triple))
    }

    /// Like [`ColorSpace::convert`] but from an untyped slice of components.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidArity`] if `values` does not hold exactly
    /// three components.
    pub fn convert_slice(self, target: ColorSpace, values: &[f64]) -> Result<Triple, ConvertError> {
        let triple: Triple = values.try_into().map_err(|_| {
            log::debug!("rejecting {} components for a {} triple", values.len(), self);
            ConvertError::InvalidArity(values.len())
        })?;
        Ok(self.convert(target, triple))
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.name() == name)
            .ok_or_else(|| {
                log::debug!("unknown color space name: {}", s);
                ConvertError::UnknownColorSpace(s.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::ColorSpace;
    use crate::ConvertError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn parse_names() -> Result<(), ConvertError> {
        assert_eq!("rgb".parse::<ColorSpace>()?, ColorSpace::Rgb);
        assert_eq!(" HSV ".parse::<ColorSpace>()?, ColorSpace::Hsv);
        assert_eq!("Hls".parse::<ColorSpace>()?, ColorSpace::Hls);
        assert_eq!("yiq".parse::<ColorSpace>()?, ColorSpace::Yiq);
        assert_eq!(
            "lab".parse::<ColorSpace>(),
            Err(ConvertError::UnknownColorSpace("lab".to_string()))
        );
        Ok(())
    }

    #[test]
    fn display_round_trips_through_parse() -> Result<(), ConvertError> {
        for space in ColorSpace::ALL {
            assert_eq!(space.to_string().parse::<ColorSpace>()?, space);
        }
        Ok(())
    }

    #[test]
    fn convert_between_spaces() {
        // yellow in hsv is (1/6, 0.5, 1) in hls
        let hls = ColorSpace::Hsv.convert(ColorSpace::Hls, [1.0 / 6.0, 1.0, 1.0]);
        assert_abs_diff_eq!(hls[0], 1.0 / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hls[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(hls[2], 1.0, epsilon = 1e-12);

        // same space is the identity, even for out of range triples
        let triple = [3.0, -1.0, 0.25];
        assert_eq!(ColorSpace::Yiq.convert(ColorSpace::Yiq, triple), triple);
    }

    #[test]
    fn normalize_wraps_hue_only() {
        assert_eq!(ColorSpace::Hsv.normalize([1.0, 1.0, 1.0]), [0.0, 1.0, 1.0]);
        assert_eq!(ColorSpace::Hls.normalize([-0.25, 0.5, 1.0]), [0.75, 0.5, 1.0]);
        assert_eq!(ColorSpace::Hsv.normalize([0.5, 2.0, -1.0]), [0.5, 2.0, -1.0]);
        assert_eq!(ColorSpace::Rgb.normalize([1.5, -1.0, 1.0]), [1.5, -1.0, 1.0]);
        assert_eq!(ColorSpace::Yiq.normalize([1.0, -0.5, 0.5]), [1.0, -0.5, 0.5]);
    }

    #[test]
    fn convert_slice_checks_arity() {
        assert_eq!(
            ColorSpace::Rgb.convert_slice(ColorSpace::Hsv, &[1.0, 0.0]),
            Err(ConvertError::InvalidArity(2))
        );
        assert_eq!(
            ColorSpace::Rgb.convert_slice(ColorSpace::Hsv, &[1.0, 0.0, 0.0, 1.0]),
            Err(ConvertError::InvalidArity(4))
        );
        assert_eq!(
            ColorSpace::Rgb.convert_slice(ColorSpace::Hsv, &[1.0, 0.0, 0.0]),
            Ok([0.0, 1.0, 1.0])
        );
    }
}
