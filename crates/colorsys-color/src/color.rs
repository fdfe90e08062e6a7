use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use colorsys_convert::{ColorSpace, Triple};

use crate::{error::ColorError, family::triple_from_slice, record};

/// A color stored as a canonical RGB triple.
///
/// The RGB triple is the single source of truth: the HSV, HLS and YIQ
/// representations are computed on demand. Channels are conceptually in
/// [0, 1] but values outside that range are stored as given; only the
/// arithmetic operators clamp.
///
/// # Example
///
/// ```
/// use colorsys_color::Color;
///
/// let mut color = Color::new(1.0, 1.0, 0.0);
/// assert_eq!(color.get_hsv(), [1.0 / 6.0, 1.0, 1.0]);
///
/// color.set_green(0.0);
/// assert_eq!(color, Color::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "record::RgbRecord", into = "record::RgbRecord")
)]
pub struct Color {
    rgb: Triple,
}

impl Color {
    /// Create a color from its RGB channels.
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            rgb: [red, green, blue],
        }
    }

    /// Create a color from up to three RGB channels.
    ///
    /// Missing trailing channels default to `0`, so an empty slice gives black.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::TooManyComponents`] for more than three values.
    pub fn from_slice(values: &[f64]) -> Result<Self, ColorError> {
        Ok(Self::from_canonical(triple_from_slice(values)?))
    }

    /// Create a color from a triple expressed in `space`.
    pub fn from_space(space: ColorSpace, triple: Triple) -> Self {
        Self::from_canonical(space.to_rgb(triple))
    }

    /// Project the color into `space`.
    pub fn project(&self, space: ColorSpace) -> Triple {
        space.project(self.rgb)
    }

    pub(crate) fn from_canonical(rgb: Triple) -> Self {
        Self { rgb }
    }

    pub(crate) fn replace_canonical(&mut self, rgb: Triple) {
        self.rgb = rgb;
    }
}

impl From<Triple> for Color {
    fn from(rgb: Triple) -> Self {
        Self::from_canonical(rgb)
    }
}

impl From<record::RgbRecord> for Color {
    fn from(record: record::RgbRecord) -> Self {
        Self::from_canonical(record.to_array())
    }
}

impl<K, S> TryFrom<&HashMap<K, f64, S>> for Color
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    type Error = ColorError;

    fn try_from(map: &HashMap<K, f64, S>) -> Result<Self, Self::Error> {
        Ok(Self::from_canonical(record::rgb_from_map(map)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "Color({}, {}, {})", r, g, b)
    }
}
