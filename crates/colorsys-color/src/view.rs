use std::fmt;

use colorsys_convert::{ColorSpace, Triple};

use crate::{error::ColorError, family::triple_from_slice, Color};

/// Macro to define a view presenting the canonical RGB color through another space.
///
/// A view keeps two triples: the canonical RGB one and the native one, the
/// same color expressed in the view's space. Writing an RGB channel
/// re-projects the native triple. Writing a native component replaces that
/// component only and re-synthesizes RGB through the inverse conversion, so
/// the two other native components are kept exactly as they were set. A hue is
/// stored wrapped into [0, 1).
///
/// # Arguments
///
/// * `name` - The name of the view type.
/// * `space` - The native color space of the view.
/// * `fields` - `index: getter, setter, doc` for each native component.
macro_rules! define_color_view {
    ($(#[$meta:meta])* $name:ident, $space:expr, [$($index:literal: $field:ident, $setter:ident, $doc:literal);+ $(;)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name {
            rgb: Triple,
            native: Triple,
        }

        impl $name {
            /// The native color space of the view.
            pub const SPACE: ColorSpace = $space;

            /// Create a view from its native components.
            pub fn new($($field: f64),+) -> Self {
                let native = Self::SPACE.normalize([$($field),+]);
                Self {
                    rgb: Self::SPACE.to_rgb(native),
                    native,
                }
            }

            /// Create a view from up to three native components.
            ///
            /// Missing trailing components default to `0`.
            ///
            /// # Errors
            ///
            /// Returns [`ColorError::TooManyComponents`] for more than three values.
            pub fn from_slice(values: &[f64]) -> Result<Self, ColorError> {
                let [a, b, c] = triple_from_slice(values)?;
                Ok(Self::new(a, b, c))
            }

            /// Create a view from RGB channels.
            pub fn from_rgb(red: f64, green: f64, blue: f64) -> Self {
                Self::from_canonical([red, green, blue])
            }

            /// Create a view from a triple expressed in `space`.
            ///
            /// A triple of the native space is kept as given, hue wrapping aside.
            pub fn from_space(space: ColorSpace, triple: Triple) -> Self {
                if space == Self::SPACE {
                    let [a, b, c] = triple;
                    return Self::new(a, b, c);
                }
                Self::from_canonical(space.to_rgb(triple))
            }

            /// Project the color into `space`.
            ///
            /// The native space returns the native triple as last set.
            pub fn project(&self, space: ColorSpace) -> Triple {
                if space == Self::SPACE {
                    return self.native;
                }
                space.project(self.rgb)
            }

            $(
                #[doc = $doc]
                #[inline]
                pub fn $field(&self) -> f64 {
                    self.native[$index]
                }

                #[doc = concat!("Set the ", stringify!($field), " and write it through to RGB.")]
                ///
                /// The two other native components keep their current values.
                pub fn $setter(&mut self, $field: f64) {
                    self.native[$index] = $field;
                    self.native = Self::SPACE.normalize(self.native);
                    self.rgb = Self::SPACE.to_rgb(self.native);
                }
            )+

            pub(crate) fn from_canonical(rgb: Triple) -> Self {
                Self {
                    rgb,
                    native: Self::SPACE.project(rgb),
                }
            }

            pub(crate) fn replace_canonical(&mut self, rgb: Triple) {
                self.rgb = rgb;
                self.native = Self::SPACE.project(rgb);
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::from_canonical([0.0; 3])
            }
        }

        impl From<Color> for $name {
            fn from(color: Color) -> Self {
                Self::from_canonical(color.get_rgb())
            }
        }

        impl From<$name> for Color {
            fn from(view: $name) -> Self {
                Color::from(view.rgb)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let [a, b, c] = self.native;
                write!(f, "{}({}, {}, {})", stringify!($name), a, b, c)
            }
        }
    };
}

define_color_view!(
    /// A color presented through the HSV space.
    ///
    /// # Example
    ///
    /// ```
    /// use colorsys_color::ColorHSV;
    ///
    /// let mut color = ColorHSV::default();
    /// color.set_hue(2.0 / 6.0);
    /// color.set_saturation(1.0);
    /// color.set_value(1.0);
    /// assert_eq!(color.get_rgb(), [0.0, 1.0, 0.0]);
    /// ```
    ColorHSV,
    ColorSpace::Hsv,
    [
        0: hue, set_hue, "The hue as a fraction of a full turn.";
        1: saturation, set_saturation, "The saturation.";
        2: value, set_value, "The value, the largest RGB channel.";
    ]
);

define_color_view!(
    /// A color presented through the HLS space.
    ColorHLS,
    ColorSpace::Hls,
    [
        0: hue, set_hue, "The hue as a fraction of a full turn.";
        1: lightness, set_lightness, "The lightness, the mean of the largest and smallest RGB channels.";
        2: saturation, set_saturation, "The saturation.";
    ]
);

define_color_view!(
    /// A color presented through the YIQ space.
    ///
    /// Writing a YIQ component can move the RGB channels outside [0, 1]; they
    /// are stored unclamped.
    ColorYIQ,
    ColorSpace::Yiq,
    [
        0: luma, set_luma, "The luma.";
        1: in_phase, set_in_phase, "The in-phase chrominance.";
        2: quadrature, set_quadrature, "The quadrature chrominance.";
    ]
);
