//! Behaviour shared by [`Color`] and its views.
//!
//! Every type of the family provides three primitives: `from_canonical`,
//! `replace_canonical` and `project`. The macros below build the public
//! accessors, the arithmetic and the comparisons on top of them, for every
//! type and for every pair of types.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use colorsys_convert::{ColorSpace, Triple};

use crate::{
    error::ColorError,
    record::{self, RgbRecord},
    Color, ColorHLS, ColorHSV, ColorYIQ,
};

/// Build a triple out of at most three components, padding with zeros.
pub(crate) fn triple_from_slice(values: &[f64]) -> Result<Triple, ColorError> {
    if values.len() > 3 {
        log::debug!("rejecting {} components for a color", values.len());
        return Err(ColorError::TooManyComponents(values.len()));
    }
    let mut triple = [0.0; 3];
    triple[..values.len()].copy_from_slice(values);
    Ok(triple)
}

/// Apply `op` channel by channel and clamp each result to [0, 1].
fn combine(lhs: Triple, rhs: Triple, op: impl Fn(f64, f64) -> f64) -> Triple {
    [
        op(lhs[0], rhs[0]).clamp(0.0, 1.0),
        op(lhs[1], rhs[1]).clamp(0.0, 1.0),
        op(lhs[2], rhs[2]).clamp(0.0, 1.0),
    ]
}

macro_rules! impl_color_common {
    ($name:ident) => {
        impl $name {
            /// The canonical RGB triple.
            #[inline]
            pub fn get_rgb(&self) -> Triple {
                self.project(ColorSpace::Rgb)
            }

            /// The color as an HSV triple.
            #[inline]
            pub fn get_hsv(&self) -> Triple {
                self.project(ColorSpace::Hsv)
            }

            /// The color as an HLS triple.
            #[inline]
            pub fn get_hls(&self) -> Triple {
                self.project(ColorSpace::Hls)
            }

            /// The color as a YIQ triple.
            #[inline]
            pub fn get_yiq(&self) -> Triple {
                self.project(ColorSpace::Yiq)
            }

            /// Overwrite the canonical RGB triple.
            pub fn set_rgb(&mut self, red: f64, green: f64, blue: f64) {
                self.replace_canonical([red, green, blue]);
            }

            /// The red channel.
            #[inline]
            pub fn red(&self) -> f64 {
                self.get_rgb()[0]
            }

            /// The green channel.
            #[inline]
            pub fn green(&self) -> f64 {
                self.get_rgb()[1]
            }

            /// The blue channel.
            #[inline]
            pub fn blue(&self) -> f64 {
                self.get_rgb()[2]
            }

            /// Set the red channel, keeping green and blue.
            pub fn set_red(&mut self, red: f64) {
                let [_, green, blue] = self.get_rgb();
                self.replace_canonical([red, green, blue]);
            }

            /// Set the green channel, keeping red and blue.
            pub fn set_green(&mut self, green: f64) {
                let [red, _, blue] = self.get_rgb();
                self.replace_canonical([red, green, blue]);
            }

            /// Set the blue channel, keeping red and green.
            pub fn set_blue(&mut self, blue: f64) {
                let [red, green, _] = self.get_rgb();
                self.replace_canonical([red, green, blue]);
            }
        }

        impl PartialEq<RgbRecord> for $name {
            fn eq(&self, other: &RgbRecord) -> bool {
                self.get_rgb() == other.to_array()
            }
        }

        impl PartialEq<$name> for RgbRecord {
            fn eq(&self, other: &$name) -> bool {
                self.to_array() == other.get_rgb()
            }
        }

        impl<K, S> PartialEq<HashMap<K, f64, S>> for $name
        where
            K: Borrow<str> + Eq + Hash,
            S: BuildHasher,
        {
            fn eq(&self, other: &HashMap<K, f64, S>) -> bool {
                record::map_matches(self.get_rgb(), other)
            }
        }

        impl<K, S> PartialEq<$name> for HashMap<K, f64, S>
        where
            K: Borrow<str> + Eq + Hash,
            S: BuildHasher,
        {
            fn eq(&self, other: &$name) -> bool {
                record::map_matches(other.get_rgb(), self)
            }
        }

        impl From<$name> for RgbRecord {
            fn from(color: $name) -> Self {
                RgbRecord::from(color.get_rgb())
            }
        }
    };
}

macro_rules! impl_color_pair {
    ($lhs:ident, $rhs:ident) => {
        impl PartialEq<$rhs> for $lhs {
            fn eq(&self, other: &$rhs) -> bool {
                self.get_rgb() == other.get_rgb()
            }
        }

        impl Add<$rhs> for $lhs {
            type Output = $lhs;

            #[inline]
            fn add(self, rhs: $rhs) -> Self::Output {
                $lhs::from_canonical(combine(self.get_rgb(), rhs.get_rgb(), |a, b| a + b))
            }
        }

        impl Sub<$rhs> for $lhs {
            type Output = $lhs;

            #[inline]
            fn sub(self, rhs: $rhs) -> Self::Output {
                $lhs::from_canonical(combine(self.get_rgb(), rhs.get_rgb(), |a, b| a - b))
            }
        }

        impl Mul<$rhs> for $lhs {
            type Output = $lhs;

            #[inline]
            fn mul(self, rhs: $rhs) -> Self::Output {
                $lhs::from_canonical(combine(self.get_rgb(), rhs.get_rgb(), |a, b| a * b))
            }
        }

        impl AddAssign<$rhs> for $lhs {
            #[inline]
            fn add_assign(&mut self, rhs: $rhs) {
                *self = *self + rhs;
            }
        }

        impl SubAssign<$rhs> for $lhs {
            #[inline]
            fn sub_assign(&mut self, rhs: $rhs) {
                *self = *self - rhs;
            }
        }

        impl MulAssign<$rhs> for $lhs {
            #[inline]
            fn mul_assign(&mut self, rhs: $rhs) {
                *self = *self * rhs;
            }
        }

        #[cfg(feature = "approx")]
        impl approx::AbsDiffEq<$rhs> for $lhs {
            type Epsilon = f64;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                <f64 as approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &$rhs, epsilon: Self::Epsilon) -> bool {
                let (a, b) = (self.get_rgb(), other.get_rgb());
                a.iter()
                    .zip(b.iter())
                    .all(|(ai, bi)| <f64 as approx::AbsDiffEq>::abs_diff_eq(ai, bi, epsilon))
            }
        }

        #[cfg(feature = "approx")]
        impl approx::RelativeEq<$rhs> for $lhs {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                <f64 as approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &$rhs,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let (a, b) = (self.get_rgb(), other.get_rgb());
                a.iter().zip(b.iter()).all(|(ai, bi)| {
                    <f64 as approx::RelativeEq>::relative_eq(ai, bi, epsilon, max_relative)
                })
            }
        }

        #[cfg(feature = "approx")]
        impl approx::UlpsEq<$rhs> for $lhs {
            #[inline]
            fn default_max_ulps() -> u32 {
                <f64 as approx::UlpsEq>::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &$rhs, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                let (a, b) = (self.get_rgb(), other.get_rgb());
                a.iter().zip(b.iter()).all(|(ai, bi)| {
                    <f64 as approx::UlpsEq>::ulps_eq(ai, bi, epsilon, max_ulps)
                })
            }
        }
    };
}

macro_rules! impl_color_row {
    ($lhs:ident => $($rhs:ident),+) => {
        $(impl_color_pair!($lhs, $rhs);)+
    };
}

impl_color_common!(Color);
impl_color_common!(ColorHSV);
impl_color_common!(ColorHLS);
impl_color_common!(ColorYIQ);

impl_color_row!(Color => Color, ColorHSV, ColorHLS, ColorYIQ);
impl_color_row!(ColorHSV => Color, ColorHSV, ColorHLS, ColorYIQ);
impl_color_row!(ColorHLS => Color, ColorHSV, ColorHLS, ColorYIQ);
impl_color_row!(ColorYIQ => Color, ColorHSV, ColorHLS, ColorYIQ);
