#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Color space conversions
//!
//! Six pure functions convert between RGB and each of HSV, HLS and YIQ. All of
//! them take three `f64` components and return a `[f64; 3]` triple:
//!
//! - **HSV**: `[hue, saturation, value]`
//! - **HLS**: `[hue, lightness, saturation]`
//! - **YIQ**: `[luma, in_phase, quadrature]`
//!
//! Hue is a fraction of a full turn in `[0, 1)`, not degrees.
//!
//! RGB input is expected in `[0, 1]^3`. Input outside that range is not an
//! error: the formulas are applied as written and the result is not clamped.
//!
//! ## Example
//!
//! ```rust
//! use colorsys_convert::{hsv_to_rgb, rgb_to_hsv};
//!
//! let [h, s, v] = rgb_to_hsv(1.0, 1.0, 0.0);
//! assert_eq!([h, s, v], [1.0 / 6.0, 1.0, 1.0]);
//!
//! let [r, g, b] = hsv_to_rgb(h, s, v);
//! assert_eq!([r, g, b], [1.0, 1.0, 0.0]);
//! ```

/// Error types for the conversion module.
pub mod error;

/// RGB <-> HLS conversions.
pub mod hls;

/// RGB <-> HSV conversions.
pub mod hsv;

/// Runtime selection of a color space.
pub mod space;

/// RGB <-> YIQ conversions.
pub mod yiq;

mod hue;

pub use crate::error::ConvertError;
pub use crate::hls::{hls_to_rgb, rgb_to_hls};
pub use crate::hsv::{hsv_to_rgb, rgb_to_hsv};
pub use crate::hue::wrap_hue;
pub use crate::space::ColorSpace;
pub use crate::yiq::{rgb_to_yiq, yiq_to_rgb};

/// An ordered triple of color components.
pub type Triple = [f64; 3];
