#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Color values
//!
//! [`Color`] stores a canonical RGB triple. [`ColorHSV`], [`ColorHLS`] and
//! [`ColorYIQ`] store the same canonical triple and present it through another
//! coordinate system with named accessors that read and write through to RGB.
//!
//! Every type of the family can:
//!
//! - project itself into any space with `get_rgb`, `get_hsv`, `get_hls` and
//!   `get_yiq`,
//! - read and write the `red`, `green` and `blue` channels,
//! - be added, subtracted and multiplied with any other member of the family,
//!   channel by channel in RGB, with every result clamped to [0, 1],
//! - be compared with any other member of the family, with an [`RgbRecord`] or
//!   with a `HashMap` holding the `red`, `green` and `blue` keys.
//!
//! Equality through `==` is exact. With the `approx` feature the family also
//! implements the `approx` traits for tolerance-based comparisons.
//!
//! ## Example
//!
//! ```rust
//! use colorsys_color::{Color, ColorHSV};
//!
//! let red = ColorHSV::new(0.0, 1.0, 1.0);
//! let white = ColorHSV::new(0.0, 0.0, 1.0);
//!
//! let cyan = white - red;
//! assert_eq!(cyan, ColorHSV::new(0.5, 1.0, 1.0));
//! assert_eq!(cyan, Color::new(0.0, 1.0, 0.0) + Color::new(0.0, 0.0, 1.0));
//! assert_eq!(cyan.hue(), 0.5);
//! ```

/// The canonical RGB color type.
pub mod color;

/// Error types for the color module.
pub mod error;

/// Plain key/value representation of an RGB color.
pub mod record;

/// Views presenting a color through HSV, HLS or YIQ.
pub mod view;

mod family;

pub use crate::color::Color;
pub use crate::error::ColorError;
pub use crate::record::RgbRecord;
pub use crate::view::{ColorHLS, ColorHSV, ColorYIQ};

pub use colorsys_convert::{ColorSpace, Triple};
