#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use colorsys_convert as convert;

#[doc(inline)]
pub use colorsys_color as color;

pub use colorsys_color::{Color, ColorError, ColorHLS, ColorHSV, ColorYIQ, RgbRecord};
pub use colorsys_convert::{
    hls_to_rgb, hsv_to_rgb, rgb_to_hls, rgb_to_hsv, rgb_to_yiq, wrap_hue, yiq_to_rgb, ColorSpace,
    ConvertError, Triple,
};
