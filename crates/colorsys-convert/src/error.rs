/// An error type for the conversion module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The number of components is not three.
    #[error("Expected 3 color components, got {0}")]
    InvalidArity(usize),

    /// The name does not match any supported color space.
    #[error("Unknown color space '{0}', expected one of: rgb, hsv, hls, yiq")]
    UnknownColorSpace(String),
}
