/// An error type for the color module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// More than three components were given to a constructor.
    #[error("A color takes at most 3 components, got {0}")]
    TooManyComponents(usize),

    /// A key/value record does not hold one of the RGB channels.
    #[error("Missing the '{0}' channel")]
    MissingChannel(&'static str),
}
