#[cfg(feature = "dxf-io")]
mod dxf;

#[cfg(feature = "dxf-io")]
pub use dxf::{LAYER_RING, LAYER_ROLLERS, LAYER_SEPARATOR, LAYER_SHAFT, LAYER_WAVE_GEN};

#[cfg(feature = "svg-io")]
mod svg;

/// Generic I/O and format-conversion errors.
///
/// Both rendering backends are behind cargo feature-flags.
/// When a feature is disabled the corresponding variant is *not*
/// constructed in user code.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing a drawing.
    Dxf(::dxf::DxfError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),

            #[cfg(feature = "dxf-io")]
            Dxf(error) => write!(f, "DXF error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

#[cfg(feature = "dxf-io")]
impl From<::dxf::DxfError> for IoError {
    fn from(value: ::dxf::DxfError) -> Self {
        Self::Dxf(value)
    }
}
