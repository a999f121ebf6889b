/// Point records flowing from the loader into the voxel grid.

/// Colour as stored in the source file. The two encodings are mutually
/// exclusive and chosen once per file from the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawColour {
    /// Direct 0-255 channels.
    Rgb([f64; 3]),
    /// Zeroth-order spherical harmonic coefficients (f_dc_0..2).
    Harmonic([f64; 3]),
}

/// One vertex exactly as loaded, before any transform or decoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPoint {
    pub position: [f64; 3],
    pub colour: RawColour,
    /// Pre-logistic opacity.
    pub opacity_logit: f64,
}

/// Normalised point: transformed position, colour on the 0-255 scale and
/// 0-1 opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub position: [f64; 3],
    pub colour: [f64; 3],
    pub opacity: f64,
}

impl Point {
    pub fn new(position: [f64; 3], colour: [f64; 3], opacity: f64) -> Self {
        Self {
            position,
            colour,
            opacity,
        }
    }
}
