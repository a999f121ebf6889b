/// Attribute normalisation: axis correction, colour and opacity decoding,
/// and opacity cutoff filtering.
use crate::config::VoxelizerConfig;
use crate::point::{Point, RawColour, RawPoint};
use constants::voxelization::SH_C0;
use rayon::prelude::*;

/// Points that survived the opacity cutoff.
#[derive(Debug, Default)]
pub struct NormalizedCloud {
    pub points: Vec<Point>,
    /// Points at or below the opacity cutoff.
    pub discarded: usize,
}

/// Apply the configured axis flips.
pub fn transform_coordinates(position: [f64; 3], config: &VoxelizerConfig) -> [f64; 3] {
    let [mut x, mut y, z] = position;
    if config.invert_y {
        y = -y;
    }
    if config.mirror_x {
        x = -x;
    }
    [x, y, z]
}

/// Decode stored colour onto the 0-255 scale.
/// Harmonic colours are not clamped and may fall outside that range.
pub fn decode_colour(colour: &RawColour) -> [f64; 3] {
    match colour {
        RawColour::Rgb(rgb) => *rgb,
        RawColour::Harmonic(coeffs) => coeffs.map(|c| (0.5 + SH_C0 * c) * 255.0),
    }
}

/// Logistic function mapping a stored logit to [0, 1].
pub fn sigmoid(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

/// Normalise one raw point, or None if it falls at or below the opacity cutoff.
pub fn normalize_point(raw: &RawPoint, config: &VoxelizerConfig) -> Option<Point> {
    let opacity = sigmoid(raw.opacity_logit);
    if opacity <= config.min_opacity_cutoff {
        return None;
    }

    Some(Point::new(
        transform_coordinates(raw.position, config),
        decode_colour(&raw.colour),
        opacity,
    ))
}

/// Normalise every raw point in parallel, keeping input order.
pub fn normalize_points(raw_points: &[RawPoint], config: &VoxelizerConfig) -> NormalizedCloud {
    let points: Vec<Point> = raw_points
        .par_iter()
        .filter_map(|raw| normalize_point(raw, config))
        .collect();

    NormalizedCloud {
        discarded: raw_points.len() - points.len(),
        points,
    }
}
