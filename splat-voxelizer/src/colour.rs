/// Per-point saturation enhancement in HSV space.

/// Saturation multiplier applied to each point before it is accumulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationBoost {
    factor: f64,
}

impl SaturationBoost {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// A factor of exactly 1.0 leaves colours untouched.
    pub fn is_identity(&self) -> bool {
        self.factor == 1.0
    }

    /// Scale saturation of a 0-255 RGB colour, keeping hue and value.
    /// Saturation is capped at 1.0.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        if self.is_identity() {
            return rgb;
        }

        let [h, s, v] = rgb_to_hsv(rgb.map(|c| c / 255.0));
        let s = (s * self.factor).min(1.0);
        hsv_to_rgb([h, s, v]).map(|c| c * 255.0)
    }
}

/// Convert normalised RGB to HSV, all components in [0, 1].
pub fn rgb_to_hsv([r, g, b]: [f64; 3]) -> [f64; 3] {
    let max_c = r.max(g).max(b);
    let min_c = r.min(g).min(b);
    let v = max_c;
    if min_c == max_c {
        return [0.0, 0.0, v];
    }

    let range = max_c - min_c;
    let s = range / max_c;
    let rc = (max_c - r) / range;
    let gc = (max_c - g) / range;
    let bc = (max_c - b) / range;

    let h = if r == max_c {
        bc - gc
    } else if g == max_c {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(h / 6.0).rem_euclid(1.0), s, v]
}

/// Convert HSV back to normalised RGB.
pub fn hsv_to_rgb([h, s, v]: [f64; 3]) -> [f64; 3] {
    if s == 0.0 {
        return [v, v, v];
    }

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f64; 3], b: [f64; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-9, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn unit_factor_is_bit_identical() {
        let boost = SaturationBoost::new(1.0);
        let colour = [12.345, 200.0001, 99.9];
        assert!(boost.is_identity());
        assert_eq!(boost.apply(colour), colour);
    }

    #[test]
    fn boost_increases_saturation_and_keeps_value() {
        let colour = [200.0, 150.0, 150.0];
        let boosted = SaturationBoost::new(2.0).apply(colour);

        let before = rgb_to_hsv(colour.map(|c| c / 255.0));
        let after = rgb_to_hsv(boosted.map(|c| c / 255.0));
        assert!((after[0] - before[0]).abs() < 1e-9);
        assert!((after[1] - before[1] * 2.0).abs() < 1e-9);
        assert!((after[2] - before[2]).abs() < 1e-9);
        assert_close(boosted, [200.0, 100.0, 100.0]);
    }

    #[test]
    fn saturation_is_capped() {
        let boosted = SaturationBoost::new(10.0).apply([200.0, 150.0, 150.0]);
        assert_close(boosted, [200.0, 0.0, 0.0]);
    }

    #[test]
    fn greys_stay_grey() {
        let boosted = SaturationBoost::new(3.0).apply([80.0, 80.0, 80.0]);
        assert_close(boosted, [80.0, 80.0, 80.0]);
    }

    #[test]
    fn zero_factor_desaturates() {
        let boosted = SaturationBoost::new(0.0).apply([255.0, 0.0, 0.0]);
        assert_close(boosted, [255.0, 255.0, 255.0]);
    }

    #[test]
    fn hsv_round_trip_covers_every_sector() {
        for rgb in [
            [1.0, 0.5, 0.0],
            [0.5, 1.0, 0.0],
            [0.0, 1.0, 0.5],
            [0.0, 0.5, 1.0],
            [0.5, 0.0, 1.0],
            [1.0, 0.0, 0.5],
        ] {
            assert_close(hsv_to_rgb(rgb_to_hsv(rgb)), rgb);
        }
    }
}
