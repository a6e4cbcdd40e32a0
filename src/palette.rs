use rand::Rng;
use rand_core::RngCore;

/// Intensity band palettes draw from. Pure black and white are kept out so
/// layered fills stay soft against the paper background.
pub const INTENSITY_MIN: f64 = 0.1;
pub const INTENSITY_MAX: f64 = 0.9;

/// An RGB color with channels in `[0, 1]`. Palette tones keep all three
/// channels equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::grey(0.0);

    /// A grey tone with every channel at `intensity`.
    pub const fn grey(intensity: f64) -> Self {
        Self {
            r: intensity,
            g: intensity,
            b: intensity,
        }
    }

    /// True when all three channels carry the same value.
    pub fn is_monochrome(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Collapses the color to a single intensity. Exact for monochrome
    /// tones, Rec. 709 weighting otherwise.
    pub fn luma(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

/// Draws `count` random grey tones from `[INTENSITY_MIN, INTENSITY_MAX)`.
pub fn random_monochrome<R: RngCore>(rng: &mut R, count: usize) -> Vec<Color> {
    (0..count)
        .map(|_| Color::grey(rng.gen_range(INTENSITY_MIN..INTENSITY_MAX)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn palette_len_matches_count() {
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        for count in [0, 1, 8, 64] {
            assert_eq!(random_monochrome(&mut rng, count).len(), count);
        }
    }

    #[test]
    fn tones_are_monochrome_and_in_band() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        for tone in random_monochrome(&mut rng, 256) {
            assert!(tone.is_monochrome());
            assert!(tone.r >= INTENSITY_MIN && tone.r < INTENSITY_MAX);
        }
    }

    #[test]
    fn luma_is_identity_for_grey() {
        let tone = Color::grey(0.37);
        assert!((tone.luma() - 0.37).abs() < 1e-12);
    }
}
