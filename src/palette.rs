//! Color swatches offered by the dialog.

use crate::constants::DEFAULT_PALETTE;
use rand::seq::SliceRandom;
use rand::Rng;

/// Ordered list of selectable swatches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Falls back to the default swatches when `colors` is empty.
    pub fn new(colors: Vec<String>) -> Self {
        if colors.is_empty() {
            Self::default()
        } else {
            Self { colors }
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: &str) -> bool {
        self.position(color).is_some()
    }

    /// Case-insensitive lookup, swatches are hex strings.
    pub fn position(&self, color: &str) -> Option<usize> {
        self.colors.iter().position(|c| c.eq_ignore_ascii_case(color))
    }

    /// Uniformly random swatch
    pub fn random_color(&self) -> String {
        self.random_color_with(&mut rand::thread_rng())
    }

    pub fn random_color_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.colors
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| DEFAULT_PALETTE[0].to_string())
    }

    /// Swatch `offset` steps away from `current`, wrapping around.
    /// A color outside the palette steps from the first swatch.
    pub fn step(&self, current: &str, offset: isize) -> String {
        let len = self.colors.len() as isize;
        if len == 0 {
            return current.to_string();
        }
        let next = match self.position(current) {
            Some(index) => (index as isize + offset).rem_euclid(len),
            None => 0,
        };
        self.colors[next as usize].clone()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_color_comes_from_palette() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let color = palette.random_color_with(&mut rng);
            assert!(palette.contains(&color));
        }
    }

    #[test]
    fn test_step_wraps_both_ways() {
        let palette = Palette::new(vec!["#111111".into(), "#222222".into(), "#333333".into()]);
        assert_eq!(palette.step("#333333", 1), "#111111");
        assert_eq!(palette.step("#111111", -1), "#333333");
        assert_eq!(palette.step("#abcdef", 1), "#111111");
    }

    #[test]
    fn test_empty_palette_falls_back_to_default() {
        assert_eq!(Palette::new(Vec::new()), Palette::default());
    }
}
