//! Abstands-Hilfen: Punkt-Anzahl für FullLength und Zufalls-Versatz.

use super::super::PointParams;
use crate::core::JitterRng;

/// Anzahl der Abstände, die `length` bei gerundeter Teilung durch `spacing` ergibt.
///
/// Mindestens 1; `None` bei ungültigen Eingaben.
pub fn full_length_count(length: f32, spacing: f32) -> Option<usize> {
    let count = (length / spacing).round();
    if !count.is_finite() {
        return None;
    }
    Some(count.max(1.0) as usize)
}

/// Deterministischer Zufalls-Versatz entlang und quer zur Linie.
///
/// Im Zaun-Modus immer null. Der Seed hängt nur von der Linienlänge ab, damit
/// die Vorschau bei unveränderter Geometrie nicht flackert.
pub struct Jitter {
    rng: JitterRng,
    spacing: f32,
    offset: f32,
}

impl Jitter {
    pub fn new(params: &PointParams, length: f32) -> Self {
        let (spacing, offset) = if params.is_fence() {
            (0.0, 0.0)
        } else {
            (params.random_spacing, params.random_offset)
        };
        Self {
            rng: JitterRng::from_length(length),
            spacing,
            offset,
        }
    }

    /// Versatz entlang der Linie in `[-random_spacing, random_spacing)`.
    pub fn along(&mut self) -> f32 {
        self.rng.symmetric(self.spacing)
    }

    /// Seitlicher Versatz in `[-random_offset, random_offset)`.
    pub fn lateral(&mut self) -> f32 {
        self.rng.symmetric(self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::SpacingMode;

    #[test]
    fn test_full_length_count_rounds() {
        assert_eq!(full_length_count(100.0, 30.0), Some(3));
        assert_eq!(full_length_count(100.0, 40.0), Some(3));
        assert_eq!(full_length_count(5.0, 40.0), Some(1));
        assert_eq!(full_length_count(f32::NAN, 40.0), None);
    }

    #[test]
    fn test_jitter_zero_in_fence_mode() {
        let params = PointParams {
            spacing_mode: SpacingMode::FenceMode,
            random_spacing: 5.0,
            random_offset: 5.0,
            ..PointParams::default()
        };
        let mut jitter = Jitter::new(&params, 42.0);
        for _ in 0..10 {
            assert_eq!(jitter.along(), 0.0);
            assert_eq!(jitter.lateral(), 0.0);
        }
    }

    #[test]
    fn test_jitter_in_range_and_reproducible() {
        let params = PointParams {
            random_spacing: 2.0,
            random_offset: 3.0,
            ..PointParams::default()
        };
        let mut a = Jitter::new(&params, 42.0);
        let mut b = Jitter::new(&params, 42.0);
        for _ in 0..50 {
            let along = a.along();
            let lateral = a.lateral();
            assert!((-2.0..2.0).contains(&along));
            assert!((-3.0..3.0).contains(&lateral));
            assert_eq!(along, b.along());
            assert_eq!(lateral, b.lateral());
        }
    }
}
