//! Deterministischer Zufall für Abstands- und Versatz-Jitter.
//!
//! Der Generator wird pro Punktberechnung aus der Geometrie neu geseedet
//! (nicht über Frames fortgeschrieben). Gleiche Eingaben ergeben damit
//! bitgleiche Punktlisten.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed-Faktor für geometrieabgeleitete Seeds.
const SEED_SCALE: i64 = 1000;

/// Jitter-Generator für eine einzelne Punktberechnung.
pub struct JitterRng(ChaCha8Rng);

impl JitterRng {
    /// Seed aus einer Länge (Linie, Bogen oder Umfang): `(length as i32) * 1000`.
    ///
    /// Verschiedene Geometrien gleicher ganzzahliger Länge teilen sich den Seed;
    /// das ist für Jitter akzeptabel.
    pub fn from_length(length: f32) -> Self {
        let seed = (length as i32 as i64) * SEED_SCALE;
        Self(ChaCha8Rng::seed_from_u64(seed as u64))
    }

    /// Gleichverteilter Wert in `[-max, max)`; `0.0` wenn `max <= 0`.
    pub fn symmetric(&mut self, max: f32) -> f32 {
        if max <= 0.0 {
            return 0.0;
        }
        self.0.gen::<f32>() * max * 2.0 - max
    }

    /// Ganzzahl in `[0, upper)`.
    pub fn below(&mut self, upper: u32) -> u32 {
        self.0.gen_range(0..upper.max(1))
    }

    /// Seed aus einer Position für die Zufallsrotation:
    /// `(|x| + |y| + |z|) as u32 * 10000`.
    pub fn from_position(position: glam::Vec3) -> Self {
        let sum = position.x.abs() + position.y.abs() + position.z.abs();
        let seed = (sum as u32).wrapping_mul(10_000);
        Self(ChaCha8Rng::seed_from_u64(seed as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_length_same_sequence() {
        let mut a = JitterRng::from_length(42.7);
        let mut b = JitterRng::from_length(42.2);
        for _ in 0..16 {
            assert_eq!(a.symmetric(3.0).to_bits(), b.symmetric(3.0).to_bits());
        }
    }

    #[test]
    fn test_symmetric_stays_in_range() {
        let mut rng = JitterRng::from_length(100.0);
        for _ in 0..1000 {
            let v = rng.symmetric(2.5);
            assert!((-2.5..2.5).contains(&v), "Wert {} außerhalb", v);
        }
        assert_eq!(rng.symmetric(0.0), 0.0);
    }

    #[test]
    fn test_below_upper_bound() {
        let mut rng = JitterRng::from_position(glam::Vec3::new(-12.0, 3.0, 40.0));
        for _ in 0..100 {
            assert!(rng.below(360) < 360);
        }
    }
}
