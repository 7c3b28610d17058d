//! Parameter scatter for the decorative particle layers.
//!
//! The page floats two purely cosmetic element sets over the background:
//! leaves that drift from above the viewport to below it while rotating,
//! and stars that pulse in place. Their parameters are drawn once from the
//! caller's RNG when the view is built and never touched again, so the
//! whole scatter is reproducible from a seed.

use rand::Rng;

/// Number of drifting leaves on the page.
pub const LEAF_COUNT: usize = 12;

/// Number of pulsing stars on the page.
pub const STAR_COUNT: usize = 15;

/// One drifting leaf: a soft circle that falls the full viewport height
/// while rotating to `rotate` degrees, on an infinite loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    /// Diameter in pixels.
    pub size: f64,
    /// Horizontal position as a percentage of the viewport width.
    pub x: f64,
    /// Animation start offset in seconds.
    pub delay: f64,
    /// Rotation reached at the bottom of the fall, in degrees.
    pub rotate: f64,
    /// Seconds per fall.
    pub duration: f64,
}

/// One pulsing star: a small dot that fades and scales in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Diameter in pixels.
    pub size: f64,
    /// Horizontal position as a percentage of the viewport width.
    pub x: f64,
    /// Vertical position as a percentage of the viewport height.
    pub y: f64,
    /// Animation start offset in seconds.
    pub delay: f64,
    /// Seconds per pulse.
    pub duration: f64,
}

/// Draws the fixed set of [`LEAF_COUNT`] leaves from `rng`.
pub fn scatter_leaves<R: Rng + ?Sized>(rng: &mut R) -> Vec<Leaf> {
    (0..LEAF_COUNT)
        .map(|_| Leaf {
            size: rng.gen_range(15.0..35.0),
            x: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..5.0),
            rotate: rng.gen_range(0.0..360.0),
            duration: rng.gen_range(6.0..10.0),
        })
        .collect()
}

/// Draws the fixed set of [`STAR_COUNT`] stars from `rng`.
pub fn scatter_stars<R: Rng + ?Sized>(rng: &mut R) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|_| Star {
            size: rng.gen_range(3.0..9.0),
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..5.0),
            duration: rng.gen_range(3.0..5.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn counts_are_fixed() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(scatter_leaves(&mut rng).len(), LEAF_COUNT);
        assert_eq!(scatter_stars(&mut rng).len(), STAR_COUNT);
    }

    #[test]
    fn leaf_parameters_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for leaf in scatter_leaves(&mut rng) {
            assert!((15.0..35.0).contains(&leaf.size));
            assert!((0.0..100.0).contains(&leaf.x));
            assert!((0.0..5.0).contains(&leaf.delay));
            assert!((0.0..360.0).contains(&leaf.rotate));
            assert!((6.0..10.0).contains(&leaf.duration));
        }
    }

    #[test]
    fn star_parameters_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for star in scatter_stars(&mut rng) {
            assert!((3.0..9.0).contains(&star.size));
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((0.0..5.0).contains(&star.delay));
            assert!((3.0..5.0).contains(&star.duration));
        }
    }

    #[test]
    fn scatter_is_reproducible_from_a_seed() {
        let mut a = SmallRng::seed_from_u64(1234);
        let mut b = SmallRng::seed_from_u64(1234);
        assert_eq!(scatter_leaves(&mut a), scatter_leaves(&mut b));
        assert_eq!(scatter_stars(&mut a), scatter_stars(&mut b));
    }
}
