use glam::Vec3;
use crate::systems::rng::Rng;

/// Scatter `count` stars uniformly through an axis-aligned cube of side
/// `spread` centered on the origin. Same seed, same sky.
pub fn generate_starfield(count: usize, spread: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let x = (rng.next_f32() - 0.5) * spread;
            let y = (rng.next_f32() - 0.5) * spread;
            let z = (rng.next_f32() - 0.5) * spread;
            Vec3::new(x, y, z)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_the_cube() {
        let stars = generate_starfield(10_000, 16_000.0, 1);
        assert_eq!(stars.len(), 10_000);
        for s in &stars {
            assert!(s.abs().max_element() <= 8_000.0);
        }
    }

    #[test]
    fn same_seed_same_sky() {
        assert_eq!(generate_starfield(50, 100.0, 9), generate_starfield(50, 100.0, 9));
        assert_ne!(generate_starfield(50, 100.0, 9), generate_starfield(50, 100.0, 10));
    }
}
