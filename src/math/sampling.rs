use rand::Rng;

use super::vector::Vec3;

/// Uniformly distributed point inside the unit ball.
///
/// Radius is the cube root of a uniform sample so density is constant by
/// volume rather than bunched at the center.
pub fn random_point_in_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let lambda: f32 = rng.random();
    let u = rng.random::<f32>() * 2.0 - 1.0;
    let phi = rng.random::<f32>() * 2.0 * std::f32::consts::PI;

    let radius = lambda.cbrt();
    let ring = (1.0 - u * u).sqrt();
    [
        radius * ring * phi.cos(),
        radius * ring * phi.sin(),
        radius * u,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::magnitude;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_points_inside_unit_ball() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = random_point_in_sphere(&mut rng);
            assert!(magnitude(&p) <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_points_fill_the_volume() {
        // Half the volume of a unit ball lies beyond radius 0.5^(1/3) ~ 0.794.
        let mut rng = StdRng::seed_from_u64(3);
        let outer = (0..4000)
            .map(|_| random_point_in_sphere(&mut rng))
            .filter(|p| magnitude(p) > 0.5f32.cbrt())
            .count();
        assert!(outer > 1800 && outer < 2200, "outer shell count {}", outer);
    }
}
