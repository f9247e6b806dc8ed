use rand::Rng;

use super::vector::Vec3;

/// Axis-aligned box, used as the particle spawn volume.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec3 {
        [
            (self.min[0] + self.max[0]) * 0.5,
            (self.min[1] + self.max[1]) * 0.5,
            (self.min[2] + self.max[2]) * 0.5,
        ]
    }

    pub fn volume(&self) -> f32 {
        (0..3).map(|i| self.max[i] - self.min[i]).product()
    }

    pub fn contains(&self, p: &Vec3) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }

    /// Uniformly distributed point inside the box.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let mut point = [0.0; 3];
        for (i, p) in point.iter_mut().enumerate() {
            *p = self.min[i] + rng.random::<f32>() * (self.max[i] - self.min[i]);
        }
        point
    }
}
