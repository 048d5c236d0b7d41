use glam::{Vec3, Vec4};
use rand::Rng;

/// Number of sphere obstacles.
/// The value must match `SPHERE_COUNT` in the integration shader.
pub const SPHERE_COUNT: usize = 8;

pub const MIN_RADIUS: f32 = 100.0;
pub const RADIUS_RANGE: f32 = 50.0;
/// Centers are spread over `[-CENTER_EXTENT, CENTER_EXTENT)` on x and z.
pub const CENTER_EXTENT: f32 = 700.0;

/// Sphere obstacles. Generated once at start-up and never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Spheres {
    pub radii: [f32; SPHERE_COUNT],
    pub centers: [Vec3; SPHERE_COUNT],
}

/// Sphere data as the shaders see it: `xyz` center, `w` radius.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniform {
    pub spheres: [Vec4; SPHERE_COUNT],
}

impl Spheres {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut radii = [0.0; SPHERE_COUNT];
        let mut centers = [Vec3::ZERO; SPHERE_COUNT];

        for (radius, center) in radii.iter_mut().zip(centers.iter_mut()) {
            *radius = MIN_RADIUS + rng.random_range(0.0..RADIUS_RANGE);
            *center = Vec3::new(
                rng.random_range(-CENTER_EXTENT..CENTER_EXTENT),
                0.0,
                rng.random_range(-CENTER_EXTENT..CENTER_EXTENT),
            );
        }

        Self { radii, centers }
    }

    pub fn len(&self) -> usize {
        SPHERE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        SPHERE_COUNT == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.centers.iter().copied().zip(self.radii.iter().copied())
    }

    pub fn to_uniform(&self) -> SphereUniform {
        let mut spheres = [Vec4::ZERO; SPHERE_COUNT];
        for (packed, (center, radius)) in spheres.iter_mut().zip(self.iter()) {
            *packed = center.extend(radius);
        }
        SphereUniform { spheres }
    }
}
