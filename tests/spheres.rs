use glam::Vec3;
use gpu_particles::scene::spheres::{Spheres, CENTER_EXTENT, MIN_RADIUS, RADIUS_RANGE, SPHERE_COUNT};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;

#[test]
fn random_spheres_stay_in_range() {
    let mut rng = common::seeded_rng();

    for _ in 0..100 {
        let spheres = Spheres::random(&mut rng);
        assert_eq!(spheres.len(), SPHERE_COUNT);

        for (center, radius) in spheres.iter() {
            assert!((MIN_RADIUS..MIN_RADIUS + RADIUS_RANGE).contains(&radius), "radius {radius}");
            assert!((-CENTER_EXTENT..CENTER_EXTENT).contains(&center.x), "center {center}");
            assert!((-CENTER_EXTENT..CENTER_EXTENT).contains(&center.z), "center {center}");
            assert_eq!(center.y, 0.0);
        }
    }
}

#[test]
fn same_seed_same_spheres() {
    let first = Spheres::random(&mut StdRng::seed_from_u64(7));
    let second = Spheres::random(&mut StdRng::seed_from_u64(7));
    let other = Spheres::random(&mut StdRng::seed_from_u64(8));

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn uniform_packs_center_and_radius() {
    let mut spheres = common::distant_spheres();
    spheres.centers[3] = Vec3::new(10.0, 0.0, -20.0);
    spheres.radii[3] = 125.0;

    let uniform = spheres.to_uniform();

    assert_eq!(uniform.spheres.len(), SPHERE_COUNT);
    assert_eq!(uniform.spheres[3].truncate(), Vec3::new(10.0, 0.0, -20.0));
    assert_eq!(uniform.spheres[3].w, 125.0);
    assert_eq!(uniform.spheres[0].truncate(), spheres.centers[0]);
    assert_eq!(uniform.spheres[0].w, spheres.radii[0]);
    assert_eq!(std::mem::size_of_val(&uniform), SPHERE_COUNT * 16);
}
