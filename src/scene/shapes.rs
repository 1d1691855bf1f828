//! Procedural test meshes
//!
//! All shapes are wound counter-clockwise as seen from the face's outside,
//! which is the winding the triangle fill accepts. Normals point inward:
//! the shader lights fragments whose view-space normal runs away from the
//! viewer, matching the light that shines along -z from the camera.

use glam::Vec3;

use super::Mesh;

/// Unit-ish cube centered on the origin, as a 36-vertex triangle soup.
pub fn cube() -> Mesh {
    // (outward axis, four corners counter-clockwise from outside)
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::Z,
            [
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(1.0, -1.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(-1.0, 1.0, 1.0),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(-1.0, -1.0, -1.0),
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(1.0, 1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-1.0, 1.0, -1.0),
                Vec3::new(-1.0, 1.0, 1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(1.0, 1.0, -1.0),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-1.0, -1.0, -1.0),
                Vec3::new(1.0, -1.0, -1.0),
                Vec3::new(1.0, -1.0, 1.0),
                Vec3::new(-1.0, -1.0, 1.0),
            ],
        ),
        (
            Vec3::X,
            [
                Vec3::new(1.0, -1.0, -1.0),
                Vec3::new(1.0, 1.0, -1.0),
                Vec3::new(1.0, 1.0, 1.0),
                Vec3::new(1.0, -1.0, 1.0),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-1.0, -1.0, -1.0),
                Vec3::new(-1.0, -1.0, 1.0),
                Vec3::new(-1.0, 1.0, 1.0),
                Vec3::new(-1.0, 1.0, -1.0),
            ],
        ),
    ];

    let mut positions = Vec::with_capacity(36);
    let mut normals = Vec::with_capacity(36);
    for (outward, corners) in faces {
        let normal = -outward;
        for tri in [[0, 1, 2], [0, 2, 3]] {
            for i in tri {
                positions.push(corners[i]);
                normals.push(normal);
            }
        }
    }

    Mesh::new(positions, normals).unwrap_or_else(|_| unreachable!("cube soup is well formed"))
}

/// One camera-facing triangle in the z=0 plane.
pub fn triangle() -> Mesh {
    let positions = vec![
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let normals = vec![Vec3::new(0.0, 0.0, -1.0); 3];
    Mesh::new(positions, normals).unwrap_or_else(|_| unreachable!("triangle soup is well formed"))
}
