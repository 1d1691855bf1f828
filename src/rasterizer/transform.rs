//! Per-frame matrix construction and vertex projection

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Distance of the fixed camera from the origin, along +z.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Model spin rate in radians per time unit.
pub const ROTATION_RATE: f32 = 0.0005;

/// Process-wide camera parameters, set once before the first frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Projection {
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_deg: 35.0,
            aspect: 1.0,
            near: 0.01,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Right-handed perspective matrix with depth mapped to [0, 1].
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }
}

/// All matrices for one frame, derived from a single time value.
#[derive(Debug, Clone, Copy)]
pub struct FrameTransforms {
    pub model: Mat4,
    pub view: Mat4,
    pub proj: Mat4,
    /// Inverse-transpose of the model matrix, for directions
    pub normal: Mat4,
    clip_from_model: Mat4,
}

impl FrameTransforms {
    /// Build the frame's matrices: the model spins about +x and −y at
    /// twice the base rate, the camera sits at `CAMERA_DISTANCE` on +z
    /// looking toward the origin.
    pub fn at(time: f32, projection: &Projection) -> Self {
        let angle = time * ROTATION_RATE;
        let model = Mat4::from_axis_angle(Vec3::X, angle * 2.0)
            * Mat4::from_axis_angle(Vec3::NEG_Y, angle * 2.0);
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, CAMERA_DISTANCE)).inverse();
        let proj = projection.matrix();
        Self {
            model,
            view,
            proj,
            normal: model.inverse().transpose(),
            clip_from_model: proj * view * model,
        }
    }

    /// Project an object-space point to screen space.
    ///
    /// Returns normalized x,y in [0,1] with y growing downward (row order),
    /// and the raw post-divide depth in z. A vertex at or behind the camera
    /// plane makes `w` vanish; the divide is unguarded there, which is a
    /// known limitation of the pipeline (no frustum clipping).
    pub fn project_point(&self, p: Vec3) -> Vec3 {
        let clip = self.clip_from_model * p.extend(1.0);
        let ndc = clip / clip.w;
        Vec3::new((ndc.x + 1.0) * 0.5, (1.0 - ndc.y) * 0.5, ndc.z)
    }

    /// Carry an object-space normal into view orientation.
    ///
    /// The result is deliberately left unnormalized; the triangle fill
    /// divides interpolated normals by triangle area instead.
    pub fn transform_normal(&self, n: Vec3) -> Vec3 {
        (self.normal * n.extend(0.0)).truncate()
    }
}
