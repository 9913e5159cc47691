use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Quat, Vec3};

/// Perspective camera for 3D rendering.
/// Looks down its local -Z axis, Y-up, right-handed.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation in world space.
    pub orientation: Quat,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Viewport width / height.
    pub aspect: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// World position (w unused).
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Camera3D {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            fov_y_deg,
            aspect,
            near,
            far,
        }
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Tilt the camera about its X axis, discarding any previous orientation.
    /// Negative pitch looks downward.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.orientation = Quat::from_rotation_x(pitch);
    }

    /// Aim the camera at a world-space point, keeping world Y as up.
    ///
    /// When the view direction is parallel to Y (straight down onto the
    /// orbital plane) the direction is nudged slightly along Z so the basis
    /// stays well defined.
    pub fn look_at(&mut self, target: Vec3) {
        let mut back = self.position - target;
        if back.length_squared() < 1e-12 {
            return;
        }
        back = back.normalize();

        let up = Vec3::Y;
        if up.cross(back).length_squared() < 1e-12 {
            back.z += 1e-4;
            back = back.normalize();
        }
        let right = up.cross(back).normalize();
        let true_up = back.cross(right);
        self.orientation = Quat::from_mat3(&Mat3::from_cols(right, true_up, back));
    }

    /// Unit vector the camera is looking along.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position).inverse()
    }

    /// Perspective projection, depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            position: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(75.0, 16.0 / 9.0, 0.1, 10000.0)
    }
}
