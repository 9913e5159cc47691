// extensions/tween.rs
//
// Camera move: an eased position transition that optionally re-aims the
// camera at a fixed point on every update.
//
// Usage:
//   ctx.animate_camera_to(target, 2000.0, Easing::CubicInOut, Some(Vec3::ZERO));
//   // each frame: ctx.tick_camera(dt);

use glam::Vec3;
use crate::renderer::camera::Camera3D;
use super::easing::{Easing, ease_vec3};

/// A single eased camera position transition.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraMove {
    from: Vec3,
    to: Vec3,
    /// Duration in milliseconds.
    duration_ms: f32,
    /// Elapsed time in milliseconds.
    elapsed_ms: f32,
    easing: Easing,
    /// Point to re-aim at after every position update.
    look_at: Option<Vec3>,
}

impl CameraMove {
    pub fn new(from: Vec3, to: Vec3, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
            look_at: None,
        }
    }

    pub fn with_look_at(mut self, target: Vec3) -> Self {
        self.look_at = Some(target);
        self
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    pub fn target(&self) -> Vec3 {
        self.to
    }

    /// Advance by `dt_ms` and apply to the camera.
    /// Returns `true` while the move is still running.
    pub fn tick(&mut self, dt_ms: f32, camera: &mut Camera3D) -> bool {
        self.elapsed_ms += dt_ms;
        camera.set_position(ease_vec3(self.from, self.to, self.progress(), self.easing));
        if let Some(target) = self.look_at {
            camera.look_at(target);
        }
        !self.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera3D {
        let mut cam = Camera3D::default();
        cam.set_position(Vec3::new(0.0, 400.0, 1000.0));
        cam
    }

    #[test]
    fn linear_move_reaches_halfway() {
        let mut cam = camera();
        let mut mv = CameraMove::new(cam.position, Vec3::new(0.0, 400.0, 0.0), 2000.0, Easing::Linear);
        assert!(mv.tick(1000.0, &mut cam));
        assert!((cam.position.z - 500.0).abs() < 1e-3);
    }

    #[test]
    fn move_lands_exactly_on_target() {
        let mut cam = camera();
        let target = Vec3::new(0.0, 420.0, 0.0);
        let mut mv = CameraMove::new(cam.position, target, 2000.0, Easing::CubicInOut);
        let mut frames = 0;
        while mv.tick(1000.0 / 60.0, &mut cam) {
            frames += 1;
            assert!(frames < 1000, "camera move never completed");
        }
        assert!(cam.position.distance(target) < 1e-3);
        assert!(mv.is_complete());
    }

    #[test]
    fn look_at_reaims_every_update() {
        let mut cam = camera();
        let mut mv = CameraMove::new(cam.position, Vec3::new(0.0, 300.0, 300.0), 1000.0, Easing::Linear)
            .with_look_at(Vec3::ZERO);
        mv.tick(500.0, &mut cam);
        let to_sun = (Vec3::ZERO - cam.position).normalize();
        assert!(cam.forward().dot(to_sun) > 0.999);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let mut cam = camera();
        let mut mv = CameraMove::new(cam.position, Vec3::ZERO, 0.0, Easing::Linear);
        assert!(!mv.tick(0.0, &mut cam));
        assert_eq!(mv.progress(), 1.0);
    }
}
