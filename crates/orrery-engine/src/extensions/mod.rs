// extensions/mod.rs
//
// Optional animation helpers layered over the camera and scene.
// Decoupled from Entity/Scene internals; callers own when they tick.

pub mod easing;
pub mod tween;

pub use easing::{Easing, lerp, ease, ease_vec3};
pub use tween::CameraMove;
