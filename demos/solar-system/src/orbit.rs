/// Uniform circular orbits in the XZ plane.
///
/// Pure functions of simulation time. Angles are computed in f64 so long
/// runs keep their phase; positions drop to f32 at the end.

use std::f64::consts::TAU;

use glam::Vec3;

use crate::bodies::CelestialBody;

/// Orbit angle in radians. A body completes one revolution every `speed` units of time.
pub fn angle(body: &CelestialBody, sim_time: f64) -> f64 {
    TAU * sim_time / body.speed
}

/// Heliocentric position at `sim_time`.
pub fn position(body: &CelestialBody, sim_time: f64) -> Vec3 {
    let a = angle(body, sim_time);
    let d = body.distance as f64;
    Vec3::new((d * a.cos()) as f32, 0.0, (d * a.sin()) as f32)
}

/// Where `body` appears relative to Earth at `sim_time`.
pub fn retrograde_offset(body: &CelestialBody, earth: &CelestialBody, sim_time: f64) -> Vec3 {
    position(body, sim_time) - position(earth, sim_time)
}

/// Reference-phase position (angle zero), used while annotating.
pub fn pinned(body: &CelestialBody) -> Vec3 {
    Vec3::new(body.distance, 0.0, 0.0)
}
