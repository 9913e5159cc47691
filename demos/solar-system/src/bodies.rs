/// Body table: the sun, the eight planets, and the rules a table must obey.
///
/// Sizes and distances are scene units chosen for readability, not physical
/// values. Speeds are orbital periods relative to Earth's.

use serde::{Deserialize, Serialize};
use orrery_engine::Color;

use crate::config::ConfigError;

/// Name of the body every relative computation is anchored to.
pub const EARTH: &str = "Earth";

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_RADIUS: f32 = 30.0;
pub const SUN_COLOR: Color = Color::from_hex(0xffff00);

// ── Planets ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Orbits inside Earth's orbit: shows conjunctions and elongations.
    Inner,
    /// Orbits outside Earth's orbit: shows opposition, conjunction and quadratures.
    Outer,
}

/// One orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub name: String,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Orbit radius around the sun.
    pub distance: f32,
    /// Simulation time for one full revolution (Earth = 1.0).
    pub speed: f64,
    pub classification: Classification,
    /// Greatest elongation in degrees. Inner bodies other than Earth need one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_elongation: Option<f32>,
    /// Sphere color as 0xRRGGBB.
    pub color: u32,
}

impl CelestialBody {
    pub fn is_earth(&self) -> bool {
        self.name == EARTH
    }

    pub fn color(&self) -> Color {
        Color::from_hex(self.color)
    }
}

fn body(
    name: &str,
    radius: f32,
    distance: f32,
    speed: f64,
    classification: Classification,
    max_elongation: Option<f32>,
    color: u32,
) -> CelestialBody {
    CelestialBody {
        name: name.to_string(),
        radius,
        distance,
        speed,
        classification,
        max_elongation,
        color,
    }
}

/// The built-in table, innermost first.
pub fn default_bodies() -> Vec<CelestialBody> {
    use Classification::{Inner, Outer};
    vec![
        body("Mercury", 10.0, 100.0, 0.241, Inner, Some(28.0), 0xaaaaaa),
        body("Venus", 14.0, 150.0, 0.615, Inner, Some(47.0), 0xffa500),
        body(EARTH, 16.0, 200.0, 1.0, Inner, None, 0x0000ff),
        body("Mars", 12.0, 280.0, 1.881, Outer, None, 0xff0000),
        body("Jupiter", 28.0, 400.0, 11.86, Outer, None, 0xffd700),
        body("Saturn", 24.0, 520.0, 29.45, Outer, None, 0xf4a460),
        body("Uranus", 22.0, 600.0, 84.01, Outer, None, 0x00ffff),
        body("Neptune", 22.0, 720.0, 164.8, Outer, None, 0x0000ff),
    ]
}

/// A validated body table. Holding one guarantees exactly one Earth,
/// unique names, positive sizes, distances and speeds, and an elongation
/// angle on every inner body except Earth.
#[derive(Debug, Clone)]
pub struct BodyTable {
    bodies: Vec<CelestialBody>,
    earth: usize,
}

impl BodyTable {
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, ConfigError> {
        for (i, b) in bodies.iter().enumerate() {
            check_positive(b, "radius", b.radius as f64)?;
            check_positive(b, "distance", b.distance as f64)?;
            check_positive(b, "speed", b.speed)?;

            if bodies[..i].iter().any(|other| other.name == b.name) {
                return Err(ConfigError::DuplicateBody(b.name.clone()));
            }
            if b.classification == Classification::Inner && !b.is_earth() {
                match b.max_elongation {
                    Some(angle) if angle.is_finite() => {}
                    _ => return Err(ConfigError::MissingElongation(b.name.clone())),
                }
            }
        }

        let earth = bodies
            .iter()
            .position(CelestialBody::is_earth)
            .ok_or(ConfigError::MissingEarth)?;

        Ok(Self { bodies, earth })
    }

    pub fn earth(&self) -> &CelestialBody {
        &self.bodies[self.earth]
    }

    pub fn earth_index(&self) -> usize {
        self.earth
    }

    /// Look a body up by name, returning its table index too.
    pub fn find(&self, name: &str) -> Option<(usize, &CelestialBody)> {
        self.bodies.iter().enumerate().find(|(_, b)| b.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn get_index(&self, index: usize) -> Option<&CelestialBody> {
        self.bodies.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.bodies.iter().map(|b| b.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn check_positive(body: &CelestialBody, field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            body: body.name.clone(),
            field,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        let table = BodyTable::new(default_bodies()).unwrap();
        assert_eq!(table.len(), 8);
        assert_eq!(table.earth().distance, 200.0);
        assert_eq!(table.index_of("Mars"), Some(3));
        assert_eq!(table.get("Venus").unwrap().max_elongation, Some(47.0));
    }

    #[test]
    fn zero_speed_rejected() {
        let mut bodies = default_bodies();
        bodies[3].speed = 0.0;
        match BodyTable::new(bodies) {
            Err(ConfigError::NonPositive { body, field, .. }) => {
                assert_eq!(body, "Mars");
                assert_eq!(field, "speed");
            }
            other => panic!("expected NonPositive, got {:?}", other),
        }
    }

    #[test]
    fn negative_distance_rejected() {
        let mut bodies = default_bodies();
        bodies[0].distance = -100.0;
        assert!(matches!(
            BodyTable::new(bodies),
            Err(ConfigError::NonPositive { field: "distance", .. })
        ));
    }

    #[test]
    fn nan_radius_rejected() {
        let mut bodies = default_bodies();
        bodies[1].radius = f32::NAN;
        assert!(matches!(
            BodyTable::new(bodies),
            Err(ConfigError::NonPositive { field: "radius", .. })
        ));
    }

    #[test]
    fn missing_earth_rejected() {
        let bodies: Vec<_> = default_bodies().into_iter().filter(|b| !b.is_earth()).collect();
        assert!(matches!(BodyTable::new(bodies), Err(ConfigError::MissingEarth)));
    }

    #[test]
    fn second_earth_rejected() {
        let mut bodies = default_bodies();
        bodies.push(bodies[2].clone());
        match BodyTable::new(bodies) {
            Err(ConfigError::DuplicateBody(name)) => assert_eq!(name, EARTH),
            other => panic!("expected DuplicateBody, got {:?}", other),
        }
    }

    #[test]
    fn inner_body_needs_elongation() {
        let mut bodies = default_bodies();
        bodies[0].max_elongation = None;
        match BodyTable::new(bodies) {
            Err(ConfigError::MissingElongation(name)) => assert_eq!(name, "Mercury"),
            other => panic!("expected MissingElongation, got {:?}", other),
        }
    }

    #[test]
    fn colors_decode() {
        let table = BodyTable::new(default_bodies()).unwrap();
        let mars = table.get("Mars").unwrap().color();
        assert_eq!((mars.r, mars.g, mars.b), (1.0, 0.0, 0.0));
    }
}
