//! Orrery configuration: tunables plus the body table, loadable from JSON.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::bodies::{default_bodies, BodyTable, CelestialBody};

/// Errors that make a configuration unusable. The game refuses to start on any of them.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A size, distance or speed that must be positive is not.
    #[error("body `{body}`: {field} must be positive, got {value}")]
    NonPositive {
        body: String,
        field: &'static str,
        value: f64,
    },

    #[error("body table has no Earth")]
    MissingEarth,

    /// Two bodies share a name (this includes a second Earth).
    #[error("body `{0}` is listed more than once")]
    DuplicateBody(String),

    #[error("inner body `{0}` has no max_elongation")]
    MissingElongation(String),

    /// A simulation tunable is zero, negative or not finite.
    #[error("{field} must be positive, got {value}")]
    InvalidStep { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Simulation time added per animation tick.
    pub sim_step: f64,
    /// Radians added to each orbiting sphere's Y rotation per tick.
    pub spin_step: f32,
    /// Length of a retrograde sequence in frames.
    pub retrograde_frames: u32,
    /// Duration of the camera move into a focused view.
    pub focus_move_ms: f32,
    /// Focused camera height as a multiple of the body's orbit distance.
    pub focus_height_factor: f32,
    /// Quadrature marker offset as a fraction of the body's orbit distance.
    pub quadrature_scale: f32,
    pub ring_half_width: f32,
    pub star_count: usize,
    pub star_spread: f32,
    pub star_seed: u64,
    pub overview_camera: [f32; 3],
    /// Overview camera rotation about X, radians.
    pub overview_pitch: f32,
    /// Offset from a marker to its label sprite.
    pub label_offset: [f32; 3],
    pub bodies: Vec<CelestialBody>,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            sim_step: 0.01,
            spin_step: 0.05,
            retrograde_frames: 200,
            focus_move_ms: 2000.0,
            focus_height_factor: 1.5,
            quadrature_scale: 0.85,
            ring_half_width: 2.0,
            star_count: 10_000,
            star_spread: 16_000.0,
            star_seed: 0x5eed_0f_57a2,
            overview_camera: [0.0, 400.0, 1000.0],
            overview_pitch: -0.6,
            label_offset: [20.0, 10.0, 0.0],
            bodies: default_bodies(),
        }
    }
}

impl OrreryConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the tunables. The body table is checked by `body_table`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("sim_step", self.sim_step)?;
        positive("retrograde_frames", self.retrograde_frames as f64)?;
        positive("focus_height_factor", self.focus_height_factor as f64)?;
        positive("quadrature_scale", self.quadrature_scale as f64)?;
        positive("spin_step", self.spin_step as f64)?;
        positive("ring_half_width", self.ring_half_width as f64)?;
        positive("star_spread", self.star_spread as f64)?;
        if !(self.focus_move_ms >= 0.0 && self.focus_move_ms.is_finite()) {
            return Err(ConfigError::InvalidStep {
                field: "focus_move_ms",
                value: self.focus_move_ms as f64,
            });
        }
        Ok(())
    }

    pub fn body_table(&self) -> Result<BodyTable, ConfigError> {
        BodyTable::new(self.bodies.clone())
    }

    pub fn overview_camera(&self) -> Vec3 {
        Vec3::from_array(self.overview_camera)
    }

    pub fn label_offset(&self) -> Vec3 {
        Vec3::from_array(self.label_offset)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidStep { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_built_in_scene() {
        let c = OrreryConfig::default();
        assert_eq!(c.sim_step, 0.01);
        assert_eq!(c.retrograde_frames, 200);
        assert_eq!(c.overview_camera(), Vec3::new(0.0, 400.0, 1000.0));
        assert_eq!(c.bodies.len(), 8);
        c.validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = OrreryConfig::from_json(r#"{ "sim_step": 0.02, "star_count": 50 }"#).unwrap();
        assert_eq!(c.sim_step, 0.02);
        assert_eq!(c.star_count, 50);
        assert_eq!(c.retrograde_frames, 200);
        assert_eq!(c.bodies.len(), 8);
    }

    #[test]
    fn body_table_from_json() {
        let json = r#"{
            "bodies": [
                { "name": "Earth", "radius": 16, "distance": 200, "speed": 1.0,
                  "classification": "inner", "color": 255 },
                { "name": "Mars", "radius": 12, "distance": 280, "speed": 1.881,
                  "classification": "outer", "color": 16711680 }
            ]
        }"#;
        let table = OrreryConfig::from_json(json).unwrap().body_table().unwrap();
        assert_eq!(table.names(), vec!["Earth".to_string(), "Mars".to_string()]);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            OrreryConfig::from_json("{ sim_step: "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn zero_step_rejected() {
        match OrreryConfig::from_json(r#"{ "sim_step": 0.0 }"#) {
            Err(ConfigError::InvalidStep { field, .. }) => assert_eq!(field, "sim_step"),
            other => panic!("expected InvalidStep, got {:?}", other),
        }
    }

    #[test]
    fn zero_frame_budget_rejected() {
        assert!(matches!(
            OrreryConfig::from_json(r#"{ "retrograde_frames": 0 }"#),
            Err(ConfigError::InvalidStep { field: "retrograde_frames", .. })
        ));
    }

    #[test]
    fn non_positive_geometry_rejected() {
        for (json, expected) in [
            (r#"{ "quadrature_scale": -0.85 }"#, "quadrature_scale"),
            (r#"{ "spin_step": 0.0 }"#, "spin_step"),
            (r#"{ "ring_half_width": -2.0 }"#, "ring_half_width"),
            (r#"{ "star_spread": 0.0 }"#, "star_spread"),
        ] {
            match OrreryConfig::from_json(json) {
                Err(ConfigError::InvalidStep { field, .. }) => assert_eq!(field, expected),
                other => panic!("{}: expected InvalidStep, got {:?}", json, other),
            }
        }
    }

    #[test]
    fn error_messages_name_the_body() {
        let err = ConfigError::NonPositive {
            body: "Mars".into(),
            field: "speed",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "body `Mars`: speed must be positive, got -1");
    }
}
