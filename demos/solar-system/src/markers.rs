/// Reference points for the annotated view.
///
/// Inner bodies get their two conjunctions and two greatest elongations in
/// the sun frame. Outer bodies get opposition, conjunction and two
/// quadratures placed around Earth's reference position.

use glam::Vec3;

use crate::bodies::{CelestialBody, Classification};

const INNER_FONT_SIZE: f32 = 48.0;
const OUTER_FONT_SIZE: f32 = 64.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    InferiorConjunction,
    SuperiorConjunction,
    GreatestEasternElongation,
    GreatestWesternElongation,
    Opposition,
    Conjunction,
    EasternQuadrature,
    WesternQuadrature,
}

impl MarkerRole {
    pub fn label(self) -> &'static str {
        match self {
            MarkerRole::InferiorConjunction => "내합",
            MarkerRole::SuperiorConjunction => "외합",
            MarkerRole::GreatestEasternElongation => "동방 최대 이각",
            MarkerRole::GreatestWesternElongation => "서방 최대 이각",
            MarkerRole::Opposition => "충",
            MarkerRole::Conjunction => "합",
            MarkerRole::EasternQuadrature => "동구",
            MarkerRole::WesternQuadrature => "서구",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub role: MarkerRole,
    pub label: &'static str,
    pub position: Vec3,
    pub font_size: f32,
}

impl Marker {
    fn new(role: MarkerRole, position: Vec3, font_size: f32) -> Self {
        Self {
            role,
            label: role.label(),
            position,
            font_size,
        }
    }
}

/// Marker geometry for one focused body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerSet {
    Inner { distance: f32, max_elongation_deg: f32 },
    Outer { distance: f32, earth: Vec3, quadrature_scale: f32 },
}

impl MarkerSet {
    /// Geometry for `body` seen from Earth at `earth`. Earth itself has none.
    pub fn for_body(body: &CelestialBody, earth: Vec3, quadrature_scale: f32) -> Option<Self> {
        if body.is_earth() {
            return None;
        }
        match body.classification {
            Classification::Inner => Some(MarkerSet::Inner {
                distance: body.distance,
                max_elongation_deg: body.max_elongation?,
            }),
            Classification::Outer => Some(MarkerSet::Outer {
                distance: body.distance,
                earth,
                quadrature_scale,
            }),
        }
    }

    pub fn markers(&self) -> [Marker; 4] {
        match *self {
            MarkerSet::Inner { distance: d, max_elongation_deg } => {
                let elongation = |deg: f32| {
                    let theta = deg.to_radians();
                    Vec3::new(d * theta.cos(), 0.0, d * theta.sin())
                };
                [
                    Marker::new(MarkerRole::InferiorConjunction, Vec3::new(d, 0.0, 0.0), INNER_FONT_SIZE),
                    Marker::new(MarkerRole::SuperiorConjunction, Vec3::new(-d, 0.0, 0.0), INNER_FONT_SIZE),
                    Marker::new(
                        MarkerRole::GreatestEasternElongation,
                        elongation(-max_elongation_deg),
                        INNER_FONT_SIZE,
                    ),
                    Marker::new(
                        MarkerRole::GreatestWesternElongation,
                        elongation(max_elongation_deg),
                        INNER_FONT_SIZE,
                    ),
                ]
            }
            MarkerSet::Outer { distance: d, earth, quadrature_scale } => {
                let offset = d * quadrature_scale;
                [
                    Marker::new(MarkerRole::Opposition, Vec3::new(-d, 0.0, 0.0), OUTER_FONT_SIZE),
                    Marker::new(MarkerRole::Conjunction, Vec3::new(d, 0.0, 0.0), OUTER_FONT_SIZE),
                    Marker::new(
                        MarkerRole::EasternQuadrature,
                        Vec3::new(earth.x, 0.0, earth.z + offset),
                        OUTER_FONT_SIZE,
                    ),
                    Marker::new(
                        MarkerRole::WesternQuadrature,
                        Vec3::new(earth.x, 0.0, earth.z - offset),
                        OUTER_FONT_SIZE,
                    ),
                ]
            }
        }
    }
}

/// Segments from Earth to each marker.
pub fn sight_lines(earth: Vec3, markers: &[Marker; 4]) -> [(Vec3, Vec3); 4] {
    markers.map(|m| (earth, m.position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{default_bodies, BodyTable};
    use crate::orbit::pinned;

    fn close(a: Vec3, b: Vec3, tol: f32) -> bool {
        (a - b).abs().max_element() < tol
    }

    fn set_for(name: &str) -> MarkerSet {
        let table = BodyTable::new(default_bodies()).unwrap();
        let earth = pinned(table.earth());
        MarkerSet::for_body(table.get(name).unwrap(), earth, 0.85).unwrap()
    }

    #[test]
    fn mercury_eastern_elongation() {
        let m = set_for("Mercury").markers();
        assert_eq!(m[2].role, MarkerRole::GreatestEasternElongation);
        assert!(close(m[2].position, Vec3::new(88.28, 0.0, -46.94), 0.02), "{:?}", m[2].position);
        assert!(close(m[3].position, Vec3::new(88.28, 0.0, 46.94), 0.02));
    }

    #[test]
    fn inner_conjunctions_are_antipodal() {
        for name in ["Mercury", "Venus"] {
            let m = set_for(name).markers();
            assert_eq!(m[0].position, -m[1].position);
            assert_eq!(m[0].label, "내합");
            assert_eq!(m[1].label, "외합");
        }
    }

    #[test]
    fn inner_markers_are_distinct() {
        let m = set_for("Venus").markers();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert!((m[i].position - m[j].position).length() > 1.0);
            }
        }
    }

    #[test]
    fn degenerate_elongation_collapses_onto_conjunctions() {
        let zero = MarkerSet::Inner { distance: 100.0, max_elongation_deg: 0.0 }.markers();
        assert!(close(zero[2].position, zero[0].position, 1e-4));
        assert!(close(zero[3].position, zero[0].position, 1e-4));

        let half = MarkerSet::Inner { distance: 100.0, max_elongation_deg: 180.0 }.markers();
        assert!(close(half[2].position, half[1].position, 1e-3));
    }

    #[test]
    fn outer_markers_symmetric() {
        let m = set_for("Jupiter").markers();
        assert_eq!(m[0].position, -m[1].position);
        let earth_z = 0.0;
        assert_eq!(m[2].position.x, 200.0);
        assert_eq!(m[2].position.z - earth_z, -(m[3].position.z - earth_z));
        assert!((m[2].position.z - 340.0).abs() < 1e-3);
        assert_eq!(m[2].label, "동구");
        assert_eq!(m[3].label, "서구");
    }

    #[test]
    fn quadratures_follow_earth() {
        let earth = Vec3::new(10.0, 0.0, 30.0);
        let set = MarkerSet::Outer { distance: 100.0, earth, quadrature_scale: 0.5 };
        let m = set.markers();
        assert_eq!(m[2].position, Vec3::new(10.0, 0.0, 80.0));
        assert_eq!(m[3].position, Vec3::new(10.0, 0.0, -20.0));
    }

    #[test]
    fn font_sizes_by_class() {
        assert!(set_for("Mercury").markers().iter().all(|m| m.font_size == 48.0));
        assert!(set_for("Mars").markers().iter().all(|m| m.font_size == 64.0));
    }

    #[test]
    fn earth_has_no_markers() {
        let table = BodyTable::new(default_bodies()).unwrap();
        assert!(MarkerSet::for_body(table.earth(), Vec3::ZERO, 0.85).is_none());
    }

    #[test]
    fn sight_lines_start_at_earth() {
        let earth = Vec3::new(200.0, 0.0, 0.0);
        let m = set_for("Mars").markers();
        let lines = sight_lines(earth, &m);
        for (line, marker) in lines.iter().zip(m.iter()) {
            assert_eq!(line.0, earth);
            assert_eq!(line.1, marker.position);
        }
    }
}
