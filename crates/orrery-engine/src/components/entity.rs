use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::mesh::Mesh;

/// Fat Entity: a single struct with an optional mesh.
/// Designed for small scenes (a sun, a few planets, markers and labels).
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Spin about the local Y axis, in radians.
    pub rotation_y: f32,
    /// What to draw (entities without a mesh are invisible).
    pub mesh: Option<Mesh>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            rotation_y: 0.0,
            mesh: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.mesh = Some(mesh);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::Color;

    #[test]
    fn builder_sets_fields() {
        let e = Entity::new(EntityId(7))
            .with_tag("Mars")
            .with_pos(Vec3::new(280.0, 0.0, 0.0))
            .with_mesh(Mesh::sphere(12.0, Color::RED));
        assert_eq!(e.tag, "Mars");
        assert_eq!(e.pos.x, 280.0);
        assert!(e.active);
        assert!(matches!(e.mesh, Some(Mesh::Sphere { .. })));
    }
}
