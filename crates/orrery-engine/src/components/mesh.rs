use glam::Vec3;

/// Linear RGB color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Renderable shape attached to an entity.
///
/// These are the primitives the host renderer knows how to draw. Spheres and
/// labels become per-instance records, rings and lines are tessellated into
/// triangles, starfields are uploaded as raw points.
#[derive(Debug, Clone, PartialEq)]
pub enum Mesh {
    /// Solid sphere centered on the entity position.
    Sphere { radius: f32, color: Color },
    /// Flat annulus lying in the XZ plane, centered on the entity position.
    Ring { inner: f32, outer: f32, color: Color },
    /// Straight segment between two world points. The entity position is ignored.
    Line { from: Vec3, to: Vec3, color: Color },
    /// Text sprite rasterized by the host at the entity position.
    Label { text: String, font_size: f32 },
    /// Point cloud in world space.
    Starfield { points: Vec<Vec3>, color: Color },
}

impl Mesh {
    pub fn sphere(radius: f32, color: Color) -> Self {
        Mesh::Sphere { radius, color }
    }

    /// Orbit-style ring of the given radius and half width.
    pub fn ring(radius: f32, half_width: f32, color: Color) -> Self {
        Mesh::Ring {
            inner: (radius - half_width).max(0.0),
            outer: radius + half_width,
            color,
        }
    }

    pub fn line(from: Vec3, to: Vec3, color: Color) -> Self {
        Mesh::Line { from, to, color }
    }

    pub fn label(text: impl Into<String>, font_size: f32) -> Self {
        Mesh::Label {
            text: text.into(),
            font_size,
        }
    }

    pub fn starfield(points: Vec<Vec3>, color: Color) -> Self {
        Mesh::Starfield { points, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_unpacks_channels() {
        let c = Color::from_hex(0xffa500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 165.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn ring_spans_radius_plus_minus_half_width() {
        match Mesh::ring(200.0, 2.0, Color::WHITE) {
            Mesh::Ring { inner, outer, .. } => {
                assert_eq!(inner, 198.0);
                assert_eq!(outer, 202.0);
            }
            other => panic!("expected ring, got {:?}", other),
        }
    }

    #[test]
    fn ring_inner_radius_never_negative() {
        match Mesh::ring(1.0, 2.0, Color::WHITE) {
            Mesh::Ring { inner, .. } => assert_eq!(inner, 0.0),
            other => panic!("expected ring, got {:?}", other),
        }
    }
}
