use crate::components::entity::Entity;
use crate::components::mesh::Mesh;
use crate::renderer::instance::{LabelInstance, RenderBuffer, RenderInstance};
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Build the instance buffer from a set of entities.
/// Spheres become instances, labels become sprites, starfields are flattened.
/// Rings and lines are left to `build_vector_buffer`.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        match &entity.mesh {
            Some(Mesh::Sphere { radius, color }) => buffer.push(RenderInstance {
                x: entity.pos.x,
                y: entity.pos.y,
                z: entity.pos.z,
                radius: *radius,
                r: color.r,
                g: color.g,
                b: color.b,
                rotation_y: entity.rotation_y,
            }),
            Some(Mesh::Label { text, font_size }) => {
                let label = LabelInstance {
                    x: entity.pos.x,
                    y: entity.pos.y,
                    z: entity.pos.z,
                    // Sprite is twice as wide as it is tall.
                    width: font_size * 2.0,
                    height: *font_size,
                    font_size: *font_size,
                    ..Default::default()
                };
                buffer.push_label(label, text);
            }
            Some(Mesh::Starfield { points, .. }) => {
                for p in points {
                    buffer.stars.extend_from_slice(&[p.x, p.y, p.z]);
                }
            }
            Some(Mesh::Ring { .. }) | Some(Mesh::Line { .. }) | None => {}
        }
    }
}

/// Tessellate every ring and line in the scene into the vector buffer.
#[cfg(feature = "vectors")]
pub fn build_vector_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    vectors: &mut VectorState,
    line_width: f32,
) {
    vectors.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        match &entity.mesh {
            Some(Mesh::Ring { inner, outer, color }) => {
                vectors.fill_ring(entity.pos, *inner, *outer, *color);
            }
            Some(Mesh::Line { from, to, color }) => {
                vectors.stroke_segment(*from, *to, line_width, *color);
            }
            _ => {}
        }
    }
}
