//! Lyon-based tessellation of flat orbital geometry.
//!
//! Rings (orbit paths) and sight-lines live in horizontal planes, so they are
//! tessellated in 2D over the (x, z) coordinates and lifted back into 3D.
//! The output is a flat triangle-list vertex buffer read by the host renderer.
//!
//! # Usage
//!
//! ```ignore
//! vectors.fill_ring(Vec3::ZERO, 198.0, 202.0, Color::WHITE);
//! vectors.stroke_segment(earth, marker, 1.0, Color::GREEN);
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use lyon::math::point;
use lyon::path::{Path, Winding};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};
use crate::components::mesh::Color;

/// Per-vertex data for tessellated geometry.
/// 7 floats = 28 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 7;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 28
}

/// Tessellation tolerance in world units.
const TOLERANCE: f32 = 0.5;

/// Vertex constructor for filled shapes lying in the plane `y = plane_y`.
struct FillVertexCtor {
    color: Color,
    plane_y: f32,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex {
            x: p.x,
            y: self.plane_y,
            z: p.y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: 1.0,
        }
    }
}

/// Vertex constructor for stroked segments; height is interpolated along the
/// segment using the stroke advancement.
struct StrokeVertexCtor {
    color: Color,
    from_y: f32,
    to_y: f32,
    length: f32,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        let t = if self.length > 0.0 {
            (vertex.advancement() / self.length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        VectorVertex {
            x: p.x,
            y: self.from_y + (self.to_y - self.from_y) * t,
            z: p.y,
            r: self.color.r,
            g: self.color.g,
            b: self.color.b,
            a: 1.0,
        }
    }
}

/// Tessellation state for rings and lines.
///
/// Holds lyon tessellators and the output vertex buffer.
/// Cleared each frame and repopulated from the scene.
pub struct VectorState {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
}

impl VectorState {
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    pub fn with_capacity(max_vertices: usize) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(max_vertices * VectorVertex::FLOATS),
        }
    }

    /// Clear the vertex buffer. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// Raw pointer to the flat float buffer.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Flat float view of the buffer.
    pub fn vertices(&self) -> &[f32] {
        &self.buffer
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.z, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    /// Tessellate a flat annulus around `center` in its horizontal plane.
    pub fn fill_ring(&mut self, center: Vec3, inner: f32, outer: f32, color: Color) {
        if outer <= 0.0 || inner >= outer {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.z), outer, Winding::Positive);
        if inner > 0.0 {
            builder.add_circle(point(center.x, center.z), inner, Winding::Negative);
        }
        let path = builder.build();

        let result = self.fill_tess.tessellate_path(
            &path,
            &FillOptions::tolerance(TOLERANCE),
            &mut BuffersBuilder::new(
                &mut self.geometry,
                FillVertexCtor { color, plane_y: center.y },
            ),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }

    /// Tessellate a stroked segment between two world points.
    pub fn stroke_segment(&mut self, from: Vec3, to: Vec3, width: f32, color: Color) {
        let length = ((to.x - from.x).powi(2) + (to.z - from.z).powi(2)).sqrt();
        if length <= f32::EPSILON || width <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(from.x, from.z));
        builder.line_to(point(to.x, to.z));
        builder.end(false);
        let path = builder.build();

        let result = self.stroke_tess.tessellate_path(
            &path,
            &StrokeOptions::tolerance(TOLERANCE).with_line_width(width),
            &mut BuffersBuilder::new(
                &mut self.geometry,
                StrokeVertexCtor { color, from_y: from.y, to_y: to.y, length },
            ),
        );

        if result.is_ok() {
            self.flush_geometry();
        } else {
            self.geometry.vertices.clear();
            self.geometry.indices.clear();
        }
    }
}

impl Default for VectorState {
    fn default() -> Self {
        Self::new()
    }
}
