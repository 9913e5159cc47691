//! Renderer trait for native rendering backends.
//!
//! In the browser all drawing happens on the host side, which reads the flat
//! buffers exported by the web bridge. Native hosts implement `Renderer` and
//! receive the same data as a borrowed `FrameData` once per frame.

use super::camera::CameraUniform;
use super::instance::{LabelInstance, RenderInstance};

/// Complete frame data for rendering.
/// Aggregates everything the engine produced for the current scene.
pub struct FrameData<'a> {
    /// Sphere instances (sun, planets, markers).
    pub instances: &'a [RenderInstance],
    /// Label sprites.
    pub labels: &'a [LabelInstance],
    /// Label strings, indexed by `LabelInstance::text_index`.
    pub label_texts: &'a [String],
    /// Star points, flat `x, y, z` triples.
    pub stars: &'a [f32],
    /// Tessellated rings and lines, 7 floats per vertex, triangle list.
    pub vector_vertices: &'a [f32],
    /// Camera matrices for this frame.
    pub camera: CameraUniform,
}

/// Renderer trait for drawing backends.
///
/// # Example Implementation
///
/// ```ignore
/// struct WgpuRenderer { /* device, queue, pipelines */ }
///
/// impl Renderer for WgpuRenderer {
///     fn backend(&self) -> &'static str { "wgpu" }
///     fn draw(&mut self, frame: &FrameData) {
///         // upload instances, encode passes...
///     }
/// }
/// ```
pub trait Renderer {
    /// Backend identifier (e.g., "webgl", "wgpu", "headless").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);
}
