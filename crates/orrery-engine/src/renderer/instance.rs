use bytemuck::{Pod, Zeroable};

/// Per-sphere render data read by the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Position in world space.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Sphere radius in world units.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Spin about the Y axis, in radians.
    pub rotation_y: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-label render data. The text itself lives in `RenderBuffer::label_texts`
/// at `text_index`; the host rasterizes it into a sprite of `width × height`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LabelInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Sprite width in world units.
    pub width: f32,
    /// Sprite height in world units.
    pub height: f32,
    pub font_size: f32,
    pub text_index: f32,
    pub _pad: f32,
}

impl LabelInstance {
    pub const FLOATS: usize = 8;
}

/// Render buffer holding everything except tessellated geometry.
pub struct RenderBuffer {
    /// Sphere instances.
    pub instances: Vec<RenderInstance>,
    /// Label sprites.
    pub labels: Vec<LabelInstance>,
    /// Label strings, indexed by `LabelInstance::text_index`.
    pub label_texts: Vec<String>,
    /// Star points, flat `x, y, z` triples.
    pub stars: Vec<f32>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max_instances: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_instances),
            labels: Vec::new(),
            label_texts: Vec::new(),
            stars: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.labels.clear();
        self.label_texts.clear();
        self.stars.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    /// Add a label and its text. Returns the text index.
    pub fn push_label(&mut self, mut label: LabelInstance, text: &str) -> usize {
        let index = self.label_texts.len();
        label.text_index = index as f32;
        self.label_texts.push(text.to_owned());
        self.labels.push(label);
        index
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn label_count(&self) -> u32 {
        self.labels.len() as u32
    }

    pub fn star_count(&self) -> u32 {
        (self.stars.len() / 3) as u32
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn labels_ptr(&self) -> *const f32 {
        self.labels.as_ptr() as *const f32
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.stars.as_ptr()
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
