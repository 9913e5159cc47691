use orrery_engine::{
    Game, GameConfig, EngineContext, InputEvent, InputQueue,
    RenderBuffer, CameraUniform, FrameData, Renderer,
    build_render_buffer,
};
#[cfg(feature = "vectors")]
use orrery_engine::{VectorState, build_vector_buffer};

/// Generic game runner that wires up the frame loop.
///
/// The host calls `tick` once per display refresh (requestAnimationFrame).
/// Each tick runs exactly one `Game::update`, so per-frame simulation steps
/// inside the game advance once per refresh.
///
/// Each concrete game creates a `thread_local!` GameRunner through
/// `export_game!`, because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    #[cfg(feature = "vectors")]
    vectors: VectorState,
    camera_uniform: CameraUniform,
    config: GameConfig,
    initialized: bool,
    frame_count: u64,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();

        Self {
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            #[cfg(feature = "vectors")]
            vectors: VectorState::with_capacity(config.max_vector_vertices),
            camera_uniform: orrery_engine::Camera3D::default().uniform(),
            game,
            config,
            initialized: false,
            frame_count: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_buffers();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one display refresh: update the game once, advance the camera,
    /// rebuild the render buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        self.ctx.tick_camera(dt);
        self.rebuild_buffers();
        self.frame_count += 1;
    }

    fn rebuild_buffers(&mut self) {
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        #[cfg(feature = "vectors")]
        build_vector_buffer(self.ctx.scene.iter(), &mut self.vectors, self.config.line_width);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    /// Borrow everything produced for the current frame.
    pub fn frame(&self) -> FrameData<'_> {
        FrameData {
            instances: &self.render_buffer.instances,
            labels: &self.render_buffer.labels,
            label_texts: &self.render_buffer.label_texts,
            stars: &self.render_buffer.stars,
            #[cfg(feature = "vectors")]
            vector_vertices: self.vectors.vertices(),
            #[cfg(not(feature = "vectors"))]
            vector_vertices: &[],
            camera: self.camera_uniform,
        }
    }

    /// Hand the current frame to a native renderer.
    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.draw(&self.frame());
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn labels_ptr(&self) -> *const f32 {
        self.render_buffer.labels_ptr()
    }

    pub fn label_count(&self) -> u32 {
        self.render_buffer.label_count()
    }

    pub fn label_text(&self, index: u32) -> String {
        self.render_buffer
            .label_texts
            .get(index as usize)
            .cloned()
            .unwrap_or_default()
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.render_buffer.stars_ptr()
    }

    pub fn star_count(&self) -> u32 {
        self.render_buffer.star_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.config.max_instances as u32
    }

    pub fn max_vector_vertices(&self) -> u32 {
        self.config.max_vector_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.config.max_events as u32
    }
}
