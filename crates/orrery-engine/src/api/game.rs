use glam::Vec3;
use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::extensions::easing::Easing;
use crate::extensions::tween::CameraMove;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Vertical camera field of view in degrees (default: 75).
    pub fov_y_deg: f32,
    /// Viewport aspect ratio, width / height.
    pub aspect: f32,
    /// Near clip distance (default: 0.1).
    pub near: f32,
    /// Far clip distance (default: 10000).
    pub far: f32,
    /// Maximum number of sphere instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of tessellated vertices (default: 65536).
    pub max_vector_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Stroke width for line meshes, in world units.
    pub line_width: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 10000.0,
            max_instances: 64,
            max_vector_vertices: 65536,
            max_events: 32,
            line_width: 1.0,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: build the first scene, place the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One display refresh. Handle input, advance the simulation, move entities.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera3D,
    pub events: Vec<GameEvent>,
    camera_move: Option<CameraMove>,
    next_id: u32,
    scene_generation: u64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Create a context whose camera follows the given configuration.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera3D::new(config.fov_y_deg, config.aspect, config.near, config.far),
            events: Vec::with_capacity(config.max_events),
            camera_move: None,
            next_id: 1,
            scene_generation: 0,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Swap in a freshly built scene, discarding the previous one wholesale.
    /// Returns the discarded scene.
    pub fn replace_scene(&mut self, scene: Scene) -> Scene {
        self.scene_generation += 1;
        std::mem::replace(&mut self.scene, scene)
    }

    /// Number of scene replacements so far.
    pub fn scene_generation(&self) -> u64 {
        self.scene_generation
    }

    /// Emit a game event to be forwarded to the host UI.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    // -- Camera --

    /// Start an eased camera move from the current position, replacing any
    /// move in progress. With `look_at`, the camera re-aims every update.
    pub fn animate_camera_to(
        &mut self,
        target: Vec3,
        duration_ms: f32,
        easing: Easing,
        look_at: Option<Vec3>,
    ) {
        let mut mv = CameraMove::new(self.camera.position, target, duration_ms, easing);
        if let Some(point) = look_at {
            mv = mv.with_look_at(point);
        }
        self.camera_move = Some(mv);
    }

    /// Drop any camera move in progress, leaving the camera where it is.
    pub fn cancel_camera_move(&mut self) {
        self.camera_move = None;
    }

    pub fn is_camera_moving(&self) -> bool {
        self.camera_move.is_some()
    }

    /// Advance the active camera move by `dt` seconds.
    /// Called automatically by the game runner after `Game::update()`.
    pub fn tick_camera(&mut self, dt: f32) {
        if let Some(mv) = &mut self.camera_move {
            if !mv.tick(dt * 1000.0, &mut self.camera) {
                log::debug!("camera move finished at {:?}", mv.target());
                self.camera_move = None;
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;

    #[test]
    fn ids_are_never_reused() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn replace_scene_discards_previous_contents() {
        let mut ctx = EngineContext::new();
        let old_id = ctx.next_id();
        ctx.scene.spawn(Entity::new(old_id).with_tag("old"));

        let mut fresh = Scene::new();
        let new_id = ctx.next_id();
        fresh.spawn(Entity::new(new_id).with_tag("new"));

        let discarded = ctx.replace_scene(fresh);
        assert_eq!(discarded.len(), 1);
        assert!(ctx.scene.get(old_id).is_none());
        assert!(ctx.scene.get(new_id).is_some());
        assert_eq!(ctx.scene_generation(), 1);
    }

    #[test]
    fn camera_move_runs_to_completion() {
        let mut ctx = EngineContext::new();
        ctx.camera.set_position(Vec3::new(0.0, 400.0, 1000.0));
        ctx.animate_camera_to(Vec3::new(0.0, 420.0, 0.0), 2000.0, Easing::CubicInOut, Some(Vec3::ZERO));
        assert!(ctx.is_camera_moving());

        for _ in 0..60 {
            ctx.tick_camera(1.0 / 60.0);
        }
        assert!(ctx.is_camera_moving(), "one second into a two second move");

        for _ in 0..61 {
            ctx.tick_camera(1.0 / 60.0);
        }
        assert!(!ctx.is_camera_moving());
        assert!(ctx.camera.position.distance(Vec3::new(0.0, 420.0, 0.0)) < 1e-2);
    }

    #[test]
    fn cancel_stops_camera_where_it_is() {
        let mut ctx = EngineContext::new();
        ctx.animate_camera_to(Vec3::new(0.0, 0.0, 100.0), 1000.0, Easing::Linear, None);
        ctx.tick_camera(0.5);
        let halfway = ctx.camera.position;
        ctx.cancel_camera_move();
        ctx.tick_camera(0.5);
        assert_eq!(ctx.camera.position, halfway);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent { kind: 1.0, ..Default::default() });
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
