/// Display modes and the scenes that go with them.
///
/// Every transition builds a fresh `Scene` and swaps it in through
/// `EngineContext::replace_scene`; nothing from the previous mode survives.

use glam::Vec3;
use orrery_engine::{Color, EngineContext, Easing, Entity, EntityId, Mesh, Scene, generate_starfield};

use crate::bodies::{self, BodyTable, CelestialBody};
use crate::config::OrreryConfig;
use crate::driver::AnimationDriver;
use crate::markers::{self, Marker, MarkerSet};
use crate::orbit;

const MARKER_COLOR: Color = Color::from_hex(0xff0000);
const SIGHT_LINE_COLOR: Color = Color::from_hex(0x00ff00);
const RING_COLOR: Color = Color::WHITE;
const STAR_COLOR: Color = Color::WHITE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayMode {
    Overview,
    Focused(String),
    Annotated(String),
}

impl DisplayMode {
    /// Name of the focused body, if any.
    pub fn focused(&self) -> Option<&str> {
        match self {
            DisplayMode::Overview => None,
            DisplayMode::Focused(name) | DisplayMode::Annotated(name) => Some(name.as_str()),
        }
    }

    /// Whether the animation driver advances in this mode.
    pub fn animates(&self) -> bool {
        !matches!(self, DisplayMode::Annotated(_))
    }

    /// Numeric code sent to the host UI.
    pub fn code(&self) -> f32 {
        match self {
            DisplayMode::Overview => 0.0,
            DisplayMode::Focused(_) => 1.0,
            DisplayMode::Annotated(_) => 2.0,
        }
    }
}

/// An entity that follows one body's orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitBinding {
    pub entity: EntityId,
    /// Index into the body table.
    pub body: usize,
}

/// Everything the driver needs to know about the current scene.
#[derive(Debug, Clone, Default)]
pub struct SceneContents {
    pub orbiting: Vec<OrbitBinding>,
    /// The focused body's entity and table index.
    pub focused: Option<OrbitBinding>,
    pub markers: Vec<Marker>,
}

pub struct SceneController {
    table: BodyTable,
    config: OrreryConfig,
    stars: Vec<Vec3>,
    mode: DisplayMode,
    contents: SceneContents,
}

impl SceneController {
    pub fn new(table: BodyTable, config: OrreryConfig) -> Self {
        let stars = generate_starfield(config.star_count, config.star_spread, config.star_seed);
        Self {
            table,
            config,
            stars,
            mode: DisplayMode::Overview,
            contents: SceneContents::default(),
        }
    }

    pub fn mode(&self) -> &DisplayMode {
        &self.mode
    }

    pub fn contents(&self) -> &SceneContents {
        &self.contents
    }

    pub fn table(&self) -> &BodyTable {
        &self.table
    }

    /// Table index of the focused body, if any.
    pub fn focused_index(&self) -> Option<usize> {
        self.mode.focused().and_then(|name| self.table.index_of(name))
    }

    /// The "show info" affordance is offered only in the focused view of a non-Earth body.
    pub fn info_available(&self) -> bool {
        match &self.mode {
            DisplayMode::Focused(name) => name != bodies::EARTH,
            _ => false,
        }
    }

    // ── Transitions ────────────────────────────────────────────────

    /// Rebuild the full eight-body scene and restore the overview camera.
    pub fn return_to_overview(&mut self, ctx: &mut EngineContext, driver: &mut AnimationDriver) -> bool {
        let mut scene = Scene::with_capacity(self.table.len() * 2 + 2);
        let mut contents = SceneContents::default();

        spawn_sun(ctx, &mut scene);
        scene.spawn(
            Entity::new(ctx.next_id())
                .with_tag("stars")
                .with_mesh(Mesh::starfield(self.stars.clone(), STAR_COLOR)),
        );
        for (index, body) in self.table.iter().enumerate() {
            let binding = self.spawn_orbiting(ctx, &mut scene, index, body, driver.sim_time());
            contents.orbiting.push(binding);
        }

        ctx.cancel_camera_move();
        ctx.camera.set_position(self.config.overview_camera());
        ctx.camera.set_pitch(self.config.overview_pitch);

        self.install(ctx, driver, scene, contents, DisplayMode::Overview);
        true
    }

    /// Isolate Earth and `name`, and fly the camera above the focused orbit.
    pub fn enter_focused(&mut self, ctx: &mut EngineContext, driver: &mut AnimationDriver, name: &str) -> bool {
        let Some((index, focused)) = self.table.find(name) else {
            log::warn!("enter_focused: unknown body `{}`", name);
            return false;
        };
        let distance = focused.distance;

        let mut scene = Scene::with_capacity(6);
        let mut contents = SceneContents::default();
        let t = driver.sim_time();

        spawn_sun(ctx, &mut scene);
        if !focused.is_earth() {
            let earth = self.spawn_orbiting(ctx, &mut scene, self.table.earth_index(), self.table.earth(), t);
            contents.orbiting.push(earth);
        }
        let binding = self.spawn_orbiting(ctx, &mut scene, index, focused, t);
        contents.orbiting.push(binding);
        contents.focused = Some(binding);

        ctx.animate_camera_to(
            Vec3::new(0.0, distance * self.config.focus_height_factor, 0.0),
            self.config.focus_move_ms,
            Easing::CubicInOut,
            Some(Vec3::ZERO),
        );

        let name = focused.name.clone();
        self.install(ctx, driver, scene, contents, DisplayMode::Focused(name));
        true
    }

    /// Freeze Earth and the focused body at phase zero and lay out the markers.
    pub fn enter_annotated(&mut self, ctx: &mut EngineContext, driver: &mut AnimationDriver) -> bool {
        let Some(index) = self.focused_index() else {
            log::debug!("enter_annotated: no body focused");
            return false;
        };
        let Some(focused) = self.table.get_index(index) else {
            return false;
        };
        let earth = self.table.earth();
        let earth_pos = orbit::pinned(earth);

        let Some(set) = MarkerSet::for_body(focused, earth_pos, self.config.quadrature_scale) else {
            log::debug!("enter_annotated: `{}` has no markers", focused.name);
            return false;
        };
        let markers = set.markers();

        let mut scene = Scene::with_capacity(5 + markers.len() * 3);
        let mut contents = SceneContents::default();

        spawn_sun(ctx, &mut scene);
        self.spawn_pinned(ctx, &mut scene, earth);
        let entity = self.spawn_pinned(ctx, &mut scene, focused);
        contents.focused = Some(OrbitBinding { entity, body: index });

        let marker_radius = focused.radius / 4.0;
        let label_offset = self.config.label_offset();
        for marker in &markers {
            scene.spawn(
                Entity::new(ctx.next_id())
                    .with_tag(format!("marker:{}", marker.label))
                    .with_pos(marker.position)
                    .with_mesh(Mesh::sphere(marker_radius, MARKER_COLOR)),
            );
            scene.spawn(
                Entity::new(ctx.next_id())
                    .with_tag(format!("label:{}", marker.label))
                    .with_pos(marker.position + label_offset)
                    .with_mesh(Mesh::label(marker.label, marker.font_size)),
            );
        }
        for ((from, to), marker) in markers::sight_lines(earth_pos, &markers).into_iter().zip(&markers) {
            scene.spawn(
                Entity::new(ctx.next_id())
                    .with_tag(format!("sight:{}", marker.label))
                    .with_mesh(Mesh::line(from, to, SIGHT_LINE_COLOR)),
            );
        }
        contents.markers = markers.to_vec();

        let name = focused.name.clone();
        self.install(ctx, driver, scene, contents, DisplayMode::Annotated(name));
        true
    }

    /// Start (or restart) the retrograde sequence for the focused body.
    /// In the annotated view the body returns to its pinned spot afterwards.
    pub fn trigger_retrograde(&self, ctx: &EngineContext, driver: &mut AnimationDriver) -> bool {
        let Some(binding) = self.contents.focused else {
            log::debug!("trigger_retrograde: no body focused");
            return false;
        };
        if binding.body == self.table.earth_index() {
            log::debug!("trigger_retrograde: Earth has no offset from itself");
            return false;
        }
        let rest = match self.mode {
            DisplayMode::Annotated(_) => self.table.get_index(binding.body).map(orbit::pinned),
            _ => None,
        };
        driver.start_retrograde(binding, ctx.scene_generation(), rest)
    }

    // ── Scene building ─────────────────────────────────────────────

    fn install(
        &mut self,
        ctx: &mut EngineContext,
        driver: &mut AnimationDriver,
        scene: Scene,
        contents: SceneContents,
        mode: DisplayMode,
    ) {
        driver.cancel_retrograde();
        ctx.replace_scene(scene);
        self.contents = contents;
        log::info!("display mode: {:?}", mode);
        self.mode = mode;
    }

    fn spawn_orbiting(
        &self,
        ctx: &mut EngineContext,
        scene: &mut Scene,
        index: usize,
        body: &CelestialBody,
        sim_time: f64,
    ) -> OrbitBinding {
        spawn_ring(ctx, scene, body, self.config.ring_half_width);
        let entity = scene.spawn(
            Entity::new(ctx.next_id())
                .with_tag(body.name.clone())
                .with_pos(orbit::position(body, sim_time))
                .with_mesh(Mesh::sphere(body.radius, body.color())),
        );
        OrbitBinding { entity, body: index }
    }

    fn spawn_pinned(&self, ctx: &mut EngineContext, scene: &mut Scene, body: &CelestialBody) -> EntityId {
        spawn_ring(ctx, scene, body, self.config.ring_half_width);
        scene.spawn(
            Entity::new(ctx.next_id())
                .with_tag(body.name.clone())
                .with_pos(orbit::pinned(body))
                .with_mesh(Mesh::sphere(body.radius, body.color())),
        )
    }
}

fn spawn_sun(ctx: &mut EngineContext, scene: &mut Scene) {
    scene.spawn(
        Entity::new(ctx.next_id())
            .with_tag("sun")
            .with_mesh(Mesh::sphere(bodies::SUN_RADIUS, bodies::SUN_COLOR)),
    );
}

fn spawn_ring(ctx: &mut EngineContext, scene: &mut Scene, body: &CelestialBody, half_width: f32) {
    scene.spawn(
        Entity::new(ctx.next_id())
            .with_tag(format!("ring:{}", body.name))
            .with_mesh(Mesh::ring(body.distance, half_width, RING_COLOR)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::default_bodies;

    fn setup() -> (SceneController, AnimationDriver, EngineContext) {
        let config = OrreryConfig {
            star_count: 16,
            ..OrreryConfig::default()
        };
        let table = BodyTable::new(default_bodies()).unwrap();
        let mut driver = AnimationDriver::new(config.sim_step, config.spin_step, config.retrograde_frames);
        let mut controller = SceneController::new(table, config);
        let mut ctx = EngineContext::new();
        controller.return_to_overview(&mut ctx, &mut driver);
        (controller, driver, ctx)
    }

    #[test]
    fn overview_binds_every_body() {
        let (controller, _, ctx) = setup();
        let contents = controller.contents();
        assert_eq!(contents.orbiting.len(), 8);
        assert!(contents.focused.is_none());
        for binding in &contents.orbiting {
            let body = controller.table().get_index(binding.body).unwrap();
            assert_eq!(ctx.scene.get(binding.entity).unwrap().tag, body.name);
        }
    }

    #[test]
    fn every_transition_replaces_the_scene() {
        let (mut controller, mut driver, mut ctx) = setup();
        let overview_ids: Vec<_> = ctx.scene.iter().map(|e| e.id).collect();
        let generation = ctx.scene_generation();

        assert!(controller.enter_focused(&mut ctx, &mut driver, "Venus"));
        assert_eq!(ctx.scene_generation(), generation + 1);
        assert!(overview_ids.iter().all(|id| ctx.scene.get(*id).is_none()));

        assert!(controller.enter_annotated(&mut ctx, &mut driver));
        assert_eq!(ctx.scene_generation(), generation + 2);
        assert_eq!(controller.contents().markers.len(), 4);
        assert!(controller.contents().orbiting.is_empty());
    }

    #[test]
    fn focused_binding_points_at_focused_entity() {
        let (mut controller, mut driver, mut ctx) = setup();
        controller.enter_focused(&mut ctx, &mut driver, "Saturn");
        let focused = controller.contents().focused.unwrap();
        assert_eq!(ctx.scene.get(focused.entity).unwrap().tag, "Saturn");
        assert_eq!(controller.focused_index(), Some(5));
    }

    #[test]
    fn annotated_to_other_focus() {
        let (mut controller, mut driver, mut ctx) = setup();
        controller.enter_focused(&mut ctx, &mut driver, "Mars");
        controller.enter_annotated(&mut ctx, &mut driver);
        assert!(controller.enter_focused(&mut ctx, &mut driver, "Uranus"));
        assert_eq!(controller.mode(), &DisplayMode::Focused("Uranus".into()));
        assert!(controller.contents().markers.is_empty());
        assert!(ctx.scene.find_by_tag("marker:충").is_none());
    }

    #[test]
    fn transition_cancels_running_sequence() {
        let (mut controller, mut driver, mut ctx) = setup();
        controller.enter_focused(&mut ctx, &mut driver, "Mars");
        assert!(controller.trigger_retrograde(&ctx, &mut driver));
        assert_eq!(driver.retrograde_remaining(), 200);
        controller.enter_annotated(&mut ctx, &mut driver);
        assert_eq!(driver.retrograde_remaining(), 0);
    }

    #[test]
    fn mode_codes() {
        assert_eq!(DisplayMode::Overview.code(), 0.0);
        assert!(DisplayMode::Focused("Mars".into()).animates());
        assert!(!DisplayMode::Annotated("Mars".into()).animates());
        assert_eq!(DisplayMode::Annotated("Mars".into()).focused(), Some("Mars"));
    }
}
