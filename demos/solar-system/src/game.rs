/// Solar System: interactive orrery illustrating apparent retrograde motion,
/// elongation and opposition geometry.
///
/// Overview shows all eight planets. Focusing a planet isolates it with Earth;
/// "show info" freezes both and lays out the named reference points.

use orrery_engine::{EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue};
use orrery_web::Bootstrap;

use crate::bodies::BodyTable;
use crate::config::{ConfigError, OrreryConfig};
use crate::controller::{DisplayMode, SceneController};
use crate::driver::AnimationDriver;

// ── Custom event kinds from the UI ───────────────────────────────────

/// Focus a body; `a` is its index in the body menu.
pub const CUSTOM_FOCUS: u32 = 1;
pub const CUSTOM_SHOW_INFO: u32 = 2;
pub const CUSTOM_RETROGRADE: u32 = 3;
pub const CUSTOM_OVERVIEW: u32 = 4;

pub const KEY_ESCAPE: u32 = 27;

// ── Game event kinds to the UI ───────────────────────────────────────

/// a = mode (0 overview, 1 focused, 2 annotated), b = focused index or -1,
/// c = 1 when the "show info" button should be visible.
pub const EVENT_MODE: f32 = 1.0;
/// a = simulation time.
pub const EVENT_SIM_TIME: f32 = 2.0;
/// a = retrograde frames remaining (0 when idle).
pub const EVENT_RETROGRADE: f32 = 3.0;

pub struct SolarSystem {
    controller: SceneController,
    driver: AnimationDriver,
}

impl SolarSystem {
    pub fn with_config(config: OrreryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table: BodyTable = config.body_table()?;
        let driver = AnimationDriver::new(config.sim_step, config.spin_step, config.retrograde_frames);
        Ok(Self {
            controller: SceneController::new(table, config),
            driver,
        })
    }

    pub fn mode(&self) -> &DisplayMode {
        self.controller.mode()
    }

    pub fn sim_time(&self) -> f64 {
        self.driver.sim_time()
    }

    pub fn controller(&self) -> &SceneController {
        &self.controller
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    // ── UI operations ──────────────────────────────────────────────

    pub fn enter_focused(&mut self, ctx: &mut EngineContext, name: &str) -> bool {
        self.controller.enter_focused(ctx, &mut self.driver, name)
    }

    pub fn enter_annotated(&mut self, ctx: &mut EngineContext) -> bool {
        self.controller.enter_annotated(ctx, &mut self.driver)
    }

    pub fn trigger_retrograde(&mut self, ctx: &mut EngineContext) -> bool {
        self.controller.trigger_retrograde(ctx, &mut self.driver)
    }

    pub fn return_to_overview(&mut self, ctx: &mut EngineContext) -> bool {
        self.controller.return_to_overview(ctx, &mut self.driver)
    }

    fn focus_index(&mut self, ctx: &mut EngineContext, index: f32) -> bool {
        let name = if index >= 0.0 {
            self.controller
                .table()
                .get_index(index as usize)
                .map(|b| b.name.clone())
        } else {
            None
        };
        match name {
            Some(name) => self.enter_focused(ctx, &name),
            None => {
                log::warn!("focus: no body at menu index {}", index);
                false
            }
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code: KEY_ESCAPE } => {
                self.return_to_overview(ctx);
            }
            InputEvent::Custom { kind, a, .. } => match kind {
                CUSTOM_FOCUS => {
                    self.focus_index(ctx, a);
                }
                CUSTOM_SHOW_INFO => {
                    self.enter_annotated(ctx);
                }
                CUSTOM_RETROGRADE => {
                    self.trigger_retrograde(ctx);
                }
                CUSTOM_OVERVIEW => {
                    self.return_to_overview(ctx);
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn emit_status(&self, ctx: &mut EngineContext) {
        let focused = self.controller.focused_index().map_or(-1.0, |i| i as f32);
        let info = if self.controller.info_available() { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent {
            kind: EVENT_MODE,
            a: self.mode().code(),
            b: focused,
            c: info,
        });
        ctx.emit_event(GameEvent {
            kind: EVENT_SIM_TIME,
            a: self.driver.sim_time() as f32,
            b: 0.0,
            c: 0.0,
        });
        ctx.emit_event(GameEvent {
            kind: EVENT_RETROGRADE,
            a: self.driver.retrograde_remaining() as f32,
            b: 0.0,
            c: 0.0,
        });
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            // Sun, planets and four markers at most.
            max_instances: self.controller.table().len() + 8,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.return_to_overview(ctx);
        log::info!("solar-system: {} bodies", self.controller.table().len());
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            self.handle_input(ctx, event);
        }

        self.driver.tick(
            ctx,
            self.controller.mode(),
            self.controller.contents(),
            self.controller.table(),
        );

        self.emit_status(ctx);
    }
}

impl Bootstrap for SolarSystem {
    type Error = ConfigError;

    fn bootstrap(config_json: Option<&str>) -> Result<Self, Self::Error> {
        let config = match config_json {
            Some(json) => OrreryConfig::from_json(json)?,
            None => OrreryConfig::default(),
        };
        Self::with_config(config)
    }

    fn menu_items(&self) -> Vec<String> {
        self.controller.table().names()
    }
}
