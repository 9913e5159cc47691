pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{Color, Mesh};
pub use core::scene::Scene;
pub use core::time::SimulationClock;
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{RenderInstance, LabelInstance, RenderBuffer};
pub use renderer::traits::{Renderer, FrameData};
pub use input::queue::{InputEvent, InputQueue};
pub use systems::render::build_render_buffer;
#[cfg(feature = "vectors")]
pub use systems::render::build_vector_buffer;
pub use systems::rng::Rng;
pub use systems::starfield::generate_starfield;

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorState, VectorVertex};

// Extensions: decoupled optional systems
pub use extensions::{Easing, lerp, ease, ease_vec3, CameraMove};
