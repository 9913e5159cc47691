use wasm_bindgen::prelude::*;

pub mod bodies;
pub mod config;
pub mod controller;
pub mod driver;
pub mod game;
pub mod markers;
pub mod orbit;

pub use game::SolarSystem;

#[cfg(feature = "vectors")]
orrery_web::export_game!(SolarSystem, "solar-system", vectors);
#[cfg(not(feature = "vectors"))]
orrery_web::export_game!(SolarSystem, "solar-system");
