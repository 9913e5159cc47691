pub mod render;
pub mod rng;
pub mod starfield;
#[cfg(feature = "vectors")]
pub mod vector;
