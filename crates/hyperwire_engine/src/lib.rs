//! Animation engine for the Hyperwire viewer
//!
//! - [`Command`] - the closed abstract input set (device key mapping is a
//!   collaborator concern)
//! - [`PlaneSet`] / [`RotationState`] - the six-plane rotation state
//!   machine
//! - [`Engine`] - owns the scene, camera, and renderer and drives frames
//!   from explicit elapsed-time ticks

mod command;
mod engine;
mod rotation;

pub use command::{Axis4, Command, Direction};
pub use engine::Engine;
pub use rotation::{PlaneSet, RotationState};
