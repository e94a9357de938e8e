//! Projection and rendering for the Hyperwire viewer
//!
//! - [`DrawSurface`] - the externally-implemented drawing collaborator
//! - [`RecordingSurface`] - a recording implementation for tests and
//!   headless runs
//! - [`Camera4D`] - 4D viewpoint and the two-stage 4D -> 3D -> 2D
//!   perspective reduction
//! - [`Renderer`] - projects objects and draws their wireframes

mod camera;
mod renderer;
mod surface;

pub use camera::Camera4D;
pub use renderer::Renderer;
pub use surface::{DrawOp, DrawSurface, RecordingSurface};
