//! Hyperwire - 4D wireframe viewer
//!
//! Headless demo driver: builds the engine from configuration and runs a
//! fixed-timestep loop against a stats-collecting drawing surface. A
//! windowing collaborator would implement [`DrawSurface`] over a real
//! bitmap and feed device input through the engine's command set; this
//! binary exercises the same pipeline and reports what it would have
//! drawn.

use hyperwire::config::AppConfig;
use hyperwire::{Color, DrawSurface, Engine, Vec2};

/// Simulated frame rate of the demo loop
const FRAME_DT: f32 = 1.0 / 60.0;

/// Counts draw calls instead of rasterizing
///
/// Per-frame counters reset on `clear`; totals accumulate over the run.
#[derive(Debug, Default)]
struct StatsSurface {
    width: u32,
    height: u32,
    frame_lines: usize,
    frame_points: usize,
    frame_texts: usize,
    total_lines: u64,
    frames: u64,
}

impl StatsSurface {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

impl DrawSurface for StatsSurface {
    fn clear(&mut self, _background: Color) {
        self.frame_lines = 0;
        self.frame_points = 0;
        self.frame_texts = 0;
        self.frames += 1;
    }

    fn draw_line(&mut self, _start: Vec2, _end: Vec2, _color: Color) {
        self.frame_lines += 1;
        self.total_lines += 1;
    }

    fn draw_point(&mut self, _position: Vec2, _color: Color, _size: f32) {
        self.frame_points += 1;
    }

    fn draw_text(&mut self, _text: &str, _position: Vec2, _color: Color) {
        self.frame_texts += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

fn main() {
    let config = AppConfig::load();

    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let frames: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(600);

    let scene = config.scene.to_scene();
    log::info!(
        "{}: {} objects, {} selected",
        config.window.title,
        scene.len(),
        scene
            .selected()
            .map(|o| o.name())
            .unwrap_or("none")
    );

    let mut engine = Engine::new(config.window.width, config.window.height)
        .with_scene(scene)
        .with_camera(config.camera.to_camera())
        .with_rotation(config.animation.to_rotation_state())
        .with_zoom(config.camera.zoom)
        .with_overlay(config.debug.show_overlay);

    let mut surface = StatsSurface::new(config.window.width, config.window.height);

    for frame in 0..frames {
        engine.update(FRAME_DT);
        engine.render_frame(&mut surface);

        if (frame + 1) % 60 == 0 {
            log::info!(
                "t={:5.1}s  {} lines, {} points, {} labels per frame",
                (frame + 1) as f32 * FRAME_DT,
                surface.frame_lines,
                surface.frame_points,
                surface.frame_texts,
            );
        }
    }

    log::info!(
        "done: {} frames on a {}x{} surface, {} line segments drawn",
        surface.frames,
        surface.width,
        surface.height,
        surface.total_lines
    );
}
