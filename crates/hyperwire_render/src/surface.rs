//! Drawing-surface collaborator contract
//!
//! The core never rasterizes anything itself. It draws through this trait,
//! which a windowing/bitmap collaborator implements externally. The
//! implementation may cull lines whose endpoints fall far outside a margin
//! around the visible area; the core does not pre-clip.
//!
//! On a resize event the collaborator is expected to replace its backing
//! surface rather than mutate it in place, releasing the old one after the
//! new one is installed.

use hyperwire_core::Color;
use hyperwire_math::Vec2;

/// A 2D raster the viewer draws wireframes onto
pub trait DrawSurface {
    /// Fill the whole surface with a background color
    fn clear(&mut self, background: Color);

    /// Draw a line segment between two screen-space points
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color);

    /// Draw a point marker of the given pixel size
    fn draw_point(&mut self, position: Vec2, color: Color, size: f32);

    /// Draw a text label with its anchor at `position`
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color);

    /// Reallocate the surface for new pixel dimensions
    fn resize(&mut self, width: u32, height: u32);
}

/// A recorded draw call, for assertions and headless runs
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Line { start: Vec2, end: Vec2, color: Color },
    Point { position: Vec2, color: Color, size: f32 },
    Text { text: String, position: Vec2, color: Color },
}

/// A [`DrawSurface`] that records its draw calls instead of rasterizing
///
/// `clear` empties the recording, so after a frame the ops describe exactly
/// that frame.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
    clear_count: usize,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            clear_count: 0,
        }
    }

    /// Draw calls recorded since the last clear
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of times the surface was cleared
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Lines recorded since the last clear
    pub fn lines(&self) -> impl Iterator<Item = (&Vec2, &Vec2, &Color)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { start, end, color } => Some((start, end, color)),
            _ => None,
        })
    }

    /// Texts recorded since the last clear
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, _background: Color) {
        self.ops.clear();
        self.clear_count += 1;
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) {
        self.ops.push(DrawOp::Line { start, end, color });
    }

    fn draw_point(&mut self, position: Vec2, color: Color, size: f32) {
        self.ops.push(DrawOp::Point {
            position,
            color,
            size,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            position,
            color,
        });
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_and_clear() {
        let mut surface = RecordingSurface::new(100, 100);
        surface.draw_line(Vec2::ZERO, Vec2::new(1.0, 1.0), Color::RED);
        surface.draw_text("hello", Vec2::ZERO, Color::WHITE);
        assert_eq!(surface.ops().len(), 2);
        assert_eq!(surface.lines().count(), 1);
        assert_eq!(surface.texts().next(), Some("hello"));

        surface.clear(Color::BLACK);
        assert!(surface.ops().is_empty());
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn test_resize() {
        let mut surface = RecordingSurface::new(100, 100);
        surface.resize(640, 480);
        assert_eq!((surface.width(), surface.height()), (640, 480));
    }
}
