//! Drawing-surface seam and the redraw routine.
//!
//! The editor never paints pixels itself. Everything it shows goes through
//! the [`DrawSurface`] capability: hosts implement it over whatever does the
//! actual painting (a Slint scene via
//! [`SceneSurface`](crate::scene::SceneSurface), a recorder in tests).

use slint::Color;

use crate::diagram::{Diagram, PendingTransition};

/// Font for state id labels.
///
/// Only the pixel size is carried; face selection stays with the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub pixel_size: f32,
}

impl Default for Font {
    fn default() -> Self {
        Self { pixel_size: 10.0 }
    }
}

/// Colors and label font used by [`redraw`].
///
/// The defaults draw black outlines and labels on white circles, with a
/// gold fill marking accepting states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Circle fill for ordinary states.
    pub standard_fill: Color,
    /// Circle fill for accepting states.
    pub accepting_fill: Color,
    /// Circle outline color.
    pub outline: Color,
    /// State id label color.
    pub label: Color,
    /// Color of transition lines and the rubber band.
    pub transition: Color,
    /// Font for state id labels.
    pub label_font: Font,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            standard_fill: Color::from_rgb_u8(255, 255, 255),
            accepting_fill: Color::from_rgb_u8(255, 215, 0),
            outline: Color::from_rgb_u8(0, 0, 0),
            label: Color::from_rgb_u8(0, 0, 0),
            transition: Color::from_rgb_u8(0, 0, 0),
            label_font: Font::default(),
        }
    }
}

/// Drawing capability the editor renders through.
///
/// Coordinates are surface-local pixels with the origin at the top-left
/// corner. Implementations decide stroke widths and text shaping; the
/// editor only supplies geometry and colors.
pub trait DrawSurface {
    /// Surface extent as (width, height).
    fn size(&self) -> (f32, f32);

    /// Erase the given rectangle.
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Draw a circle centered at (x, y) with the given fill and outline.
    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, fill: Color, outline: Color);

    /// Draw text centered at (x, y).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color);

    /// Draw a straight line segment.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color);
}

/// Redraw the whole diagram from scratch.
///
/// Clears the full surface, then draws every state in creation order (a
/// circle, filled per the accepting flag, with the id as a centered label),
/// then every transition as a straight line between the source and target
/// centers, then the rubber band of the pending transition when one is
/// being dragged. Arrowheads and edge labels are not drawn yet.
///
/// The walk is never incremental; callers invoke it after every mutation
/// and the previous frame is discarded wholesale.
pub fn redraw(
    diagram: &Diagram,
    pending: Option<&PendingTransition>,
    style: &RenderStyle,
    surface: &mut dyn DrawSurface,
) {
    let (width, height) = surface.size();
    surface.clear(0.0, 0.0, width, height);

    for state in diagram.states() {
        let fill = if state.accepting {
            style.accepting_fill
        } else {
            style.standard_fill
        };
        surface.draw_circle(state.x, state.y, state.radius, fill, style.outline);
        surface.draw_text(
            &state.id.to_string(),
            state.x,
            state.y,
            style.label_font,
            style.label,
        );
    }

    for state in diagram.states() {
        for transition in &state.transitions {
            // A target id that no longer resolves is skipped, not an error
            if let Some(target) = diagram.get(transition.target) {
                surface.draw_line(state.x, state.y, target.x, target.y, style.transition);
            }
        }
    }

    if let Some(pending) = pending {
        if let Some(source) = diagram.get(pending.source) {
            surface.draw_line(
                source.x,
                source.y,
                pending.cursor_x,
                pending.cursor_y,
                style.transition,
            );
        }
    }
}
