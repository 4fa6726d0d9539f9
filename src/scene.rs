//! A [`DrawSurface`] that records primitives and mirrors them into Slint
//! models.
//!
//! [`SceneSurface`] is how the editor reaches an actual screen without the
//! core knowing about Slint components: each redraw records circles, labels
//! and lines, and [`sync_models`](SceneSurface::sync_models) pushes the
//! frame into host-owned `VecModel`s that `.slint` markup renders with
//! `for` loops. The same recorder doubles as the observer in tests.
//!
//! # Example
//!
//! ```ignore
//! use slint_automaton_editor::SceneSurface;
//! use slint::{ModelRc, VecModel};
//! use std::rc::Rc;
//!
//! let mut scene = SceneSurface::new(800.0, 600.0);
//!
//! let circles = Rc::new(VecModel::<StateCircle>::default());
//! scene.bind_circle_model(circles.clone(), |c| StateCircle {
//!     x: c.x, y: c.y, radius: c.radius, fill: c.fill, outline: c.outline,
//! });
//! window.set_state_circles(ModelRc::from(circles));
//!
//! // After every session event:
//! scene.sync_models();
//! ```

use slint::{Color, Model, VecModel};
use std::rc::Rc;

use crate::render::{DrawSurface, Font};

/// A recorded circle: one state body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub fill: Color,
    pub outline: Color,
}

/// A recorded text run: one state id label, centered at (x, y).
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: Font,
    pub color: Color,
}

/// A recorded line segment: a transition edge or the rubber band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub color: Color,
}

/// Pushes one primitive kind into a bound Slint model.
trait PrimitiveSyncer<T> {
    fn sync(&self, items: &[T]);
}

/// Concrete syncer for a bound model and row constructor.
struct ConcreteSyncer<P, F> {
    model: Rc<VecModel<P>>,
    constructor: F,
}

impl<T, P, F> PrimitiveSyncer<T> for ConcreteSyncer<P, F>
where
    P: Clone + 'static,
    F: Fn(&T) -> P,
{
    fn sync(&self, items: &[T]) {
        // Update existing rows or add new ones
        for (i, item) in items.iter().enumerate() {
            let row = (self.constructor)(item);
            if i < self.model.row_count() {
                self.model.set_row_data(i, row);
            } else {
                self.model.push(row);
            }
        }
        // Remove excess rows
        while self.model.row_count() > items.len() {
            self.model.remove(self.model.row_count() - 1);
        }
    }
}

/// Recording implementation of [`DrawSurface`].
///
/// Every `clear` starts a new frame: the recorded primitives are dropped
/// and the clear counter advances. Partial clears are not distinguished
/// from full ones; the editor only ever clears the whole surface.
pub struct SceneSurface {
    width: f32,
    height: f32,
    circles: Vec<CirclePrimitive>,
    texts: Vec<TextPrimitive>,
    lines: Vec<LinePrimitive>,
    clear_count: usize,
    circle_syncer: Option<Box<dyn PrimitiveSyncer<CirclePrimitive>>>,
    text_syncer: Option<Box<dyn PrimitiveSyncer<TextPrimitive>>>,
    line_syncer: Option<Box<dyn PrimitiveSyncer<LinePrimitive>>>,
}

impl SceneSurface {
    /// Create a surface with the given extent.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            circles: Vec::new(),
            texts: Vec::new(),
            lines: Vec::new(),
            clear_count: 0,
            circle_syncer: None,
            text_syncer: None,
            line_syncer: None,
        }
    }

    /// Update the extent after the host component resized.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Circles of the current frame, in draw order.
    pub fn circles(&self) -> &[CirclePrimitive] {
        &self.circles
    }

    /// Text runs of the current frame, in draw order.
    pub fn texts(&self) -> &[TextPrimitive] {
        &self.texts
    }

    /// Lines of the current frame, in draw order.
    pub fn lines(&self) -> &[LinePrimitive] {
        &self.lines
    }

    /// How many frames have been started.
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Bind the circle primitives to a Slint model.
    ///
    /// After binding, every [`sync_models`](Self::sync_models) call updates
    /// the model in place: rows are overwritten, appended, or trimmed to
    /// match the frame.
    ///
    /// # Arguments
    ///
    /// * `model` - The VecModel to sync to
    /// * `constructor` - Builds the host's row type from a recorded circle
    pub fn bind_circle_model<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&CirclePrimitive) -> P + 'static,
    {
        self.circle_syncer = Some(Box::new(ConcreteSyncer { model, constructor }));
    }

    /// Bind the text primitives to a Slint model.
    pub fn bind_text_model<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&TextPrimitive) -> P + 'static,
    {
        self.text_syncer = Some(Box::new(ConcreteSyncer { model, constructor }));
    }

    /// Bind the line primitives to a Slint model.
    pub fn bind_line_model<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&LinePrimitive) -> P + 'static,
    {
        self.line_syncer = Some(Box::new(ConcreteSyncer { model, constructor }));
    }

    /// Push the current frame into every bound model.
    ///
    /// Call after each session event; unbound primitive kinds are skipped.
    pub fn sync_models(&self) {
        if let Some(syncer) = &self.circle_syncer {
            syncer.sync(&self.circles);
        }
        if let Some(syncer) = &self.text_syncer {
            syncer.sync(&self.texts);
        }
        if let Some(syncer) = &self.line_syncer {
            syncer.sync(&self.lines);
        }
    }
}

impl DrawSurface for SceneSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.circles.clear();
        self.texts.clear();
        self.lines.clear();
        self.clear_count += 1;
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, fill: Color, outline: Color) {
        self.circles.push(CirclePrimitive { x, y, radius, fill, outline });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color) {
        self.texts.push(TextPrimitive { text: text.to_string(), x, y, font, color });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        self.lines.push(LinePrimitive { x1, y1, x2, y2, color });
    }
}
