//! Gesture harness for driving an editor session in tests.

#![allow(dead_code)]

use slint_automaton_editor::{
    CirclePrimitive, EditorSession, LinePrimitive, SceneSurface, StateId, TextPrimitive, Tool,
};

/// An editor session paired with a recording surface.
///
/// The helpers wrap the session entry points so tests read like the
/// pointer interactions they simulate. No windowing backend is involved;
/// every frame the session draws is captured by the scene and can be
/// inspected through the accessors.
pub struct EditorHarness {
    pub session: EditorSession,
    pub surface: SceneSurface,
}

impl EditorHarness {
    pub fn new() -> Self {
        Self {
            session: EditorSession::new(),
            surface: SceneSurface::new(800.0, 600.0),
        }
    }

    /// Activate a tool.
    pub fn select_tool(&mut self, tool: Tool) {
        self.session.set_tool(tool);
    }

    /// Left click at surface coordinates.
    pub fn click(&mut self, x: f32, y: f32) {
        self.session.left_click(x, y, &mut self.surface);
    }

    /// Right click at surface coordinates.
    pub fn right_click(&mut self, x: f32, y: f32) {
        self.session.right_click(x, y, &mut self.surface);
    }

    /// Double click at surface coordinates.
    pub fn double_click(&mut self, x: f32, y: f32) {
        self.session.double_click(x, y, &mut self.surface);
    }

    /// Move the pointer to surface coordinates.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.session.pointer_move(x, y, &mut self.surface);
    }

    /// Place a state with the state tool and return its id.
    ///
    /// Panics if the click lands on occupied surface and nothing is placed.
    pub fn place_state(&mut self, x: f32, y: f32) -> StateId {
        let before = self.session.diagram().len();
        self.select_tool(Tool::State);
        self.click(x, y);
        assert!(
            self.session.diagram().len() > before,
            "click at ({x}, {y}) did not place a state"
        );
        StateId(self.session.diagram().last_id())
    }

    /// Connect two states with the transition tool by clicking their centers.
    pub fn connect(&mut self, source: StateId, target: StateId) {
        let (sx, sy) = self.state_center(source);
        let (tx, ty) = self.state_center(target);
        self.select_tool(Tool::Transition);
        self.click(sx, sy);
        self.click(tx, ty);
    }

    /// Center of a state, for aiming gestures at it.
    pub fn state_center(&self, id: StateId) -> (f32, f32) {
        self.session
            .diagram()
            .get(id)
            .expect("state exists")
            .center()
    }

    /// Circles of the most recent frame.
    pub fn circles(&self) -> &[CirclePrimitive] {
        self.surface.circles()
    }

    /// Text labels of the most recent frame.
    pub fn texts(&self) -> &[TextPrimitive] {
        self.surface.texts()
    }

    /// Lines of the most recent frame.
    pub fn lines(&self) -> &[LinePrimitive] {
        self.surface.lines()
    }

    /// Number of frames drawn since the harness was created.
    pub fn frames(&self) -> usize {
        self.surface.clear_count()
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}
