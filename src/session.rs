//! The editor session: one diagram being edited plus the transient
//! interaction state around it.
//!
//! All pointer input enters through the session's event entry points. Each
//! entry point routes the event to the active tool's handlers
//! (see [`Tool::behavior`]) and, when a handler reports a change, redraws
//! the given surface before returning. Nothing is deferred or batched; by
//! the time an entry point returns, the surface shows the current model.

use crate::diagram::{Diagram, PendingTransition};
use crate::error::{EditorError, Result};
use crate::hit_test::DEFAULT_SURROUND_MULTIPLIER;
use crate::render::{self, DrawSurface, RenderStyle};
use crate::tools::Tool;

/// Editing context for a single diagram.
///
/// The session owns the [`Diagram`], the active [`Tool`], the pending
/// transition being dragged, and the render style. It holds no reference
/// to the surface; every entry point borrows one for the duration of the
/// call, which keeps the session free of host UI types.
///
/// # Example
///
/// ```
/// use slint_automaton_editor::{EditorSession, SceneSurface, Tool};
///
/// let mut session = EditorSession::new();
/// let mut surface = SceneSurface::new(800.0, 600.0);
///
/// // Place two states, then connect them
/// session.left_click(100.0, 100.0, &mut surface);
/// session.left_click(300.0, 100.0, &mut surface);
/// session.set_tool(Tool::Transition);
/// session.left_click(100.0, 100.0, &mut surface);
/// session.left_click(300.0, 100.0, &mut surface);
///
/// assert_eq!(session.diagram().transition_count(), 1);
/// ```
pub struct EditorSession {
    diagram: Diagram,
    tool: Tool,
    pending: Option<PendingTransition>,
    surround_multiplier: f32,
    style: RenderStyle,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self {
            diagram: Diagram::new(),
            tool: Tool::default(),
            pending: None,
            surround_multiplier: DEFAULT_SURROUND_MULTIPLIER,
            style: RenderStyle::default(),
        }
    }
}

impl EditorSession {
    /// Create a session with an empty diagram and the state tool active.
    pub fn new() -> Self {
        Self::default()
    }

    /// The diagram being edited.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Mutable access to the diagram, for hosts that build diagrams
    /// programmatically rather than through pointer events.
    pub fn diagram_mut(&mut self) -> &mut Diagram {
        &mut self.diagram
    }

    /// The currently active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Activate a tool. A pending transition drag survives the switch;
    /// only completing it clears it.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            tracing::debug!("active tool changed to {}", tool.name());
        }
        self.tool = tool;
    }

    /// The transition drag in progress, if any.
    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    /// Mutable access to the drag in progress, if any.
    pub fn pending_mut(&mut self) -> Option<&mut PendingTransition> {
        self.pending.as_mut()
    }

    /// Begin a transition drag. Transition-tool plumbing.
    pub fn set_pending(&mut self, pending: PendingTransition) {
        self.pending = Some(pending);
    }

    /// Drop the transition drag. Transition-tool plumbing.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Factor applied to a state's radius for the looser hit zone the
    /// state tool keeps clear around existing states.
    pub fn surround_multiplier(&self) -> f32 {
        self.surround_multiplier
    }

    /// Set the surround factor (default 2.0). Values below 1 would let the
    /// direct zone poke out of the surround zone and are not supported.
    pub fn set_surround_multiplier(&mut self, multiplier: f32) {
        self.surround_multiplier = multiplier;
    }

    /// Colors and label font used when redrawing.
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Replace the render style.
    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Handle a left click at surface-local (x, y).
    pub fn left_click(&mut self, x: f32, y: f32, surface: &mut dyn DrawSurface) {
        if self.tool.behavior().on_left_click(self, x, y) {
            self.redraw(surface);
        }
    }

    /// Handle a right click at surface-local (x, y).
    ///
    /// The host is expected to have suppressed the platform context menu;
    /// the editor only sees the click itself.
    pub fn right_click(&mut self, x: f32, y: f32, surface: &mut dyn DrawSurface) {
        if self.tool.behavior().on_right_click(self, x, y) {
            self.redraw(surface);
        }
    }

    /// Reserved entry point: double clicks are received and discarded.
    ///
    /// Wire it up anyway; behavior added here later reaches hosts without
    /// new plumbing.
    pub fn double_click(&mut self, _x: f32, _y: f32, _surface: &mut dyn DrawSurface) {}

    /// Handle pointer movement at surface-local (x, y).
    pub fn pointer_move(&mut self, x: f32, y: f32, surface: &mut dyn DrawSurface) {
        if self.tool.behavior().on_pointer_move(self, x, y) {
            self.redraw(surface);
        }
    }

    /// Redraw the full surface from the current model.
    ///
    /// The entry points call this themselves after a change; hosts call it
    /// directly when the surface appears or resizes.
    pub fn redraw(&self, surface: &mut dyn DrawSurface) {
        render::redraw(&self.diagram, self.pending.as_ref(), &self.style, surface);
    }

    /// Start editing a transition label.
    ///
    /// Always fails for now: label entry needs a text-input collaborator
    /// that has not been built. Completed transitions carry an empty label
    /// until it exists.
    pub fn begin_label_entry(&mut self) -> Result<()> {
        Err(EditorError::LabelEntryUnavailable)
    }
}
