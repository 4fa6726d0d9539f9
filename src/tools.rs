//! The toolbar tools and their pointer-event handlers.
//!
//! Every tool is a stateless unit struct implementing [`ToolBehavior`];
//! [`Tool::behavior`] is the dispatch table that picks the handler triple
//! for the active tool. Handlers mutate the session and report whether the
//! surface needs redrawing; they never draw themselves.

use crate::diagram::PendingTransition;
use crate::error::EditorError;
use crate::hit_test::find_nearest_state;
use crate::session::EditorSession;

/// The tools a toolbar can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Places new states on empty surface area.
    #[default]
    State,
    /// Connects states by clicking a source and then a target.
    Transition,
    /// Reserved for a future selection feature.
    Select,
    /// Reserved for a future editing feature.
    Edit,
}

impl Tool {
    /// Parse the name a toolbar reports.
    ///
    /// # Example
    ///
    /// ```
    /// use slint_automaton_editor::Tool;
    ///
    /// assert_eq!(Tool::from_name("transition"), Ok(Tool::Transition));
    /// assert!(Tool::from_name("lasso").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, EditorError> {
        match name {
            "state" => Ok(Tool::State),
            "transition" => Ok(Tool::Transition),
            "select" => Ok(Tool::Select),
            "edit" => Ok(Tool::Edit),
            _ => Err(EditorError::UnknownTool { name: name.to_string() }),
        }
    }

    /// The name [`from_name`](Tool::from_name) accepts for this tool.
    pub fn name(self) -> &'static str {
        match self {
            Tool::State => "state",
            Tool::Transition => "transition",
            Tool::Select => "select",
            Tool::Edit => "edit",
        }
    }

    /// The handler triple for this tool.
    pub fn behavior(self) -> &'static dyn ToolBehavior {
        match self {
            Tool::State => &StateTool,
            Tool::Transition => &TransitionTool,
            Tool::Select => &SelectTool,
            Tool::Edit => &EditTool,
        }
    }
}

/// Handler triple a tool implements.
///
/// Each handler receives the session and the event position in
/// surface-local coordinates, and returns `true` when the surface content
/// changed and must be redrawn. The defaults ignore the event, so a tool
/// only spells out the gestures it reacts to.
pub trait ToolBehavior {
    /// Left button press.
    fn on_left_click(&self, _session: &mut EditorSession, _x: f32, _y: f32) -> bool {
        false
    }

    /// Right button press. The host suppresses the platform context menu
    /// before this is called.
    fn on_right_click(&self, _session: &mut EditorSession, _x: f32, _y: f32) -> bool {
        false
    }

    /// Pointer moved with no button requirement.
    fn on_pointer_move(&self, _session: &mut EditorSession, _x: f32, _y: f32) -> bool {
        false
    }
}

/// Places states: left click for an ordinary state, right click for an
/// accepting one. Clicks on or near an existing state do nothing.
pub struct StateTool;

impl ToolBehavior for StateTool {
    fn on_left_click(&self, session: &mut EditorSession, x: f32, y: f32) -> bool {
        place_state(session, x, y, false)
    }

    fn on_right_click(&self, session: &mut EditorSession, x: f32, y: f32) -> bool {
        place_state(session, x, y, true)
    }
}

fn place_state(session: &mut EditorSession, x: f32, y: f32, accepting: bool) -> bool {
    let hit = find_nearest_state(x, y, session.diagram().states(), session.surround_multiplier());
    if !hit.is_clear() {
        tracing::debug!("state tool: ({x}, {y}) is on or near an existing state, nothing placed");
        return false;
    }

    let id = session.diagram_mut().add_state(x, y, accepting, false);
    tracing::debug!("state tool: created state {id} at ({x}, {y}), accepting: {accepting}");
    true
}

/// Connects states. The first click directly on a state starts a rubber
/// band from it; the next click directly on a state (the same one included)
/// completes the transition. Clicks on empty surface change nothing.
pub struct TransitionTool;

impl ToolBehavior for TransitionTool {
    fn on_left_click(&self, session: &mut EditorSession, x: f32, y: f32) -> bool {
        let hit = find_nearest_state(x, y, session.diagram().states(), session.surround_multiplier());
        if !hit.directly_within {
            return false;
        }
        let Some(clicked) = hit.state else {
            return false;
        };

        match session.pending() {
            None => {
                session.set_pending(PendingTransition::new(clicked, x, y));
                tracing::debug!("transition tool: drag started from state {clicked}");
                true
            }
            Some(pending) => {
                let source = pending.source;
                session.clear_pending();
                // Labels stay empty until a text-entry collaborator exists
                session.diagram_mut().add_transition(source, "", clicked);
                tracing::debug!("transition tool: connected state {source} to state {clicked}");
                true
            }
        }
    }

    fn on_pointer_move(&self, session: &mut EditorSession, x: f32, y: f32) -> bool {
        match session.pending_mut() {
            Some(pending) => {
                pending.move_cursor(x, y);
                tracing::trace!("transition tool: rubber band at ({x}, {y})");
                true
            }
            None => false,
        }
    }
}

/// Reserved hook: receives events, does nothing.
pub struct SelectTool;

impl ToolBehavior for SelectTool {}

/// Reserved hook: receives events, does nothing.
pub struct EditTool;

impl ToolBehavior for EditTool {}
