//! # Slint Automaton Editor Library
//!
//! A Slint component library for building finite-state-automaton diagram
//! editors: place states on a drawing surface, mark them accepting, and
//! connect them with transitions by dragging between circles.
//!
//! ## Features
//!
//! - **Tool-Driven Editing** - State, transition, select, and edit tools
//!   dispatched per pointer event
//! - **Surface Seam** - All drawing goes through the [`DrawSurface`] trait;
//!   the core never touches a window
//! - **Recorded Scenes** - [`SceneSurface`] captures each frame and mirrors
//!   it into Slint `VecModel`s for rendering with `for` loops
//! - **Headless Testing** - Sessions run against recording surfaces with no
//!   backend
//!
//! ## Quick Start
//!
//! ```
//! use slint_automaton_editor::{EditorSession, SceneSurface, Tool};
//!
//! let mut session = EditorSession::new();
//! let mut surface = SceneSurface::new(800.0, 600.0);
//!
//! // Place two states, then connect them with the transition tool
//! session.left_click(100.0, 100.0, &mut surface);
//! session.left_click(300.0, 100.0, &mut surface);
//! session.set_tool(Tool::Transition);
//! session.left_click(100.0, 100.0, &mut surface);
//! session.left_click(300.0, 100.0, &mut surface);
//!
//! assert_eq!(session.diagram().len(), 2);
//! assert_eq!(session.diagram().transition_count(), 1);
//! ```
//!
//! ## Core Components
//!
//! - [`EditorSession`] - One diagram plus its interaction state; all
//!   pointer events enter here
//! - [`Diagram`] - States and their outgoing transitions
//! - [`EditorController`] - Slint-facing wrapper: callback factories,
//!   coordinate mapping, scene model sync
//! - [`SceneSurface`] - Recording [`DrawSurface`] with Slint model binding
//!
//! ## Rust Helpers
//!
//! - [`find_nearest_state`] - Hit-test a position against all states
//! - [`redraw`] - Walk a diagram onto any [`DrawSurface`]
//! - [`Tool::from_name`] - Parse toolbar tool names

pub mod controller;
pub mod diagram;
pub mod error;
pub mod render;
pub mod scene;
pub mod session;
pub mod tools;

// Re-export the public surface
pub use controller::EditorController;
pub use diagram::{
    Diagram, PendingTransition, State, StateId, Transition, DEFAULT_STATE_RADIUS,
};
pub use error::{EditorError, Result};
pub use hit_test::{find_nearest_state, NearestState, DEFAULT_SURROUND_MULTIPLIER};
pub use render::{redraw, DrawSurface, Font, RenderStyle};
pub use scene::{CirclePrimitive, LinePrimitive, SceneSurface, TextPrimitive};
pub use session::EditorSession;
pub use tools::{EditTool, SelectTool, StateTool, Tool, ToolBehavior, TransitionTool};
