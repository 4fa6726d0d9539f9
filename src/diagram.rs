use std::fmt;

/// Default radius for newly created states, in surface-local pixels.
pub const DEFAULT_STATE_RADIUS: f32 = 10.0;

/// Identifier of a state within a [`Diagram`].
///
/// Ids are allocated by [`Diagram::add_state`]: the first state gets id 1,
/// later states get strictly larger ids, and ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub u32);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, labeled transition from its owning state to `target`.
///
/// Transitions reference their target by [`StateId`] rather than by
/// position, so reordering the state list cannot silently retarget them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Id of the state this transition leads to.
    pub target: StateId,
    /// Input symbol or annotation shown on the edge. Empty until a label
    /// editor exists.
    pub label: String,
}

impl Transition {
    /// Create a transition to `target` with the given label.
    pub fn new(target: StateId, label: impl Into<String>) -> Self {
        Self { target, label: label.into() }
    }
}

/// A single automaton state: a circle on the drawing surface plus its
/// outgoing transitions.
#[derive(Debug, Clone)]
pub struct State {
    pub id: StateId,
    /// Center x, in surface-local coordinates.
    pub x: f32,
    /// Center y, in surface-local coordinates.
    pub y: f32,
    /// Drawn radius; always positive.
    pub radius: f32,
    /// Accepting states are drawn with the accepting fill color.
    pub accepting: bool,
    /// Reserved flag; no tool sets it and rendering ignores it.
    pub initial: bool,
    /// Outgoing transitions, in creation order.
    pub transitions: Vec<Transition>,
}

impl State {
    /// Center of the state's circle.
    pub fn center(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// The in-progress transition the transition tool is dragging out.
///
/// Transient interaction state: it exists from the starting click on a
/// source state until the completing click on a target, lives in the
/// editor session, and is never stored in the diagram itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransition {
    /// State the drag started on.
    pub source: StateId,
    /// Live end of the rubber-band line, in surface-local coordinates.
    pub cursor_x: f32,
    /// Live end of the rubber-band line, in surface-local coordinates.
    pub cursor_y: f32,
}

impl PendingTransition {
    /// Start a pending transition at the given cursor position.
    pub fn new(source: StateId, cursor_x: f32, cursor_y: f32) -> Self {
        Self { source, cursor_x, cursor_y }
    }

    /// Move the rubber-band end to follow the pointer.
    pub fn move_cursor(&mut self, x: f32, y: f32) {
        self.cursor_x = x;
        self.cursor_y = y;
    }
}

/// A mutable automaton diagram: every state, in creation order.
///
/// The diagram is the single owner of all [`State`]s. It is only mutated
/// through [`add_state`](Diagram::add_state) and
/// [`add_transition`](Diagram::add_transition); there is no removal, so a
/// transition's target id always resolves.
///
/// # Example
///
/// ```
/// use slint_automaton_editor::Diagram;
///
/// let mut diagram = Diagram::new();
/// let a = diagram.add_state(10.0, 10.0, false, false);
/// let b = diagram.add_state(100.0, 100.0, true, false);
/// diagram.add_transition(a, "0", b);
///
/// assert_eq!(diagram.len(), 2);
/// assert_eq!(diagram.get(a).unwrap().transitions[0].target, b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    states: Vec<State>,
    last_id: u32,
}

impl Diagram {
    /// Create an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state at the given surface-local position and return its id.
    ///
    /// The id counter is incremented first, so the first state gets id 1.
    /// Coordinates are stored as given; keeping the circle on the visible
    /// surface is the caller's concern, not a model invariant.
    pub fn add_state(&mut self, x: f32, y: f32, accepting: bool, initial: bool) -> StateId {
        self.last_id += 1;
        let id = StateId(self.last_id);
        self.states.push(State {
            id,
            x,
            y,
            radius: DEFAULT_STATE_RADIUS,
            accepting,
            initial,
            transitions: Vec::new(),
        });
        id
    }

    /// Append a transition from `source` to `target`.
    ///
    /// Duplicate edges, parallel edges with different labels, and self
    /// loops are all permitted; the diagram records exactly what it is
    /// given. Returns `false` without mutating anything when `source` does
    /// not name a state in this diagram.
    pub fn add_transition(
        &mut self,
        source: StateId,
        label: impl Into<String>,
        target: StateId,
    ) -> bool {
        match self.get_mut(source) {
            Some(state) => {
                state.transitions.push(Transition::new(target, label));
                true
            }
            None => false,
        }
    }

    /// Find a state by id.
    pub fn get(&self, id: StateId) -> Option<&State> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Find a state by id, mutably.
    pub fn get_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.iter_mut().find(|s| s.id == id)
    }

    /// All states, in creation order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True if no state has been created yet.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The most recently allocated id value, or 0 if no state exists yet.
    pub fn last_id(&self) -> u32 {
        self.last_id
    }

    /// Total number of transitions across all states.
    pub fn transition_count(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }
}
