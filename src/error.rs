use thiserror::Error;

/// Errors surfaced at the editor's outer boundaries.
///
/// The editor core itself is total: hit tests, tool handlers, and redraws
/// never fail. Errors only arise where the host UI hands in raw values or
/// asks for a capability that has no implementation yet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The toolbar reported a tool name the editor does not recognize.
    #[error("unknown tool: {name:?}")]
    UnknownTool { name: String },

    /// Transition labels need a text-entry collaborator that does not
    /// exist yet; completed transitions keep an empty label until it does.
    #[error("transition label entry is not yet supported")]
    LabelEntryUnavailable,
}

/// Convenience alias for results carrying an [`EditorError`].
pub type Result<T> = std::result::Result<T, EditorError>;
