//! Common test utilities for integration tests.

#![allow(dead_code)]

pub mod harness;

use slint_automaton_editor::{Diagram, SceneSurface};

/// Ids of all states, in creation order.
pub fn state_ids(diagram: &Diagram) -> Vec<u32> {
    diagram.states().iter().map(|s| s.id.0).collect()
}

/// Endpoints of every line in the current frame, in draw order.
pub fn line_endpoints(scene: &SceneSurface) -> Vec<(f32, f32, f32, f32)> {
    scene
        .lines()
        .iter()
        .map(|l| (l.x1, l.y1, l.x2, l.y2))
        .collect()
}

/// Label texts of the current frame, in draw order.
pub fn label_texts(scene: &SceneSurface) -> Vec<String> {
    scene.texts().iter().map(|t| t.text.clone()).collect()
}
