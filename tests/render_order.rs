//! What ends up on the surface after each gesture: full-frame redraws,
//! draw order, fills, label placement, and the rubber band.

mod common;

use common::harness::EditorHarness;
use common::{label_texts, line_endpoints};
use slint_automaton_editor::{EditorSession, SceneSurface, Tool};

// ============================================================================
// Full redraw per mutation
// ============================================================================

#[test]
fn test_each_mutation_draws_a_complete_frame() {
    let mut harness = EditorHarness::new();
    harness.place_state(100.0, 100.0);
    harness.place_state(300.0, 100.0);

    // The second frame starts from a clear and repaints state 1 as well
    assert_eq!(harness.frames(), 2);
    assert_eq!(harness.circles().len(), 2);
    assert_eq!(label_texts(&harness.surface), vec!["1", "2"]);
}

#[test]
fn test_empty_diagram_frame_is_blank() {
    let session = EditorSession::new();
    let mut surface = SceneSurface::new(800.0, 600.0);

    session.redraw(&mut surface);

    assert_eq!(surface.clear_count(), 1);
    assert!(surface.circles().is_empty());
    assert!(surface.texts().is_empty());
    assert!(surface.lines().is_empty());
}

#[test]
fn test_frame_holds_no_stale_primitives() {
    let mut harness = EditorHarness::new();
    let a = harness.place_state(100.0, 100.0);
    let b = harness.place_state(300.0, 100.0);
    harness.connect(a, b);

    assert_eq!(harness.circles().len(), 2);
    assert_eq!(harness.texts().len(), 2);
    assert_eq!(harness.lines().len(), 1);
}

// ============================================================================
// Order and placement
// ============================================================================

#[test]
fn test_states_render_in_creation_order() {
    let mut harness = EditorHarness::new();
    harness.place_state(100.0, 100.0);
    harness.place_state(300.0, 100.0);
    harness.place_state(500.0, 100.0);

    let xs: Vec<f32> = harness.circles().iter().map(|c| c.x).collect();
    assert_eq!(xs, vec![100.0, 300.0, 500.0]);
    assert_eq!(label_texts(&harness.surface), vec!["1", "2", "3"]);
}

#[test]
fn test_labels_sit_on_state_centers() {
    let mut harness = EditorHarness::new();
    harness.place_state(123.0, 456.0);

    let style = *harness.session.style();
    let label = &harness.texts()[0];
    assert_eq!((label.x, label.y), (123.0, 456.0));
    assert_eq!(label.font, style.label_font);
    assert_eq!(label.color, style.label);
}

#[test]
fn test_transition_lines_join_centers_not_click_points() {
    let mut harness = EditorHarness::new();
    harness.place_state(100.0, 100.0);
    harness.place_state(300.0, 100.0);

    // Clicks land inside the circles but off their centers
    harness.select_tool(Tool::Transition);
    harness.click(105.0, 100.0);
    harness.click(297.0, 103.0);

    assert_eq!(
        line_endpoints(&harness.surface),
        vec![(100.0, 100.0, 300.0, 100.0)]
    );
}

// ============================================================================
// Fills
// ============================================================================

#[test]
fn test_accepting_fill_differs_from_standard() {
    let mut harness = EditorHarness::new();
    harness.place_state(100.0, 100.0);
    harness.select_tool(Tool::State);
    harness.right_click(300.0, 100.0);

    let style = *harness.session.style();
    let circles = harness.circles();
    assert_eq!(circles[0].fill, style.standard_fill);
    assert_eq!(circles[1].fill, style.accepting_fill);
    assert_ne!(circles[0].fill, circles[1].fill);
    assert_eq!(circles[0].outline, style.outline);
    assert_eq!(circles[1].outline, style.outline);
}

// ============================================================================
// Rubber band
// ============================================================================

#[test]
fn test_rubber_band_is_the_last_line() {
    let mut harness = EditorHarness::new();
    let a = harness.place_state(100.0, 100.0);
    let b = harness.place_state(300.0, 100.0);
    harness.connect(a, b);

    // A second drag starts while the settled transition is on screen
    harness.click(100.0, 100.0);
    harness.move_to(400.0, 300.0);

    let lines = line_endpoints(&harness.surface);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], (100.0, 100.0, 300.0, 100.0));
    assert_eq!(lines[1], (100.0, 100.0, 400.0, 300.0));
}

#[test]
fn test_band_color_matches_transition_color() {
    let mut harness = EditorHarness::new();
    harness.place_state(100.0, 100.0);

    harness.select_tool(Tool::Transition);
    harness.click(100.0, 100.0);
    harness.move_to(200.0, 200.0);

    let style = *harness.session.style();
    assert_eq!(harness.lines()[0].color, style.transition);
}
