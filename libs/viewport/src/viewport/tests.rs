//! # Tests for the Viewport Controller

use super::*;
use approx::assert_relative_eq;
use config::constants::{MAX_ZOOM, MIN_ZOOM};
use model3d_mesh::primitives::{create_cube, create_plane};

fn quad() -> Mesh {
    let mut mesh = Mesh::new("Quad");
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
        mesh.add_vertex(x, y, 0.0);
    }
    mesh.add_face(vec![0, 1, 2, 3], 0).unwrap();
    mesh
}

fn vertex_at(view: &Viewport, mesh: &Mesh, index: u32) -> Vector2 {
    view.camera().project(mesh.vertex(index).unwrap())
}

// =============================================================================
// SELECTION
// =============================================================================

#[test]
fn test_vertex_click_selects_hit() {
    let mesh = quad();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Vertex);

    view.press(&mesh, vertex_at(&view, &mesh, 2), false);

    assert!(view.selection().contains_vertex(2));
    assert_eq!(view.selection().vertices().len(), 1);
}

#[test]
fn test_shift_click_toggles() {
    let mesh = quad();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Vertex);

    view.press(&mesh, vertex_at(&view, &mesh, 0), false);
    view.press(&mesh, vertex_at(&view, &mesh, 1), true);
    assert_eq!(view.selection().vertices().len(), 2);

    view.press(&mesh, vertex_at(&view, &mesh, 0), true);
    assert!(!view.selection().contains_vertex(0));
    assert!(view.selection().contains_vertex(1));
}

#[test]
fn test_click_empty_space_clears() {
    let mesh = quad();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Vertex);
    view.press(&mesh, vertex_at(&view, &mesh, 0), false);

    view.press(&mesh, Vector2::new(-500.0, -500.0), false);

    assert!(view.selection().is_empty());
}

#[test]
fn test_object_and_edge_clicks_do_nothing() {
    let mesh = quad();
    let mut view = Viewport::default();
    for mode in [EditMode::Object, EditMode::Edge] {
        view.set_mode(mode);
        view.press(&mesh, vertex_at(&view, &mesh, 0), false);
        assert!(view.selection().is_empty());
    }
}

#[test]
fn test_non_select_tool_does_not_pick() {
    let mesh = quad();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Vertex);
    view.set_tool(Tool::Move);
    view.press(&mesh, vertex_at(&view, &mesh, 0), false);
    assert!(view.selection().is_empty());
}

#[test]
fn test_mode_change_clears_selection() {
    let mesh = quad();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Vertex);
    view.press(&mesh, vertex_at(&view, &mesh, 0), false);

    view.cycle_mode();

    assert_eq!(view.mode(), EditMode::Edge);
    assert!(view.selection().is_empty());
}

// =============================================================================
// DRAG
// =============================================================================

#[test]
fn test_small_motion_is_not_a_drag() {
    let mut mesh = quad();
    let mut view = Viewport::default();
    let yaw = view.camera().yaw_deg;

    view.press(&mesh, Vector2::new(100.0, 100.0), false);
    let effect = view.drag(&mut mesh, Vector2::new(102.0, 103.0));

    assert_eq!(effect, DragEffect::None);
    assert!(!view.is_dragging());
    assert_relative_eq!(view.camera().yaw_deg, yaw);
}

#[test]
fn test_object_drag_orbits() {
    let mut mesh = quad();
    let mut view = Viewport::default();

    view.press(&mesh, Vector2::new(100.0, 100.0), false);
    let effect = view.drag(&mut mesh, Vector2::new(120.0, 90.0));

    assert_eq!(effect, DragEffect::Orbit);
    assert_relative_eq!(view.camera().yaw_deg, 55.0);
    assert_relative_eq!(view.camera().pitch_deg, 15.0);
}

#[test]
fn test_drag_without_press_is_ignored() {
    let mut mesh = quad();
    let mut view = Viewport::default();
    assert_eq!(view.drag(&mut mesh, Vector2::new(50.0, 50.0)), DragEffect::None);
}

#[test]
fn test_move_drag_translates_selected_vertices() {
    let mut mesh = quad();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Vertex);
    view.press(&mesh, vertex_at(&view, &mesh, 1), false);
    view.release();

    view.set_tool(Tool::Move);
    view.press(&mesh, Vector2::new(0.0, 0.0), false);
    let effect = view.drag(&mut mesh, Vector2::new(10.0, 20.0));

    assert_eq!(effect, DragEffect::Move);
    let moved = mesh.vertex(1).unwrap();
    assert_relative_eq!(moved.x, 1.1, epsilon = 1e-12);
    assert_relative_eq!(moved.y, -0.2, epsilon = 1e-12);
    assert_relative_eq!(moved.z, 0.0);
    assert_relative_eq!(mesh.vertex(0).unwrap().x, 0.0);
}

#[test]
fn test_move_scales_with_zoom() {
    let mut mesh = quad();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Vertex);
    view.press(&mesh, vertex_at(&view, &mesh, 0), false);
    view.release();
    view.camera_mut().zoom = 200.0;

    view.set_tool(Tool::Move);
    view.press(&mesh, Vector2::ZERO, false);
    view.drag(&mut mesh, Vector2::new(10.0, 0.0));

    assert_relative_eq!(mesh.vertex(0).unwrap().x, 0.05, epsilon = 1e-12);
}

#[test]
fn test_face_move_carries_its_vertices() {
    let mut mesh = create_plane(2.0, 2.0, "Ground").unwrap();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Face);
    let center = view.camera().project(mesh.face_center(0));
    view.press(&mesh, center, false);
    view.release();
    assert!(view.selection().contains_face(0));
    let before: Vec<Vector3> = mesh.vertices().to_vec();

    view.set_tool(Tool::Move);
    view.press(&mesh, Vector2::ZERO, false);
    view.drag(&mut mesh, Vector2::new(0.0, -10.0));

    // face 0 is (0, 1, 2); vertex 3 stays put
    for i in 0..3 {
        assert_relative_eq!(mesh.vertices()[i].y, before[i].y + 0.1, epsilon = 1e-12);
    }
    assert_eq!(mesh.vertices()[3], before[3]);
}

#[test]
fn test_wheel_zoom_stays_in_range() {
    let mut view = Viewport::default();
    for _ in 0..60 {
        view.wheel(true);
        assert!(view.camera().zoom <= MAX_ZOOM);
    }
    for _ in 0..120 {
        view.wheel(false);
        assert!(view.camera().zoom >= MIN_ZOOM);
    }
    assert_relative_eq!(view.camera().zoom, MIN_ZOOM);
}

// =============================================================================
// EDITS
// =============================================================================

#[test]
fn test_delete_selected_vertices_highest_first() {
    let mut mesh = create_cube(1.0, "Box").unwrap();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Vertex);
    view.press(&mesh, vertex_at(&view, &mesh, 1), false);
    view.press(&mesh, vertex_at(&view, &mesh, 6), true);
    assert_eq!(view.selection().vertices().len(), 2);
    let survivors: Vec<Vector3> = mesh
        .vertices()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 1 && *i != 6)
        .map(|(_, v)| *v)
        .collect();

    assert!(view.delete_selected(&mut mesh));

    assert_eq!(mesh.vertices(), survivors.as_slice());
    assert!(view.selection().is_empty());
    assert_eq!(mesh.normal_count(), mesh.face_count());
}

#[test]
fn test_delete_selected_faces() {
    let mut mesh = create_cube(1.0, "Box").unwrap();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Face);
    view.press(&mesh, view.camera().project(mesh.face_center(0)), false);

    assert!(view.delete_selected(&mut mesh));

    assert_eq!(mesh.face_count(), 11);
    assert_eq!(mesh.vertex_count(), 8);
    assert!(view.selection().is_empty());
}

#[test]
fn test_delete_with_empty_selection() {
    let mut mesh = quad();
    let mut view = Viewport::default();
    assert!(!view.delete_selected(&mut mesh));
    assert_eq!(mesh.vertex_count(), 4);
}

#[test]
fn test_extrude_requires_face_mode() {
    let mut mesh = quad();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Vertex);
    assert_eq!(view.extrude_selected(&mut mesh, 0.5), 0);
    assert_eq!(mesh.face_count(), 1);
}

#[test]
fn test_extrude_selected_uses_configured_distance() {
    let mut mesh = quad();
    let mut view = Viewport::default();
    view.set_mode(EditMode::Face);
    view.press(&mesh, view.camera().project(mesh.face_center(0)), false);

    assert_eq!(view.extrude_selected_default(&mut mesh), 1);

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 5);
    assert_eq!(mesh.normal_count(), 5);
    // quad normal is +Z, lid moved 0.5 along it
    for &v in &mesh.face(0).unwrap().vertices {
        assert_relative_eq!(mesh.vertex(v).unwrap().z, 0.5);
    }
}

#[test]
fn test_draw_list_follows_mode() {
    let mesh = quad();
    let mut view = Viewport::default();
    assert_eq!(view.draw_list(&mesh).faces.len(), 1);
    view.set_mode(EditMode::Vertex);
    let list = view.draw_list(&mesh);
    assert!(list.faces.is_empty());
    assert_eq!(list.vertex_markers.len(), 4);
    assert_eq!(list.edges.len(), 4);
}
