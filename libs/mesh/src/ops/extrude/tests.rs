//! # Extrusion Tests

use crate::math::Vector3;
use crate::mesh::Mesh;
use approx::assert_relative_eq;

/// Unit square in the XY plane, normal +Z.
fn square() -> Mesh {
    let mut mesh = Mesh::new("Square");
    mesh.add_vertex(0.0, 0.0, 0.0);
    mesh.add_vertex(1.0, 0.0, 0.0);
    mesh.add_vertex(1.0, 1.0, 0.0);
    mesh.add_vertex(0.0, 1.0, 0.0);
    mesh.add_face_default(vec![0, 1, 2, 3]).unwrap();
    mesh
}

#[test]
fn test_extrude_grows_by_arity() {
    let mut mesh = square();
    let cap = mesh.extrude_face(0, 2.0).unwrap();

    assert_eq!(cap, vec![4, 5, 6, 7]);
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 5);
}

#[test]
fn test_extrude_cap_moves_by_distance() {
    let mut mesh = square();
    let before = mesh.face_center(0);
    mesh.extrude_face(0, 2.0).unwrap();
    let after = mesh.face_center(0);

    assert_relative_eq!(after.distance(before), 2.0, epsilon = 1e-12);
    assert_relative_eq!(after.z, 2.0);
}

#[test]
fn test_extrude_negative_distance() {
    let mut mesh = square();
    let before = mesh.face_center(0);
    mesh.extrude_face(0, -0.5).unwrap();

    assert_relative_eq!(mesh.face_center(0).distance(before), 0.5, epsilon = 1e-12);
    assert_relative_eq!(mesh.vertex(4).unwrap().z, -0.5);
}

#[test]
fn test_extrude_side_quads() {
    let mut mesh = square();
    mesh.extrude_face(0, 1.0).unwrap();

    let sides: Vec<_> = mesh.faces()[1..].iter().map(|f| f.vertices.clone()).collect();
    assert_eq!(
        sides,
        vec![
            vec![0, 1, 5, 4],
            vec![1, 2, 6, 5],
            vec![2, 3, 7, 6],
            vec![3, 0, 4, 7],
        ]
    );
    assert!(mesh.faces()[1..].iter().all(|f| f.material_index == 0));
}

#[test]
fn test_extrude_keeps_cap_material() {
    let mut mesh = square();
    mesh.add_face(vec![0, 2, 3], 3).unwrap();
    mesh.extrude_face(1, 1.0).unwrap();
    assert_eq!(mesh.faces()[1].material_index, 3);
}

#[test]
fn test_extrude_degenerate_face_does_not_move() {
    let mut mesh = Mesh::default();
    mesh.add_vertex(0.0, 0.0, 0.0);
    mesh.add_vertex(1.0, 0.0, 0.0);
    mesh.add_vertex(2.0, 0.0, 0.0);
    mesh.add_face_default(vec![0, 1, 2]).unwrap();

    mesh.extrude_face(0, 3.0).unwrap();

    assert_eq!(mesh.vertex(3), Some(Vector3::ZERO));
    assert_eq!(mesh.face_count(), 4);
}

#[test]
fn test_extrude_out_of_range() {
    let mut mesh = square();
    assert_eq!(mesh.extrude_face(1, 1.0), None);
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 1);
}
