//! # Draw List
//!
//! Projected primitives for one frame, in paint order: filled faces,
//! wireframe edges, then markers. Rasterizing them is left to the host.

use crate::camera::Camera;
use crate::selection::{EditMode, Selection};
use config::constants::{DEFAULT_COLOR, SELECTION_COLOR};
use model3d_mesh::{Color, Mesh, Vector2};

const VERTEX_RADIUS: f64 = 3.0;
const SELECTED_VERTEX_RADIUS: f64 = 5.0;
const FACE_CENTER_RADIUS: f64 = 2.0;
const SELECTED_FACE_CENTER_RADIUS: f64 = 4.0;

/// A filled face outline.
#[derive(Debug, Clone, PartialEq)]
pub struct FacePolygon {
    pub face: usize,
    pub points: Vec<Vector2>,
    pub fill: Color,
    pub selected: bool,
}

/// A wireframe segment between two projected vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLine {
    pub from: Vector2,
    pub to: Vector2,
}

/// A round marker for a vertex or a face center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Vertex or face index.
    pub index: usize,
    pub center: Vector2,
    pub radius: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub faces: Vec<FacePolygon>,
    pub edges: Vec<EdgeLine>,
    pub vertex_markers: Vec<Marker>,
    pub face_markers: Vec<Marker>,
}

impl DrawList {
    /// Projects `mesh` for the given mode.
    ///
    /// - faces are filled in every mode but Vertex
    /// - edges are drawn in Edge and Vertex modes
    /// - vertex markers appear in Vertex mode, face-center markers in Face mode
    pub fn build(mesh: &Mesh, camera: &Camera, mode: EditMode, selection: &Selection) -> Self {
        let mut list = DrawList::default();
        if mesh.is_empty() {
            return list;
        }

        let projected: Vec<Vector2> = mesh.vertices().iter().map(|v| camera.project(*v)).collect();
        let at = |i: u32| projected.get(i as usize).copied();

        if mode != EditMode::Vertex {
            for (index, face) in mesh.faces().iter().enumerate() {
                if face.arity() < 3 {
                    continue;
                }
                let selected = selection.contains_face(index);
                let fill = if selected {
                    Color::from_array(SELECTION_COLOR)
                } else {
                    mesh.material(face.material_index)
                        .map_or(Color::from_array(DEFAULT_COLOR), |m| m.diffuse)
                };
                list.faces.push(FacePolygon {
                    face: index,
                    points: face.vertices.iter().filter_map(|&i| at(i)).collect(),
                    fill,
                    selected,
                });
            }
        }

        if matches!(mode, EditMode::Edge | EditMode::Vertex) {
            for face in mesh.faces() {
                list.edges.extend(
                    face.edges()
                        .filter_map(|(a, b)| Some(EdgeLine { from: at(a)?, to: at(b)? })),
                );
            }
        }

        match mode {
            EditMode::Vertex => {
                list.vertex_markers = projected
                    .iter()
                    .enumerate()
                    .map(|(index, &center)| {
                        let selected = selection.contains_vertex(index as u32);
                        Marker {
                            index,
                            center,
                            radius: if selected { SELECTED_VERTEX_RADIUS } else { VERTEX_RADIUS },
                            selected,
                        }
                    })
                    .collect();
            }
            EditMode::Face => {
                list.face_markers = (0..mesh.face_count())
                    .map(|index| {
                        let selected = selection.contains_face(index);
                        Marker {
                            index,
                            center: camera.project(mesh.face_center(index)),
                            radius: if selected {
                                SELECTED_FACE_CENTER_RADIUS
                            } else {
                                FACE_CENTER_RADIUS
                            },
                            selected,
                        }
                    })
                    .collect();
            }
            EditMode::Object | EditMode::Edge => {}
        }

        list
    }
}
