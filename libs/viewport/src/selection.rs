//! # Selection
//!
//! Edit modes, tools and the set of selected mesh elements.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Which kind of element clicks act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    Object,
    Vertex,
    Edge,
    Face,
}

impl EditMode {
    pub const ALL: [EditMode; 4] = [
        EditMode::Object,
        EditMode::Vertex,
        EditMode::Edge,
        EditMode::Face,
    ];

    /// Next mode in Object → Vertex → Edge → Face → Object order.
    pub fn cycle(self) -> Self {
        match self {
            EditMode::Object => EditMode::Vertex,
            EditMode::Vertex => EditMode::Edge,
            EditMode::Edge => EditMode::Face,
            EditMode::Face => EditMode::Object,
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditMode::Object => "Object",
            EditMode::Vertex => "Vertex",
            EditMode::Edge => "Edge",
            EditMode::Face => "Face",
        };
        f.write_str(name)
    }
}

/// Active pointer tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Select,
    Move,
    Rotate,
    Scale,
    Extrude,
    Delete,
    AddVertex,
    AddFace,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::Select => "select",
            Tool::Move => "move",
            Tool::Rotate => "rotate",
            Tool::Scale => "scale",
            Tool::Extrude => "extrude",
            Tool::Delete => "delete",
            Tool::AddVertex => "add_vertex",
            Tool::AddFace => "add_face",
        };
        f.write_str(name)
    }
}

/// Selected vertices, faces and edges.
///
/// Sets are ordered so deletions can walk indices from highest to lowest.
/// Edges are stored with the smaller vertex index first.
///
/// ## Example
///
/// ```rust
/// use model3d_viewport::Selection;
///
/// let mut selection = Selection::default();
/// selection.click_vertex(Some(3), false);
/// selection.click_vertex(Some(5), true);
/// selection.click_vertex(Some(3), true);
/// assert_eq!(selection.vertices().iter().copied().collect::<Vec<_>>(), vec![5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    vertices: BTreeSet<u32>,
    faces: BTreeSet<usize>,
    edges: BTreeSet<(u32, u32)>,
}

impl Selection {
    pub fn vertices(&self) -> &BTreeSet<u32> {
        &self.vertices
    }

    pub fn faces(&self) -> &BTreeSet<usize> {
        &self.faces
    }

    pub fn edges(&self) -> &BTreeSet<(u32, u32)> {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty() && self.edges.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
        self.edges.clear();
    }

    pub fn clear_vertices(&mut self) {
        self.vertices.clear();
    }

    pub fn clear_faces(&mut self) {
        self.faces.clear();
    }

    /// Applies a vertex-mode click. A plain click replaces the selection,
    /// an additive click toggles the hit.
    pub fn click_vertex(&mut self, hit: Option<u32>, additive: bool) {
        click(&mut self.vertices, hit, additive);
    }

    /// Applies a face-mode click.
    pub fn click_face(&mut self, hit: Option<usize>, additive: bool) {
        click(&mut self.faces, hit, additive);
    }

    pub fn toggle_edge(&mut self, a: u32, b: u32) {
        let edge = normalize_edge(a, b);
        if !self.edges.remove(&edge) {
            self.edges.insert(edge);
        }
    }

    pub fn contains_vertex(&self, index: u32) -> bool {
        self.vertices.contains(&index)
    }

    pub fn contains_face(&self, index: usize) -> bool {
        self.faces.contains(&index)
    }

    pub fn contains_edge(&self, a: u32, b: u32) -> bool {
        self.edges.contains(&normalize_edge(a, b))
    }
}

/// A plain click replaces the set with the hit, or empties it on a miss.
/// An additive click toggles the hit and ignores a miss.
fn click<T: Ord>(set: &mut BTreeSet<T>, hit: Option<T>, additive: bool) {
    match (hit, additive) {
        (Some(index), true) => {
            if set.contains(&index) {
                set.remove(&index);
            } else {
                set.insert(index);
            }
        }
        (Some(index), false) => {
            set.clear();
            set.insert(index);
        }
        (None, true) => {}
        (None, false) => set.clear(),
    }
}

fn normalize_edge(a: u32, b: u32) -> (u32, u32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_mode() {
        let mut mode = EditMode::Object;
        let mut seen = Vec::new();
        for _ in 0..4 {
            mode = mode.cycle();
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![EditMode::Vertex, EditMode::Edge, EditMode::Face, EditMode::Object]
        );
    }

    #[test]
    fn test_plain_click_replaces() {
        let mut selection = Selection::default();
        selection.click_face(Some(1), false);
        selection.click_face(Some(2), false);
        assert_eq!(selection.faces().len(), 1);
        assert!(selection.contains_face(2));
    }

    #[test]
    fn test_plain_miss_clears() {
        let mut selection = Selection::default();
        selection.click_vertex(Some(1), false);
        selection.click_vertex(None, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_additive_miss_keeps() {
        let mut selection = Selection::default();
        selection.click_vertex(Some(1), false);
        selection.click_vertex(None, true);
        assert!(selection.contains_vertex(1));
    }

    #[test]
    fn test_edges_are_unordered() {
        let mut selection = Selection::default();
        selection.toggle_edge(4, 2);
        assert!(selection.contains_edge(2, 4));
        assert_eq!(selection.edges().iter().next(), Some(&(2, 4)));
        selection.toggle_edge(2, 4);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_tool_names() {
        assert_eq!(Tool::AddVertex.to_string(), "add_vertex");
        assert_eq!(Tool::default(), Tool::Select);
        assert_eq!(EditMode::Face.to_string(), "Face");
    }
}
