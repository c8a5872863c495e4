//! # Viewport Controller
//!
//! Pointer and key handling for an editable mesh view. The controller owns
//! view state only; the mesh is borrowed per call so the caller decides
//! which document is being edited.

use crate::camera::Camera;
use crate::draw::DrawList;
use crate::picking::{pick_face, pick_vertex};
use crate::selection::{EditMode, Selection, Tool};
use config::ViewerConfig;
use log::{debug, trace};
use model3d_mesh::{Mesh, Vector2, Vector3};
use std::collections::BTreeSet;

/// What a pointer drag did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    /// Below the drag threshold, or nothing applies to the current tool.
    None,
    /// The camera orbited.
    Orbit,
    /// Selected vertices moved.
    Move,
}

/// Camera, edit mode, tool, selection and drag state for one view.
///
/// ## Example
///
/// ```rust
/// use model3d_mesh::primitives::create_cube;
/// use model3d_viewport::{EditMode, Viewport};
///
/// let mut mesh = create_cube(1.0, "Box").unwrap();
/// let mut view = Viewport::default();
/// view.set_mode(EditMode::Face);
///
/// let center = view.camera().project(mesh.face_center(0));
/// view.press(&mesh, center, false);
/// view.release();
///
/// assert_eq!(view.extrude_selected(&mut mesh, 0.5), 1);
/// assert_eq!(mesh.face_count(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct Viewport {
    config: ViewerConfig,
    camera: Camera,
    mode: EditMode,
    tool: Tool,
    selection: Selection,
    last_pointer: Option<Vector2>,
    dragging: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewport {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            camera: Camera::new(config.width, config.height),
            config,
            mode: EditMode::default(),
            tool: Tool::default(),
            selection: Selection::default(),
            last_pointer: None,
            dragging: false,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    // =========================================================================
    // MODES
    // =========================================================================

    /// Switches the edit mode and drops the selection.
    pub fn set_mode(&mut self, mode: EditMode) {
        debug!("edit mode {} -> {mode}", self.mode);
        self.mode = mode;
        self.selection.clear();
    }

    pub fn cycle_mode(&mut self) {
        self.set_mode(self.mode.cycle());
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // =========================================================================
    // POINTER
    // =========================================================================

    /// Pointer down. With the select tool this picks under the pointer;
    /// `additive` toggles instead of replacing.
    pub fn press(&mut self, mesh: &Mesh, point: Vector2, additive: bool) {
        self.last_pointer = Some(point);
        self.dragging = false;

        if self.tool != Tool::Select {
            return;
        }
        match self.mode {
            EditMode::Vertex => {
                let hit = pick_vertex(mesh, &self.camera, point, self.config.pick_radius);
                self.selection.click_vertex(hit, additive);
            }
            EditMode::Face => {
                let hit = pick_face(mesh, &self.camera, point);
                self.selection.click_face(hit, additive);
            }
            EditMode::Object | EditMode::Edge => {}
        }
    }

    /// Pointer motion with the button held.
    ///
    /// Each call measures travel from the previous pointer position. Once
    /// one step exceeds the drag threshold on either axis the gesture counts
    /// as a drag until release.
    pub fn drag(&mut self, mesh: &mut Mesh, point: Vector2) -> DragEffect {
        let Some(last) = self.last_pointer.replace(point) else {
            return DragEffect::None;
        };
        let delta = point - last;

        if !self.dragging
            && (delta.x.abs() > self.config.drag_threshold || delta.y.abs() > self.config.drag_threshold)
        {
            self.dragging = true;
        }
        if !self.dragging {
            return DragEffect::None;
        }

        if self.tool == Tool::Select && self.mode == EditMode::Object {
            self.camera.orbit(delta.x, delta.y);
            DragEffect::Orbit
        } else if self.tool == Tool::Move && !self.selection.is_empty() {
            self.move_selection(mesh, delta);
            DragEffect::Move
        } else {
            DragEffect::None
        }
    }

    pub fn release(&mut self) {
        self.last_pointer = None;
        self.dragging = false;
    }

    /// Wheel step: `up` zooms in.
    pub fn wheel(&mut self, up: bool) {
        if up {
            self.camera.zoom_in();
        } else {
            self.camera.zoom_out();
        }
    }

    /// Vertices touched by the selection: selected vertices plus every
    /// vertex of a selected face.
    fn selected_vertex_set(&self, mesh: &Mesh) -> BTreeSet<u32> {
        let mut set = self.selection.vertices().clone();
        for &face in self.selection.faces() {
            if let Some(face) = mesh.face(face) {
                set.extend(face.vertices.iter().copied());
            }
        }
        set
    }

    fn move_selection(&self, mesh: &mut Mesh, delta: Vector2) {
        let factor = self.camera.drag_factor();
        let offset = Vector3::new(delta.x * factor, -delta.y * factor, 0.0);
        let targets = self.selected_vertex_set(mesh);
        trace!("moving {} vertices by {offset}", targets.len());
        for index in targets {
            mesh.translate_vertex(index, offset);
        }
    }

    // =========================================================================
    // EDITS
    // =========================================================================

    /// Deletes the selected vertices, or the selected faces when no vertex
    /// is selected, highest index first. Normals are recomputed afterwards.
    ///
    /// Returns false when nothing is selected.
    pub fn delete_selected(&mut self, mesh: &mut Mesh) -> bool {
        if self.selection.is_empty() {
            return false;
        }

        if !self.selection.vertices().is_empty() {
            let removed = self
                .selection
                .vertices()
                .iter()
                .rev()
                .filter(|&&v| mesh.remove_vertex(v))
                .count();
            debug!("deleted {removed} vertices from '{}'", mesh.name());
            // face indices shift when vertices take faces with them
            self.selection.clear();
        } else if !self.selection.faces().is_empty() {
            let removed = self
                .selection
                .faces()
                .iter()
                .rev()
                .filter(|&&f| mesh.remove_face(f))
                .count();
            debug!("deleted {removed} faces from '{}'", mesh.name());
            self.selection.clear_faces();
        }

        mesh.calculate_normals();
        true
    }

    /// Extrudes every selected face by `distance` along its normal. Only
    /// acts in Face mode. Returns the number of faces extruded.
    pub fn extrude_selected(&mut self, mesh: &mut Mesh, distance: f64) -> usize {
        if self.mode != EditMode::Face || self.selection.faces().is_empty() {
            return 0;
        }

        let extruded = self
            .selection
            .faces()
            .iter()
            .filter(|&&f| mesh.extrude_face(f, distance).is_some())
            .count();
        mesh.calculate_normals();
        debug!("extruded {extruded} faces of '{}' by {distance}", mesh.name());
        extruded
    }

    /// [`Viewport::extrude_selected`] with the configured distance.
    pub fn extrude_selected_default(&mut self, mesh: &mut Mesh) -> usize {
        let distance = self.config.extrude_distance;
        self.extrude_selected(mesh, distance)
    }

    /// Projected primitives for the current state.
    pub fn draw_list(&self, mesh: &Mesh) -> DrawList {
        DrawList::build(mesh, &self.camera, self.mode, &self.selection)
    }
}

#[cfg(test)]
mod tests;
