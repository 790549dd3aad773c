//! Rendering helpers for the BST visualizer.

use bst_core::{Layout, Session};
use macroquad::prelude::*;
use nalgebra::Point3;

pub mod controls;
pub use controls::{Command, ControlPanel};

/// Color of nodes and edges outside the revealed search path.
pub const IDLE_COLOR: Color = Color::new(0.0, 1.0, 0.27, 1.0);
/// Color of nodes and edges on the revealed search path.
pub const PATH_COLOR: Color = Color::new(1.0, 0.42, 0.21, 1.0);

/// Converts a layout coordinate to a macroquad vector.
#[inline]
pub fn to_vec3(p: Point3<f32>) -> Vec3 {
    vec3(p.x, p.y, p.z)
}

/// Draws every edge and node of `layout`, highlighting the revealed path.
///
/// Must be called while a 3D camera is active.
pub fn draw_tree(layout: &Layout, session: &Session, radius: f32) {
    for ((parent, child), a, b) in layout.edge_segments() {
        let color = if session.is_edge_on_path(parent, child) {
            PATH_COLOR
        } else {
            IDLE_COLOR
        };
        draw_line_3d(to_vec3(a), to_vec3(b), color);
    }

    for (value, position) in layout.positions() {
        let color = if session.is_active(value) {
            PATH_COLOR
        } else {
            IDLE_COLOR
        };
        draw_sphere(to_vec3(position), radius, None, color);
        draw_sphere_wires(to_vec3(position), radius * 1.02, None, Color::new(1.0, 1.0, 1.0, 0.15));
    }
}

/// Draws each node's value at its projected screen position.
///
/// Must be called after switching back to the default (screen) camera.
pub fn draw_labels(layout: &Layout, camera: &Camera3D) {
    let view_proj = camera.matrix();
    for (value, position) in layout.positions() {
        let clip = view_proj * to_vec3(position).extend(1.0);
        // Behind the camera
        if clip.w <= 0.0 {
            continue;
        }
        let ndc = clip.truncate() / clip.w;
        let x = (ndc.x + 1.0) / 2.0 * screen_width();
        let y = (1.0 - ndc.y) / 2.0 * screen_height();

        let label = format!("{:02}", value);
        let size = measure_text(&label, None, 18, 1.0);
        draw_text(&label, x - size.width / 2.0, y + size.height / 2.0, 18.0, BLACK);
    }
}

/// Simple orbit camera for 3D scene navigation.
pub struct OrbitCamera {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target: Vec3,
    /// Multiplier for scroll wheel zoom
    pub zoom_speed: f32,
    /// Minimum distance from target
    pub min_distance: f32,
    /// Maximum distance from target
    pub max_distance: f32,
}

impl OrbitCamera {
    /// Creates a new orbit camera with the given configuration.
    pub fn new(distance: f32, yaw: f32, pitch: f32) -> Self {
        Self {
            distance,
            yaw,
            pitch,
            target: vec3(0.0, 0.0, 0.0),
            zoom_speed: 5.0,
            min_distance: 10.0,
            max_distance: 200.0,
        }
    }

    /// Sets the zoom configuration (speed and distance limits).
    pub fn with_zoom(mut self, speed: f32, min: f32, max: f32) -> Self {
        self.zoom_speed = speed;
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Points the camera at the center of the laid-out tree.
    pub fn frame(&mut self, layout: &Layout) {
        if let Some((min, max)) = layout.bounds() {
            self.target = to_vec3(nalgebra::center(&min, &max));
        }
    }

    /// Updates camera state from user input (mouse drag, scroll, arrow keys).
    pub fn update(&mut self) {
        if is_mouse_button_down(MouseButton::Left) {
            let delta = mouse_delta_position();
            self.yaw -= delta.x * 2.0;
            self.pitch -= delta.y * 2.0;
        }

        // Clamp pitch to avoid gimbal lock
        self.pitch = self.pitch.clamp(-1.5, 1.5);

        let scroll = mouse_wheel().1;
        self.distance -= scroll * self.zoom_speed;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);

        if is_key_down(KeyCode::Left) {
            self.yaw += 0.02;
        }
        if is_key_down(KeyCode::Right) {
            self.yaw -= 0.02;
        }
        if is_key_down(KeyCode::Up) {
            self.pitch += 0.02;
        }
        if is_key_down(KeyCode::Down) {
            self.pitch -= 0.02;
        }
    }

    /// Returns the camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + vec3(x, y, z)
    }

    /// Converts to macroquad's Camera3D for rendering.
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D {
            position: self.position(),
            up: vec3(0.0, 1.0, 0.0),
            target: self.target,
            ..Default::default()
        }
    }
}
