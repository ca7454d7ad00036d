use crate::viewport::{ViewportRect, ViewportSink};
use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 500.0;
const YAW: f32 = -90.0;
const PITCH: f32 = 0.0;
const FOV: f32 = 45.0;
const FOV_MIN: f32 = 1.0;
const FOV_MAX: f32 = 90.0;
const PITCH_LIMIT: f32 = 89.0;

/// World units per second for keyboard movement.
const SPEED: f32 = 2.5;
/// Degrees of rotation per pixel of cursor travel.
const SENSITIVITY: f32 = 0.1;
/// Cursor deltas at or below this on both axes are treated as jitter.
const MOUSE_EPSILON: f32 = 1e-6;
/// Pixels per world unit of the orthographic half-extents.
const ORTHO_SCALE: f32 = 2000.0;

/// Direction of a single keyboard movement step, relative to the camera axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Projection mode used by [`FreeCamera::projection_matrix`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    #[default]
    Perspective,
    /// Half-extents follow the viewport size (`width / 2000`, `height / 2000`).
    Orthographic,
}

impl Projection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Perspective => Self::Orthographic,
            Self::Orthographic => Self::Perspective,
        }
    }
}

/// Cursor bookkeeping for turning absolute positions into deltas.
#[derive(Debug, Clone, Copy)]
struct MouseTracker {
    last: Vec2,
    first_move: bool,
}

/// Free-look fly camera driven by held keys, cursor position and scroll.
///
/// Orientation is stored as yaw/pitch in degrees; the basis vectors are
/// recomputed from the angles as one unit after every change.
#[derive(Debug, Clone)]
pub struct FreeCamera {
    position: Vec3,
    start_position: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    near: f32,
    far: f32,
    width: u32,
    height: u32,
    projection: Projection,
    world_up: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    mouse: MouseTracker,
}

impl FreeCamera {
    /// Create a camera at `position` for a `width` x `height` viewport.
    ///
    /// `position` is remembered as the target of [`reset`](Self::reset).
    pub fn new(width: u32, height: u32, position: Vec3) -> Self {
        let mut camera = Self {
            position,
            start_position: position,
            yaw: YAW,
            pitch: PITCH,
            fov: FOV,
            near: Z_NEAR,
            far: Z_FAR,
            width: 1,
            height: 1,
            projection: Projection::Perspective,
            world_up: Vec3::Y,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            mouse: MouseTracker {
                last: Vec2::ZERO,
                first_move: true,
            },
        };
        camera.set(width, height, position);
        camera
    }

    /// (Re)initialise every piece of state except the remembered start position.
    pub fn set(&mut self, width: u32, height: u32, position: Vec3) {
        self.projection = Projection::Perspective;
        self.yaw = YAW;
        self.pitch = PITCH;
        self.fov = FOV;
        self.width = width.max(1);
        self.height = height.max(1);
        self.near = Z_NEAR;
        self.far = Z_FAR;
        self.world_up = Vec3::Y;
        self.position = position;
        self.mouse = MouseTracker {
            last: Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0),
            first_move: true,
        };
        self.update_camera_vectors();
    }

    /// Snap back to the initial framing at the start position.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.set(width, height, self.start_position);
        tracing::debug!(
            "camera reset to ({:.2}, {:.2}, {:.2})",
            self.position.x,
            self.position.y,
            self.position.z
        );
    }

    /// Track a window resize and forward the new viewport to the renderer.
    pub fn reshape(&mut self, width: u32, height: u32, sink: &mut impl ViewportSink) {
        self.width = width.max(1);
        self.height = height.max(1);
        sink.set_viewport(ViewportRect::full(self.width, self.height));
        tracing::debug!("camera viewport {}x{}", self.width, self.height);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective => Mat4::perspective_rh(
                self.fov.to_radians(),
                self.aspect_ratio(),
                self.near,
                self.far,
            ),
            Projection::Orthographic => {
                let half_w = self.width as f32 / ORTHO_SCALE;
                let half_h = self.height as f32 / ORTHO_SCALE;
                Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, -self.far, self.far)
            }
        }
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Move along one camera axis for `dt` seconds.
    pub fn process_keyboard(&mut self, direction: CameraMovement, dt: f32) {
        let velocity = SPEED * dt;
        match direction {
            CameraMovement::Forward => self.position += self.forward * velocity,
            CameraMovement::Backward => self.position -= self.forward * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
            CameraMovement::Up => self.position += self.up * velocity,
            CameraMovement::Down => self.position -= self.up * velocity,
        }
    }

    /// Feed an absolute cursor position in window pixels.
    ///
    /// The first sample after [`set`](Self::set) only latches the position.
    /// Jitter below the epsilon is dropped without moving the reference point,
    /// so tiny movements accumulate until they register.
    pub fn mouse_control(&mut self, x: f32, y: f32) {
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        let cursor = Vec2::new(x, y);
        if self.mouse.first_move {
            self.mouse.last = cursor;
            self.mouse.first_move = false;
            return;
        }

        // Screen y grows downwards, pitch grows upwards.
        let dx = cursor.x - self.mouse.last.x;
        let dy = self.mouse.last.y - cursor.y;
        if dx.abs() <= MOUSE_EPSILON && dy.abs() <= MOUSE_EPSILON {
            return;
        }

        self.mouse.last = cursor;
        self.process_mouse_movement(dx * SENSITIVITY, dy * SENSITIVITY);
    }

    /// Move the cursor reference point by `-offset`.
    ///
    /// Callers that rebase their own cursor coordinates use this to keep the
    /// next delta unchanged.
    pub fn shift_cursor_origin(&mut self, offset: Vec2) {
        self.mouse.last -= offset;
    }

    /// Zoom by narrowing or widening the field of view.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        if !y_offset.is_finite() {
            return;
        }
        if (FOV_MIN..=FOV_MAX).contains(&self.fov) {
            self.fov -= y_offset;
        }
        self.fov = self.fov.clamp(FOV_MIN, FOV_MAX);
    }

    pub fn set_projection(&mut self, projection: Projection) {
        if self.projection != projection {
            tracing::debug!("camera projection {:?}", projection);
        }
        self.projection = projection;
    }

    pub fn toggle_projection(&mut self) {
        self.set_projection(self.projection.toggled());
    }

    fn process_mouse_movement(&mut self, yaw_offset: f32, pitch_offset: f32) {
        self.yaw += yaw_offset;
        self.pitch = (self.pitch + pitch_offset).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_camera_vectors();
    }

    fn update_camera_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.forward = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.forward.cross(self.world_up).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn viewport(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Last cursor position the camera measured deltas against.
    pub fn last_cursor(&self) -> Vec2 {
        self.mouse.last
    }

    /// True until the first cursor sample after (re)initialisation arrives.
    pub fn awaiting_first_move(&self) -> bool {
        self.mouse.first_move
    }
}
