use egui::Context as EguiContext;
use glam::DVec2;
use lampcube_camera::FreeCamera;
use lampcube_input::{Action, Bindings, KeyState};
use lampcube_scene::{SceneAdjustment, SceneConfig, SceneParams};
use std::time::Instant;
use winit::event::MouseScrollDelta;
use winit::keyboard::KeyCode;

/// Touchpad pixel deltas are scaled down to roughly one wheel notch per 100 px.
const PIXEL_SCROLL_SCALE: f64 = 0.01;
/// The virtual cursor is pulled back to the origin past this many pixels so
/// the `f32` coordinates handed to the camera keep sub-pixel precision.
const CURSOR_REBASE_LIMIT: f64 = 10_000.0;
/// Longest frame step fed to movement, so a stall doesn't teleport the camera.
const MAX_FRAME_SECONDS: f32 = 0.1;

/// Application state.
///
/// Owns the camera and everything the user can tweak; input handlers and the
/// renderer receive it by reference.
pub struct AppState {
    pub camera: FreeCamera,
    pub scene: SceneParams,
    bindings: Bindings,
    keys: KeyState,
    /// Absolute cursor rebuilt from raw motion while the pointer is grabbed.
    cursor: DVec2,
    show_overlay: bool,
    quit_requested: bool,
    started: Instant,
    last_frame: Instant,
}

impl AppState {
    pub fn new(config: &SceneConfig) -> Self {
        let cam = &config.camera;
        let mut camera = FreeCamera::new(cam.width, cam.height, cam.position);
        camera.set_projection(cam.projection);

        let now = Instant::now();
        Self {
            camera,
            scene: config.scene.clone(),
            bindings: Bindings::default(),
            keys: KeyState::new(),
            cursor: DVec2::ZERO,
            show_overlay: true,
            quit_requested: false,
            started: now,
            last_frame: now,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        if !pressed {
            self.keys.release(key);
            return;
        }
        self.keys.press(key);

        if let Some(action) = self.bindings.on_press(key, repeat) {
            tracing::debug!("{key:?} -> {action:?}");
            self.apply(action, 0.0);
        }
    }

    /// Held keys stop firing once the window loses focus.
    pub fn focus_lost(&mut self) {
        self.keys.clear();
    }

    /// Fire every held binding for a frame of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let actions: Vec<Action> = self.bindings.held_actions(&self.keys).collect();
        for action in actions {
            self.apply(action, dt);
        }
    }

    pub fn apply(&mut self, action: Action, dt: f32) {
        match action {
            Action::Move(direction) => self.camera.process_keyboard(direction, dt),
            Action::Adjust(adjustment) => self.scene.apply(adjustment),
            Action::ResetView => {
                let (width, height) = self.camera.viewport();
                self.camera.reset(width, height);
                self.scene.apply(SceneAdjustment::ResetObject);
            }
            Action::ToggleProjection => {
                self.camera.toggle_projection();
                tracing::info!("projection: {:?}", self.camera.projection());
            }
            Action::ToggleOverlay => self.show_overlay = !self.show_overlay,
            Action::Quit => self.quit_requested = true,
        }
    }

    /// Raw pointer motion while the cursor is grabbed.
    pub fn mouse_motion(&mut self, dx: f64, dy: f64) {
        if self.cursor.abs().max_element() > CURSOR_REBASE_LIMIT {
            self.camera.shift_cursor_origin(self.cursor.as_vec2());
            self.cursor = DVec2::ZERO;
        }
        self.cursor += DVec2::new(dx, dy);
        self.camera
            .mouse_control(self.cursor.x as f32, self.cursor.y as f32);
    }

    /// Window-space cursor position when no grab is available.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = DVec2::new(x, y);
        self.camera.mouse_control(x as f32, y as f32);
    }

    pub fn scroll(&mut self, delta: MouseScrollDelta) {
        let y_offset = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y * PIXEL_SCROLL_SCALE) as f32,
        };
        self.camera.process_mouse_scroll(y_offset);
    }

    /// Seconds since the previous call, capped.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_SECONDS);
        self.last_frame = now;
        dt
    }

    /// Seconds since start-up; drives the lamp orbit.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Read-only parameter panel; every value is changed from the keyboard.
    pub fn draw_ui(&self, ctx: &EguiContext) {
        if !self.show_overlay {
            return;
        }

        let cam = &self.camera;
        let phong = self.scene.phong;
        let att = self.scene.attenuation;
        let object = self.scene.object;

        egui::SidePanel::left("parameters")
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("lampcube");
                ui.separator();

                ui.label(format!(
                    "Camera: ({:.2}, {:.2}, {:.2})",
                    cam.position().x,
                    cam.position().y,
                    cam.position().z
                ));
                ui.label(format!(
                    "Yaw {:.1}  Pitch {:.1}  FoV {:.1}",
                    cam.yaw(),
                    cam.pitch(),
                    cam.fov()
                ));
                let (width, height) = cam.viewport();
                ui.label(format!("{:?} {width}x{height}  (O)", cam.projection()));
                ui.separator();

                ui.heading("Lighting");
                ui.label(format!("Ambient  {:.2}  (A/Z)", phong.ambient));
                ui.label(format!("Diffuse  {:.2}  (D/C)", phong.diffuse));
                ui.label(format!("Specular {:.2}  (S/X)", phong.specular));
                ui.label(format!("Shininess {}  (E/F)", phong.shininess));
                ui.label(format!(
                    "Attenuation {:.2} / {:.2} / {:.4}  (I/P)",
                    att.constant, att.linear, att.quadratic
                ));
                ui.label(format!("Lamp radius {:.2}  (Ins/Del)", self.scene.lamp.radius));
                ui.separator();

                ui.heading("Object");
                ui.label(format!(
                    "Rotation ({:.1}, {:.1}, {:.1})  (1-6)",
                    object.rotation.x, object.rotation.y, object.rotation.z
                ));
                ui.label(format!("Scale {:.3}  (7/8)", object.scale.x));
                ui.label(format!("Height {}  (9/0)", object.height));

                ui.separator();
                ui.small("Arrows/PgUp/PgDn: Move | Mouse: Look | Wheel: Zoom | R: Reset");
                ui.small("F1: Overlay | Esc: Quit");
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use lampcube_camera::Projection;
    use winit::dpi::PhysicalPosition;

    fn state() -> AppState {
        AppState::new(&SceneConfig::default())
    }

    #[test]
    fn starts_from_config() {
        let mut config = SceneConfig::default();
        config.camera.position = Vec3::new(1.0, 2.0, 3.0);
        config.camera.projection = Projection::Orthographic;
        config.scene.phong.ambient = 0.2;
        let s = AppState::new(&config);
        assert_eq!(s.camera.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s.camera.projection(), Projection::Orthographic);
        assert_eq!(s.camera.viewport(), (800, 600));
        assert_eq!(s.scene.phong.ambient, 0.2);
    }

    #[test]
    fn held_arrow_moves_camera_each_frame() {
        let mut s = state();
        s.handle_key(KeyCode::ArrowUp, true, false);
        s.update(1.0);
        assert!(s.camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));

        s.handle_key(KeyCode::ArrowUp, false, false);
        s.update(1.0);
        assert!(s.camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, 0.5), 1e-5));
    }

    #[test]
    fn press_binding_applies_once() {
        let mut s = state();
        s.handle_key(KeyCode::KeyA, true, false);
        s.handle_key(KeyCode::KeyA, true, true);
        s.update(0.016);
        s.update(0.016);
        assert!((s.scene.phong.ambient - 0.6).abs() < 1e-6);
    }

    #[test]
    fn reset_view_restores_camera_and_nudges_object() {
        let mut s = state();
        s.handle_key(KeyCode::PageUp, true, false);
        s.update(0.5);
        s.handle_key(KeyCode::PageUp, false, false);
        s.camera.process_mouse_scroll(20.0);

        s.handle_key(KeyCode::KeyR, true, false);
        s.update(0.016);
        assert_eq!(s.camera.position(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(s.camera.fov(), 45.0);
        assert_eq!(s.scene.object.translation, Vec3::new(0.0, 0.01, 0.003));
    }

    #[test]
    fn escape_requests_quit() {
        let mut s = state();
        assert!(!s.quit_requested());
        s.handle_key(KeyCode::Escape, true, false);
        s.update(0.016);
        assert!(s.quit_requested());
    }

    #[test]
    fn projection_and_overlay_toggle_on_press() {
        let mut s = state();
        s.handle_key(KeyCode::KeyO, true, false);
        assert_eq!(s.camera.projection(), Projection::Orthographic);
        s.handle_key(KeyCode::F1, true, false);
        assert!(!s.show_overlay);
    }

    #[test]
    fn raw_motion_integrates_into_cursor() {
        let mut s = state();
        s.mouse_motion(3.0, 4.0);
        assert_eq!(s.camera.yaw(), -90.0);

        s.mouse_motion(100.0, -50.0);
        assert!((s.camera.yaw() - -80.0).abs() < 1e-4);
        assert!((s.camera.pitch() - 5.0).abs() < 1e-4);
        assert_eq!(s.cursor, DVec2::new(103.0, -46.0));
    }

    #[test]
    fn long_spins_rebase_the_virtual_cursor() {
        let mut s = state();
        s.mouse_motion(0.0, 0.0);
        for _ in 0..30 {
            s.mouse_motion(1_000.0, 0.0);
        }
        assert!(s.cursor.x <= CURSOR_REBASE_LIMIT + 1_000.0);
        assert!(s.camera.last_cursor().x <= (CURSOR_REBASE_LIMIT + 1_000.0) as f32);

        let yaw = s.camera.yaw();
        s.mouse_motion(0.25, 0.0);
        assert!((s.camera.yaw() - (yaw + 0.025)).abs() < 1e-3);
        assert!((s.camera.yaw() - (-90.0 + 3_000.0 + 0.025)).abs() < 1e-2);
    }

    #[test]
    fn absolute_cursor_feeds_camera() {
        let mut s = state();
        s.cursor_moved(400.0, 300.0);
        s.cursor_moved(400.0, 200.0);
        assert!((s.camera.pitch() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn scroll_deltas_zoom() {
        let mut s = state();
        s.scroll(MouseScrollDelta::LineDelta(0.0, 5.0));
        assert_eq!(s.camera.fov(), 40.0);
        s.scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -500.0)));
        assert_eq!(s.camera.fov(), 45.0);
        s.scroll(MouseScrollDelta::LineDelta(0.0, 500.0));
        assert_eq!(s.camera.fov(), 1.0);
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut s = state();
        s.handle_key(KeyCode::ArrowDown, true, false);
        s.focus_lost();
        s.update(1.0);
        assert_eq!(s.camera.position(), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn overlay_only_displays_state() {
        let s = state();
        let before = (s.camera.clone(), s.scene.clone());
        let ctx = EguiContext::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| s.draw_ui(ctx));
        assert_eq!(s.camera.position(), before.0.position());
        assert_eq!(s.camera.projection(), before.0.projection());
        assert_eq!(s.scene, before.1);
    }

    #[test]
    fn tick_is_capped() {
        let mut s = state();
        s.last_frame = Instant::now() - std::time::Duration::from_secs(5);
        assert_eq!(s.tick(), MAX_FRAME_SECONDS);
    }
}
