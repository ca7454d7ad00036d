use lampcube_camera::CameraMovement;
use lampcube_scene::SceneAdjustment;

/// What a bound key does when it fires.
///
/// The application state consumes actions, never raw key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Fly the camera one step for the current frame time.
    Move(CameraMovement),
    /// Tweak a lighting or object parameter.
    Adjust(SceneAdjustment),
    /// Return the camera to its start framing and nudge the object.
    ResetView,
    /// Switch between perspective and orthographic projection.
    ToggleProjection,
    /// Show or hide the parameter overlay.
    ToggleOverlay,
    /// Close the window.
    Quit,
}
