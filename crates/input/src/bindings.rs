use crate::action::Action;
use lampcube_camera::CameraMovement;
use lampcube_scene::params::{ROTATION_STEP_DEGREES, SCALE_GROW, SCALE_SHRINK};
use lampcube_scene::{Axis, SceneAdjustment};
use std::collections::HashSet;
use winit::keyboard::KeyCode;

/// When a binding fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Once on key-down. Auto-repeat is ignored.
    Press,
    /// Every frame while the key is held.
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binding {
    pub trigger: Trigger,
    pub action: Action,
}

/// Keys currently held down.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<KeyCode>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Forget all held keys, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Key binding table.
///
/// Entries keep their insertion order so held actions fire deterministically.
#[derive(Debug, Clone)]
pub struct Bindings {
    table: Vec<(KeyCode, Binding)>,
}

impl Default for Bindings {
    fn default() -> Self {
        use Trigger::{Hold, Press};

        let rotate = |axis, degrees| Action::Adjust(SceneAdjustment::Rotate { axis, degrees });
        let adjust = Action::Adjust;
        let step = ROTATION_STEP_DEGREES;

        let mut bindings = Self::empty();
        #[rustfmt::skip]
        let entries = [
            // Camera flight
            (KeyCode::ArrowUp, Hold, Action::Move(CameraMovement::Forward)),
            (KeyCode::ArrowDown, Hold, Action::Move(CameraMovement::Backward)),
            (KeyCode::ArrowLeft, Hold, Action::Move(CameraMovement::Left)),
            (KeyCode::ArrowRight, Hold, Action::Move(CameraMovement::Right)),
            (KeyCode::PageUp, Hold, Action::Move(CameraMovement::Up)),
            (KeyCode::PageDown, Hold, Action::Move(CameraMovement::Down)),
            (KeyCode::KeyR, Hold, Action::ResetView),
            // Object rotation and scale
            (KeyCode::Digit1, Hold, rotate(Axis::X, -step)),
            (KeyCode::Digit2, Hold, rotate(Axis::X, step)),
            (KeyCode::Digit3, Hold, rotate(Axis::Y, -step)),
            (KeyCode::Digit4, Hold, rotate(Axis::Y, step)),
            (KeyCode::Digit5, Hold, rotate(Axis::Z, -step)),
            (KeyCode::Digit6, Hold, rotate(Axis::Z, step)),
            (KeyCode::Digit7, Hold, adjust(SceneAdjustment::Scale(SCALE_SHRINK))),
            (KeyCode::Digit8, Hold, adjust(SceneAdjustment::Scale(SCALE_GROW))),
            (KeyCode::Escape, Hold, Action::Quit),
            // Phong coefficients
            (KeyCode::KeyA, Press, adjust(SceneAdjustment::AmbientUp)),
            (KeyCode::KeyZ, Press, adjust(SceneAdjustment::AmbientDown)),
            (KeyCode::KeyD, Press, adjust(SceneAdjustment::DiffuseUp)),
            (KeyCode::KeyC, Press, adjust(SceneAdjustment::DiffuseDown)),
            (KeyCode::KeyS, Press, adjust(SceneAdjustment::SpecularUp)),
            (KeyCode::KeyX, Press, adjust(SceneAdjustment::SpecularDown)),
            (KeyCode::KeyE, Press, adjust(SceneAdjustment::ShininessUp)),
            (KeyCode::KeyF, Press, adjust(SceneAdjustment::ShininessDown)),
            // Object height and lamp orbit
            (KeyCode::Digit9, Press, adjust(SceneAdjustment::HeightUp)),
            (KeyCode::Digit0, Press, adjust(SceneAdjustment::HeightDown)),
            (KeyCode::Insert, Press, adjust(SceneAdjustment::LampRadiusUp)),
            (KeyCode::Delete, Press, adjust(SceneAdjustment::LampRadiusDown)),
            (KeyCode::KeyI, Press, adjust(SceneAdjustment::QuadraticAttenuationUp)),
            (KeyCode::KeyP, Press, adjust(SceneAdjustment::QuadraticAttenuationDown)),
            // View
            (KeyCode::KeyO, Press, Action::ToggleProjection),
            (KeyCode::F1, Press, Action::ToggleOverlay),
        ];
        for (key, trigger, action) in entries {
            bindings.bind(key, trigger, action);
        }
        bindings
    }
}

impl Bindings {
    /// A table with no bindings.
    pub fn empty() -> Self {
        Self { table: Vec::new() }
    }

    /// Bind `key`, replacing and returning any previous binding for it.
    pub fn bind(&mut self, key: KeyCode, trigger: Trigger, action: Action) -> Option<Binding> {
        let binding = Binding { trigger, action };
        match self.table.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                tracing::debug!("rebinding {key:?}");
                Some(std::mem::replace(slot, binding))
            }
            None => {
                self.table.push((key, binding));
                None
            }
        }
    }

    pub fn get(&self, key: KeyCode) -> Option<&Binding> {
        self.table.iter().find(|(k, _)| *k == key).map(|(_, b)| b)
    }

    /// Action for a key-down event, if the key has a press binding.
    pub fn on_press(&self, key: KeyCode, repeat: bool) -> Option<Action> {
        if repeat {
            return None;
        }
        self.get(key)
            .filter(|b| b.trigger == Trigger::Press)
            .map(|b| b.action)
    }

    /// Actions of every held binding whose key is down, in table order.
    pub fn held_actions<'a>(&'a self, keys: &'a KeyState) -> impl Iterator<Item = Action> + 'a {
        self.table
            .iter()
            .filter(move |(key, b)| b.trigger == Trigger::Hold && keys.is_held(*key))
            .map(|(_, b)| b.action)
    }
}
