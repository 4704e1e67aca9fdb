use macroquad::prelude::*;

/// Snapshot of the keys held this frame. Captured once per tick so the
/// simulation and renderer see the same input state.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub attack: bool,
}

impl KeyState {
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::Right),
            up: is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::Down),
            attack: is_key_down(KeyCode::Space),
        }
    }
}
