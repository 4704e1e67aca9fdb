use crate::hero::Hero;
use crate::input::KeyState;

/// Ticks per displayed frame for the run/idle/climb cycles.
const FRAME_TICKS: u32 = 8;
const RUN_FRAMES: usize = 8;
const IDLE_FRAMES: usize = 6;
const CLIMB_FRAMES: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Cycle {
    Idle,
    Run,
    Climb,
}

/// Display-only frame bookkeeping. Reads hero flags and the key
/// snapshot, produces a frame index for the renderer; never feeds back
/// into the simulation.
pub struct Animator {
    cycle: Cycle,
    frame_count: u32,
    current_frame: usize,
}

impl Animator {
    pub fn new() -> Self {
        Self { cycle: Cycle::Idle, frame_count: 0, current_frame: 0 }
    }

    pub fn update(&mut self, hero: &Hero, keys: &KeyState) {
        let cycle = if hero.is_climbing {
            Cycle::Climb
        } else if keys.left || keys.right {
            Cycle::Run
        } else {
            Cycle::Idle
        };
        if cycle != self.cycle {
            self.cycle = cycle;
            self.frame_count = 0;
            self.current_frame = 0;
        }

        // on a ladder without vertical input the pose freezes
        if self.cycle == Cycle::Climb && !keys.up && !keys.down {
            self.frame_count = 0;
            self.current_frame = 0;
            return;
        }

        let len = match self.cycle {
            Cycle::Idle => IDLE_FRAMES,
            Cycle::Run => RUN_FRAMES,
            Cycle::Climb => CLIMB_FRAMES,
        };
        self.frame_count += 1;
        if self.frame_count >= FRAME_TICKS {
            self.frame_count = 0;
            self.current_frame = (self.current_frame + 1) % len;
        }
    }

    pub fn frame(&self) -> usize {
        self.current_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::*;

    fn hero() -> Hero {
        Hero::new(vec2(800.0, 800.0))
    }

    #[test]
    fn idle_cycle_wraps() {
        let mut a = Animator::new();
        let h = hero();
        let keys = KeyState::default();
        for _ in 0..(FRAME_TICKS as usize * IDLE_FRAMES) {
            a.update(&h, &keys);
        }
        assert_eq!(a.frame(), 0);
    }

    #[test]
    fn cycle_change_resets_frame() {
        let mut a = Animator::new();
        let h = hero();
        let run = KeyState { right: true, ..Default::default() };
        for _ in 0..20 {
            a.update(&h, &run);
        }
        assert_ne!(a.frame(), 0);
        a.update(&h, &KeyState::default());
        assert_eq!(a.frame(), 0);
    }

    #[test]
    fn climb_pose_freezes_without_vertical_input() {
        let mut a = Animator::new();
        let mut h = hero();
        h.is_climbing = true;
        let climb = KeyState { up: true, ..Default::default() };
        for _ in 0..20 {
            a.update(&h, &climb);
        }
        assert_ne!(a.frame(), 0);
        a.update(&h, &KeyState::default());
        assert_eq!(a.frame(), 0);
    }
}
