use macroquad::prelude::*;

use crate::particle::{Blood, Confetti};

/// Particles seeded when either machine latches.
const BURST_COUNT: usize = 100;
/// Confetti keeps streaming for this long after victory (ms).
const CONFETTI_STREAM_MS: f64 = 3000.0;
/// Chance per tick of one extra confetti piece during the stream.
const CONFETTI_STREAM_CHANCE: f32 = 0.3;
const RESTART_COUNTDOWN_START: i64 = 3;

/// One-way victory latch. Once active it stays active until an external
/// reset clears the flag; the confetti pool is only dropped when the
/// whole game is rebuilt.
pub struct Victory {
    pub active: bool,
    pub start_time: f64,
    pub particles: Vec<Confetti>,
}

impl Victory {
    pub fn new() -> Self {
        Self { active: false, start_time: 0.0, particles: Vec::new() }
    }

    /// Latch and seed the initial burst. Re-entry is a no-op.
    pub fn start(&mut self, now: f64, bounds: Vec2) {
        if self.active {
            return;
        }
        self.active = true;
        self.start_time = now;
        for _ in 0..BURST_COUNT {
            self.particles.push(Confetti::burst(bounds));
        }
    }

    pub fn update(&mut self, now: f64, bounds: Vec2) {
        if !self.active {
            return;
        }
        if now - self.start_time < CONFETTI_STREAM_MS
            && macroquad::rand::gen_range(0.0, 1.0) < CONFETTI_STREAM_CHANCE
        {
            self.particles.push(Confetti::burst(bounds));
        }
        for p in &mut self.particles {
            p.integrate();
        }
        self.particles.retain(|p| !p.off_screen(bounds));
    }

    /// Clears the latch only; particles stay in the pool.
    pub fn reset(&mut self) {
        self.active = false;
        self.start_time = 0.0;
    }
}

/// One-way game-over latch with the restart countdown and blood pool.
pub struct GameOver {
    pub active: bool,
    pub start_time: f64,
    pub restart_countdown: i64,
    pub particles: Vec<Blood>,
}

impl GameOver {
    pub fn new() -> Self {
        Self {
            active: false,
            start_time: 0.0,
            restart_countdown: RESTART_COUNTDOWN_START,
            particles: Vec::new(),
        }
    }

    pub fn start(&mut self, hero_center: Vec2, now: f64) {
        if self.active {
            return;
        }
        self.active = true;
        self.start_time = now;
        self.restart_countdown = RESTART_COUNTDOWN_START;
        for _ in 0..BURST_COUNT {
            self.particles.push(Blood::burst(hero_center));
        }
    }

    pub fn update(&mut self, now: f64) {
        if !self.active {
            return;
        }
        for p in &mut self.particles {
            p.integrate();
        }
        let elapsed = now - self.start_time;
        self.restart_countdown =
            (RESTART_COUNTDOWN_START - (elapsed / 1000.0).floor() as i64).max(0);
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.start_time = 0.0;
        self.restart_countdown = RESTART_COUNTDOWN_START;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Vec2 {
        vec2(800.0, 800.0)
    }

    #[test]
    fn victory_latch_seeds_once() {
        let mut v = Victory::new();
        v.start(1000.0, bounds());
        assert!(v.active);
        assert_eq!(v.particles.len(), 100);
        // second activation never doubles the pool
        v.start(2000.0, bounds());
        assert_eq!(v.particles.len(), 100);
        assert_eq!(v.start_time, 1000.0);
    }

    #[test]
    fn victory_update_is_noop_while_idle() {
        let mut v = Victory::new();
        v.update(500.0, bounds());
        assert!(v.particles.is_empty());
    }

    #[test]
    fn victory_stream_stops_after_window() {
        let mut v = Victory::new();
        v.start(0.0, bounds());
        // past the 3000ms stream window nothing new spawns
        for _ in 0..50 {
            v.update(4000.0, bounds());
        }
        assert!(v.particles.len() <= 100);
    }

    #[test]
    fn victory_reset_clears_latch_not_pool() {
        let mut v = Victory::new();
        v.start(0.0, bounds());
        v.reset();
        assert!(!v.active);
        assert_eq!(v.particles.len(), 100);
        // the latch can fire again after a reset
        v.start(5000.0, bounds());
        assert!(v.active);
        assert_eq!(v.particles.len(), 200);
    }

    #[test]
    fn game_over_latch_and_burst() {
        let mut g = GameOver::new();
        g.start(vec2(100.0, 100.0), 1000.0);
        assert!(g.active);
        assert_eq!(g.particles.len(), 100);
        g.start(vec2(0.0, 0.0), 2000.0);
        assert_eq!(g.particles.len(), 100);
        assert_eq!(g.start_time, 1000.0);
    }

    #[test]
    fn countdown_steps_once_per_second() {
        let mut g = GameOver::new();
        g.start(vec2(0.0, 0.0), 0.0);
        g.update(0.0);
        assert_eq!(g.restart_countdown, 3);
        g.update(999.0);
        assert_eq!(g.restart_countdown, 3);
        g.update(1000.0);
        assert_eq!(g.restart_countdown, 2);
        g.update(2500.0);
        assert_eq!(g.restart_countdown, 1);
        g.update(3000.0);
        assert_eq!(g.restart_countdown, 0);
        // clamped at zero
        g.update(9000.0);
        assert_eq!(g.restart_countdown, 0);
    }
}
