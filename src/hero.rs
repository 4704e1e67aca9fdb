use macroquad::prelude::*;

use crate::input::KeyState;

pub const HERO_WIDTH: f32 = 40.0;
pub const HERO_HEIGHT: f32 = 60.0;
const HERO_SPEED: f32 = 5.0;
const MAX_HEALTH: f32 = 100.0;
/// Damage is ignored for this long after a hit (ms).
const INVULNERABLE_MS: f64 = 1000.0;
const KNOCKBACK_SPEED: f32 = 15.0;
const KNOCKBACK_MS: f64 = 200.0;
/// Swing animation: 12 frames, one frame every 4 ticks.
pub const ATTACK_FRAMES: u32 = 12;
const TICKS_PER_ATTACK_FRAME: u32 = 4;
/// The frame of the swing on which the blade connects.
pub const STRIKE_FRAME: u32 = 6;

/// Forced horizontal displacement after taking a hit.
#[derive(Clone, Copy, Debug)]
pub struct Knockback {
    pub active: bool,
    pub direction: f32,
    pub speed: f32,
    pub duration: f64,
    pub start_time: f64,
}

pub struct Hero {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub health: f32,
    pub max_health: f32,
    pub is_climbing: bool,
    pub is_hit: bool,
    pub hit_time: f64,
    pub knockback: Knockback,
    pub facing_left: bool,
    pub is_attacking: bool,
    pub attack_frame: u32,
    frame_count: u32,
}

impl Hero {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            x: bounds.x * 0.05,
            y: bounds.y - 160.0,
            width: HERO_WIDTH,
            height: HERO_HEIGHT,
            speed: HERO_SPEED,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            is_climbing: false,
            is_hit: false,
            hit_time: 0.0,
            knockback: Knockback {
                active: false,
                direction: 1.0,
                speed: KNOCKBACK_SPEED,
                duration: KNOCKBACK_MS,
                start_time: 0.0,
            },
            facing_left: false,
            is_attacking: false,
            attack_frame: 0,
            frame_count: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Horizontal movement and facing from the held keys. Ladder and
    /// gravity resolution run separately in the physics pass.
    pub fn apply_input(&mut self, keys: &KeyState, bounds: Vec2) {
        if keys.left {
            self.x -= self.speed;
            self.facing_left = true;
        }
        if keys.right {
            self.x += self.speed;
            self.facing_left = false;
        }
        self.clamp_to(bounds);
    }

    pub fn clamp_to(&mut self, bounds: Vec2) {
        self.x = self.x.clamp(0.0, bounds.x - self.width);
        self.y = self.y.clamp(0.0, bounds.y - self.height);
    }

    pub fn start_attack(&mut self) {
        if self.is_attacking {
            return;
        }
        self.is_attacking = true;
        self.attack_frame = 0;
        self.frame_count = 0;
    }

    /// Advance the swing by one tick. Returns true on ticks where the
    /// strike frame is showing (hit resolution runs on those ticks).
    pub fn advance_attack(&mut self) -> bool {
        if !self.is_attacking {
            return false;
        }
        self.frame_count += 1;
        if self.frame_count >= TICKS_PER_ATTACK_FRAME {
            self.frame_count = 0;
            self.attack_frame += 1;
            if self.attack_frame >= ATTACK_FRAMES {
                self.is_attacking = false;
                self.attack_frame = 0;
                return false;
            }
        }
        self.is_attacking && self.attack_frame == STRIKE_FRAME
    }

    pub fn update_knockback(&mut self, now: f64) {
        if !self.knockback.active {
            return;
        }
        if now - self.knockback.start_time < self.knockback.duration {
            self.x += self.knockback.speed * self.knockback.direction;
        } else {
            self.knockback.active = false;
        }
    }

    /// Returns true iff this hit was lethal. Ignored entirely during the
    /// invulnerability window.
    pub fn take_damage(&mut self, amount: f32, source_x: f32, now: f64) -> bool {
        if self.is_hit {
            return false;
        }
        self.health -= amount;
        self.is_hit = true;
        self.hit_time = now;
        self.knockback.active = true;
        self.knockback.start_time = now;
        self.knockback.direction = if self.x < source_x { -1.0 } else { 1.0 };
        self.health <= 0.0
    }

    /// Per-tick timestamp checks replacing the deferred flag clears.
    pub fn tick_timers(&mut self, now: f64) {
        if self.is_hit && now - self.hit_time >= INVULNERABLE_MS {
            self.is_hit = false;
        }
    }
}
