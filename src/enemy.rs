use macroquad::prelude::*;

use crate::geometry;

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 60.0;
/// A struck enemy stays in the hit state this long (ms).
const HIT_RECOVER_MS: f64 = 500.0;
pub const CONTACT_DAMAGE: f32 = 20.0;

/// Health scales with how high the enemy's platform sits.
pub fn max_health_for_level(level: usize) -> i32 {
    1 + (level as f32 * 0.5).floor() as i32
}

/// Chase speed scales the same way.
pub fn speed_for_level(level: usize) -> f32 {
    0.8 + level as f32 * 0.3
}

pub struct Enemy {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub health: i32,
    pub max_health: i32,
    /// Index of the platform this enemy patrols. Back-reference only.
    pub platform: usize,
    pub speed: f32,
    pub direction: f32,
    pub is_hit: bool,
    pub hit_time: f64,
}

impl Enemy {
    /// Spawn on top of the given platform, somewhere in the middle band
    /// of the viewport.
    pub fn spawn(id: u64, platform: Rect, level: usize, viewport_width: f32) -> Self {
        let health = max_health_for_level(level);
        Self {
            id,
            x: viewport_width * macroquad::rand::gen_range(0.3, 0.7),
            y: platform.y - ENEMY_HEIGHT,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            health,
            max_health: health,
            platform: level,
            speed: speed_for_level(level),
            direction: 1.0,
            is_hit: false,
            hit_time: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Chase the hero: one speed step toward the hero's center per tick,
    /// but only while the hero stands on the same level.
    pub fn update(&mut self, hero: Rect, bounds: Vec2) {
        if !geometry::same_level(hero, self.rect()) {
            return;
        }
        let hero_center = hero.x + hero.w / 2.0;
        let center = self.x + self.width / 2.0;
        if hero_center < center {
            self.x -= self.speed;
            self.direction = -1.0;
        } else {
            self.x += self.speed;
            self.direction = 1.0;
        }
        self.x = self.x.clamp(0.0, bounds.x - self.width);
    }

    /// One point of damage. Returns true iff this kills the enemy; the
    /// caller removes it from the collection. No-op while in hit state.
    pub fn take_damage(&mut self, now: f64) -> bool {
        if self.is_hit {
            return false;
        }
        self.health -= 1;
        self.is_hit = true;
        self.hit_time = now;
        self.health <= 0
    }

    /// Clear the hit state after recovery, only while still alive.
    pub fn tick_timers(&mut self, now: f64) {
        if self.is_hit && self.health > 0 && now - self.hit_time >= HIT_RECOVER_MS {
            self.is_hit = false;
        }
    }

    pub fn touches(&self, hero: Rect) -> bool {
        geometry::contact_range(hero, self.rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        let mut e = Enemy::spawn(1, Rect::new(0.0, y + ENEMY_HEIGHT, 800.0, 5.0), 1, 800.0);
        e.x = x;
        e
    }

    #[test]
    fn health_scales_with_level() {
        assert_eq!(max_health_for_level(1), 1);
        assert_eq!(max_health_for_level(2), 2);
        assert_eq!(max_health_for_level(3), 2);
        assert_eq!(max_health_for_level(4), 3);
        assert_eq!(max_health_for_level(5), 3);
    }

    #[test]
    fn speed_scales_with_level() {
        assert!((speed_for_level(1) - 1.1).abs() < 1e-6);
        assert!((speed_for_level(5) - 2.3).abs() < 1e-6);
    }

    #[test]
    fn spawns_on_platform_top() {
        let e = Enemy::spawn(7, Rect::new(0.0, 575.0, 800.0, 5.0), 2, 800.0);
        assert_eq!(e.y, 515.0);
        assert!(e.x >= 800.0 * 0.3 && e.x <= 800.0 * 0.7);
        assert_eq!(e.health, 2);
    }

    #[test]
    fn chases_hero_on_same_level() {
        let mut e = enemy_at(400.0, 540.0);
        let hero = Rect::new(100.0, 540.0, 40.0, 60.0);
        e.update(hero, vec2(800.0, 800.0));
        assert_eq!(e.x, 400.0 - e.speed);
        assert_eq!(e.direction, -1.0);
    }

    #[test]
    fn ignores_hero_on_other_level() {
        let mut e = enemy_at(400.0, 540.0);
        let hero = Rect::new(100.0, 300.0, 40.0, 60.0);
        e.update(hero, vec2(800.0, 800.0));
        assert_eq!(e.x, 400.0);
    }

    #[test]
    fn clamps_to_viewport() {
        let mut e = enemy_at(0.5, 540.0);
        let hero = Rect::new(-30.0, 540.0, 40.0, 60.0);
        e.update(hero, vec2(800.0, 800.0));
        assert_eq!(e.x, 0.0);
    }

    #[test]
    fn kill_takes_exactly_max_health_hits() {
        let mut e = Enemy::spawn(1, Rect::new(0.0, 575.0, 800.0, 5.0), 4, 800.0);
        assert_eq!(e.max_health, 3);
        let mut now = 0.0;
        assert!(!e.take_damage(now));
        now += 600.0;
        e.tick_timers(now);
        assert!(!e.take_damage(now));
        now += 600.0;
        e.tick_timers(now);
        assert!(e.take_damage(now));
    }

    #[test]
    fn hit_state_blocks_repeat_damage() {
        let mut e = Enemy::spawn(1, Rect::new(0.0, 575.0, 800.0, 5.0), 4, 800.0);
        e.take_damage(0.0);
        assert_eq!(e.health, 2);
        // inside the 500ms recovery
        e.tick_timers(300.0);
        assert!(!e.take_damage(300.0));
        assert_eq!(e.health, 2);
        // recovered
        e.tick_timers(500.0);
        assert!(!e.is_hit);
    }

    #[test]
    fn dead_enemy_stays_in_hit_state() {
        let mut e = Enemy::spawn(1, Rect::new(0.0, 575.0, 800.0, 5.0), 1, 800.0);
        assert!(e.take_damage(0.0));
        e.tick_timers(1000.0);
        assert!(e.is_hit);
    }
}
