use macroquad::prelude::*;

use crate::enemy::{Enemy, CONTACT_DAMAGE};
use crate::geometry;
use crate::hero::Hero;
use crate::input::KeyState;
use crate::level::Level;
use crate::physics;
use crate::state::{GameOver, Victory};

/// Delay between game-over activation and the automatic restart (ms).
pub const RESTART_DELAY_MS: f64 = 3000.0;

/// The whole simulation: level geometry, entities and the end-state
/// machines. Mutated only inside `update`; the renderer reads it
/// immutably afterwards.
pub struct Game {
    pub bounds: Vec2,
    pub level: Level,
    pub hero: Hero,
    pub enemies: Vec<Enemy>,
    pub victory: Victory,
    pub game_over: GameOver,
    next_enemy_id: u64,
}

impl Game {
    pub fn new(width: f32, height: f32) -> Self {
        let bounds = vec2(width, height);
        let level = Level::build(width, height);
        let mut game = Self {
            bounds,
            hero: Hero::new(bounds),
            enemies: Vec::new(),
            level,
            victory: Victory::new(),
            game_over: GameOver::new(),
            next_enemy_id: 0,
        };
        game.spawn_enemies();
        game
    }

    /// One enemy per platform above the ground level.
    fn spawn_enemies(&mut self) {
        self.enemies.clear();
        for (index, platform) in self.level.platforms.iter().enumerate().skip(1) {
            self.next_enemy_id += 1;
            self.enemies
                .push(Enemy::spawn(self.next_enemy_id, *platform, index, self.bounds.x));
        }
    }

    /// Recreate the hero and enemies and release both latches. Particle
    /// pools survive until a resize rebuilds the whole game.
    pub fn reset(&mut self) {
        self.hero = Hero::new(self.bounds);
        self.spawn_enemies();
        self.victory.reset();
        self.game_over.reset();
    }

    /// One simulation tick. `now` is wall-clock milliseconds; every timed
    /// window compares against it fresh, nothing is deferred.
    pub fn update(&mut self, keys: &KeyState, now: f64) {
        // movement, then ladder/gravity resolution, then a final clamp
        self.hero.apply_input(keys, self.bounds);
        let res = physics::resolve_ladders(
            &mut self.hero,
            &self.level.ladders,
            &self.level.platforms,
            keys,
        );
        physics::apply_gravity(&mut self.hero, &self.level.platforms, res.dropping);
        self.hero.clamp_to(self.bounds);

        // win check runs before this tick's hits, so an emptied
        // collection latches victory on the following tick
        if self.enemies.is_empty() && !self.game_over.active {
            self.victory.start(now, self.bounds);
        }

        if keys.attack {
            self.hero.start_attack();
        }
        let striking = self.hero.advance_attack();
        if striking {
            self.resolve_attack_hits(now);
        }

        self.update_enemies(now);

        self.hero.update_knockback(now);
        self.hero.clamp_to(self.bounds);
        self.hero.tick_timers(now);
        for enemy in &mut self.enemies {
            enemy.tick_timers(now);
        }

        self.victory.update(now, self.bounds);
        self.game_over.update(now);
        self.level.update_torches();
    }

    /// Apply one point of damage to every enemy in range of the swing,
    /// then rebuild the collection without the dead (never removing
    /// mid-iteration).
    fn resolve_attack_hits(&mut self, now: f64) {
        let hero_box = self.hero.rect();
        let facing_left = self.hero.facing_left;
        let mut killed = false;
        for enemy in &mut self.enemies {
            if geometry::attack_range(hero_box, facing_left, enemy.rect()) && enemy.take_damage(now)
            {
                killed = true;
            }
        }
        if killed {
            self.enemies.retain(|e| e.health > 0);
        }
    }

    fn update_enemies(&mut self, now: f64) {
        let hero_box = self.hero.rect();
        for enemy in &mut self.enemies {
            enemy.update(hero_box, self.bounds);
            if enemy.touches(self.hero.rect())
                && self.hero.take_damage(CONTACT_DAMAGE, enemy.x, now)
            {
                self.game_over.start(self.hero.center(), now);
            }
        }
    }

    /// Has the post-game-over restart delay elapsed?
    pub fn restart_due(&self, now: f64) -> bool {
        self.game_over.active && now - self.game_over.start_time >= RESTART_DELAY_MS
    }
}
