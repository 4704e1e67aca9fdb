use macroquad::prelude::*;

/// Vertical slack for mounting a ladder from the platform above.
const LADDER_MOUNT_TOLERANCE: f32 = 10.0;
/// Extra pixel below a platform's top edge that still counts as resting on it.
const SETTLE_TOLERANCE: f32 = 1.0;
/// Two boxes are on the same level when their feet are this close.
const SAME_LEVEL_TOLERANCE: f32 = 10.0;
/// Horizontal center distance covered by a melee swing.
pub const ATTACK_REACH: f32 = 100.0;
/// Horizontal center distance at which an enemy deals contact damage.
pub const CONTACT_REACH: f32 = 50.0;

fn center_x(r: Rect) -> f32 {
    r.x + r.w / 2.0
}

fn bottom(r: Rect) -> f32 {
    r.y + r.h
}

/// Is the actor positioned to use this ladder? Horizontal: the actor's
/// center must be inside the ladder's span. Vertical: the boxes overlap,
/// or the actor's feet are within mount tolerance of the ladder's top.
pub fn ladder_overlap(actor: Rect, ladder: Rect) -> bool {
    let horizontal = center_x(actor) >= ladder.x && center_x(actor) <= ladder.x + ladder.w;
    let vertical = (bottom(actor) >= ladder.y && actor.y <= ladder.y + ladder.h)
        || (bottom(actor) - ladder.y).abs() <= LADDER_MOUNT_TOLERANCE;
    horizontal && vertical
}

/// Is the actor resting on this platform? Feet within the platform bar
/// plus one settle pixel, and horizontal ranges strictly intersecting.
pub fn platform_overlap(actor: Rect, platform: Rect) -> bool {
    let above = bottom(actor) >= platform.y && bottom(actor) <= platform.y + platform.h + SETTLE_TOLERANCE;
    let horizontal = actor.x + actor.w > platform.x && actor.x < platform.x + platform.w;
    above && horizontal
}

/// Feet-aligned check: both boxes stand on the same platform level.
pub fn same_level(a: Rect, b: Rect) -> bool {
    (bottom(a) - bottom(b)).abs() < SAME_LEVEL_TOLERANCE
}

/// Can a swing from the hero reach this enemy? Same level, centers within
/// reach, and the hero facing toward the enemy.
pub fn attack_range(hero: Rect, facing_left: bool, enemy: Rect) -> bool {
    if !same_level(hero, enemy) {
        return false;
    }
    let distance = (center_x(hero) - center_x(enemy)).abs();
    let facing_correctly = if facing_left {
        hero.x > enemy.x
    } else {
        hero.x < enemy.x
    };
    distance < ATTACK_REACH && facing_correctly
}

/// Is the enemy close enough to deal contact damage? Tighter than a swing.
pub fn contact_range(hero: Rect, enemy: Rect) -> bool {
    same_level(hero, enemy) && (center_x(hero) - center_x(enemy)).abs() < CONTACT_REACH
}
