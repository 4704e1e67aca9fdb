use macroquad::prelude::*;

use crate::geometry::{ladder_overlap, platform_overlap};
use crate::hero::Hero;
use crate::input::KeyState;

/// Fixed fall step applied when neither climbing nor dropping.
const GRAVITY_STEP: f32 = 5.0;
/// Single discrete step taken when dropping through a platform.
const DROP_STEP: f32 = 10.0;

/// Outcome of the ladder pass, consumed by the gravity pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct LadderResolution {
    pub on_ladder: bool,
    pub dropping: bool,
}

/// Ladder climb/drop resolution. Every ladder is evaluated in order with
/// no early exit; where ladders overlap, the last one evaluated wins.
/// That order dependence is kept as-is (see DESIGN.md).
pub fn resolve_ladders(
    hero: &mut Hero,
    ladders: &[Rect],
    platforms: &[Rect],
    keys: &KeyState,
) -> LadderResolution {
    let mut res = LadderResolution::default();

    for ladder in ladders {
        if !ladder_overlap(hero.rect(), *ladder) {
            continue;
        }
        res.on_ladder = true;

        if keys.up {
            let feet = hero.y + hero.height;
            let would_exceed_top = feet - hero.speed <= ladder.y;
            if would_exceed_top {
                // Reached the top: refuse the move and treat the hero as
                // off the ladder so gravity can settle them onto the
                // platform.
                hero.is_climbing = false;
                res.on_ladder = false;
            } else {
                hero.y -= hero.speed;
                hero.is_climbing = true;
            }
        }

        if keys.down {
            let resting = platforms.iter().any(|p| platform_overlap(hero.rect(), *p));
            if resting {
                hero.y += DROP_STEP;
                res.dropping = true;
                // dropping has no climb animation
                hero.is_climbing = false;
            }
        }
    }

    // Climbing persists only while actively pressing up against a ladder
    // located on the hero.
    if !res.on_ladder || !keys.up {
        hero.is_climbing = false;
    }

    res
}

/// Gravity and platform settle. Every platform is tested; later entries
/// override earlier snaps (same order dependence as the ladder pass).
pub fn apply_gravity(hero: &mut Hero, platforms: &[Rect], dropping: bool) {
    if !hero.is_climbing && !dropping {
        hero.y += GRAVITY_STEP;
    }

    if !dropping {
        for platform in platforms {
            if platform_overlap(hero.rect(), *platform) {
                hero.y = platform.y - hero.height;
            }
        }
    }
}
