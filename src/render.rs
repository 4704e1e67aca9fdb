use macroquad::prelude::*;

use crate::animation::Animator;
use crate::config::Settings;
use crate::enemy::Enemy;
use crate::game::Game;
use crate::hero::Hero;
use crate::level::Torch;

const BACKGROUND: u32 = 0x202020;
const LADDER_BROWN: u32 = 0x8B4513;
const DEMON_BODY: u32 = 0x330000;
const DEMON_HORN: u32 = 0x1A0000;
/// How long a struck entity flashes (ms).
const HIT_FLASH_MS: f64 = 200.0;

/// Draw the whole scene. Reads the game state immutably; nothing in
/// here mutates the simulation.
pub fn draw(game: &Game, animator: &Animator, settings: &Settings, now: f64) {
    clear_background(Color::from_hex(BACKGROUND));

    for platform in &game.level.platforms {
        draw_rectangle(platform.x, platform.y, platform.w, platform.h, BLACK);
    }

    for ladder in &game.level.ladders {
        draw_ladder(*ladder);
    }

    for torch in &game.level.torches {
        draw_torch(torch);
    }

    for enemy in &game.enemies {
        draw_enemy(enemy, now);
    }

    draw_hero(&game.hero, animator);
    draw_hero_health(&game.hero);

    if game.victory.active {
        draw_victory(game);
    }
    if game.game_over.active {
        draw_game_over(game);
    }

    if settings.show_hitboxes {
        let h = game.hero.rect();
        draw_rectangle_lines(h.x, h.y, h.w, h.h, 1.0, RED);
        for enemy in &game.enemies {
            let e = enemy.rect();
            draw_rectangle_lines(e.x, e.y, e.w, e.h, 1.0, RED);
        }
    }
}

fn draw_ladder(ladder: Rect) {
    let brown = Color::from_hex(LADDER_BROWN);
    draw_rectangle(ladder.x, ladder.y, 5.0, ladder.h, brown);
    draw_rectangle(ladder.x + ladder.w - 5.0, ladder.y, 5.0, ladder.h, brown);
    let mut rung = 0.0;
    while rung < ladder.h {
        draw_rectangle(ladder.x, ladder.y + rung, ladder.w, 5.0, brown);
        rung += 20.0;
    }
}

fn draw_torch(torch: &Torch) {
    draw_rectangle(
        torch.x - torch.base_width / 2.0,
        torch.y,
        torch.base_width,
        torch.base_height,
        Color::from_hex(LADDER_BROWN),
    );
    draw_triangle(
        vec2(torch.x - torch.base_width / 2.0, torch.y),
        vec2(torch.x + torch.base_width / 2.0, torch.y),
        vec2(torch.x + torch.flame_offset, torch.y - 20.0),
        ORANGE,
    );
}

fn draw_hero(hero: &Hero, animator: &Animator) {
    // hit flash, otherwise a steel-grey warrior with an idle/run bob
    let body = if hero.is_hit {
        RED
    } else {
        Color::from_hex(0xC0C0D0)
    };
    let bob = (animator.frame() % 2) as f32;
    draw_rectangle(hero.x, hero.y + bob, hero.width, hero.height - bob, body);

    // swing arc while attacking, in front of the facing side
    if hero.is_attacking {
        let reach = 8.0 + hero.attack_frame as f32 * 4.0;
        let x = if hero.facing_left {
            hero.x - reach
        } else {
            hero.x + hero.width
        };
        draw_rectangle(x, hero.y + 15.0, reach, 6.0, LIGHTGRAY);
    }
}

fn draw_hero_health(hero: &Hero) {
    let ratio = (hero.health / hero.max_health).clamp(0.0, 1.0);
    draw_rectangle(20.0, 20.0, 204.0, 18.0, DARKGRAY);
    draw_rectangle(22.0, 22.0, 200.0 * ratio, 14.0, if ratio > 0.3 { GREEN } else { RED });
}

fn draw_enemy(enemy: &Enemy, now: f64) {
    let body = if enemy.is_hit && now - enemy.hit_time < HIT_FLASH_MS {
        RED
    } else {
        Color::from_hex(DEMON_BODY)
    };
    draw_rectangle(enemy.x, enemy.y, enemy.width, enemy.height, body);

    // horns
    let horn = Color::from_hex(DEMON_HORN);
    draw_triangle(
        vec2(enemy.x + 5.0, enemy.y),
        vec2(enemy.x + 15.0, enemy.y - 15.0),
        vec2(enemy.x + 20.0, enemy.y),
        horn,
    );
    draw_triangle(
        vec2(enemy.x + enemy.width - 5.0, enemy.y),
        vec2(enemy.x + enemy.width - 15.0, enemy.y - 15.0),
        vec2(enemy.x + enemy.width - 20.0, enemy.y),
        horn,
    );

    // eyes
    draw_circle(enemy.x + 12.0, enemy.y + 15.0, 4.0, RED);
    draw_circle(enemy.x + enemy.width - 12.0, enemy.y + 15.0, 4.0, RED);

    // health bar
    let ratio = enemy.health as f32 / enemy.max_health as f32;
    draw_rectangle(enemy.x - 5.0, enemy.y - 15.0, enemy.width + 10.0, 8.0, DARKGRAY);
    draw_rectangle(
        enemy.x - 5.0,
        enemy.y - 15.0,
        (enemy.width + 10.0) * ratio,
        8.0,
        Color::from_hex(0xFF3300),
    );
}

fn draw_victory(game: &Game) {
    draw_rectangle(
        0.0,
        0.0,
        game.bounds.x,
        game.bounds.y,
        Color::new(0.0, 0.0, 0.0, 0.1),
    );
    for p in &game.victory.particles {
        draw_rectangle_ex(
            p.x,
            p.y,
            p.size,
            p.size,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation: p.rotation.to_radians(),
                color: p.color,
            },
        );
    }
    draw_centered_text("VICTORY!", game.bounds, 0.0, 64.0, GOLD);
    draw_centered_text("all demons cleared", game.bounds, 50.0, 28.0, WHITE);
}

fn draw_game_over(game: &Game) {
    for p in &game.game_over.particles {
        if p.alpha > 0.0 {
            draw_circle(p.x, p.y, p.size / 2.0, Color::new(0.8, 0.0, 0.0, p.alpha));
        }
    }
    draw_centered_text("YOU DIED", game.bounds, 0.0, 64.0, RED);
    let line = format!("restarting in {}", game.game_over.restart_countdown);
    draw_centered_text(&line, game.bounds, 50.0, 28.0, WHITE);
}

fn draw_centered_text(text: &str, bounds: Vec2, y_offset: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(
        text,
        (bounds.x - dims.width) / 2.0,
        bounds.y / 2.0 + y_offset,
        size,
        color,
    );
}
