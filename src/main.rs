use macroquad::prelude::*;

mod animation;
mod config;
mod enemy;
mod game;
mod geometry;
mod hero;
mod input;
mod level;
mod particle;
mod physics;
mod render;
mod state;

use animation::Animator;
use config::Settings;
use game::Game;
use input::KeyState;

const SETTINGS_PATH: &str = "settings.yaml";

fn load_settings() -> Settings {
    Settings::load_from(SETTINGS_PATH).unwrap_or_else(|err| {
        eprintln!("settings load failed: {err}");
        Settings::default()
    })
}

fn window_conf() -> Conf {
    let settings = load_settings();
    Conf {
        window_title: "demonspire".to_owned(),
        window_width: settings.window_width,
        window_height: settings.window_height,
        ..Default::default()
    }
}

fn now_ms() -> f64 {
    get_time() * 1000.0
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = load_settings();

    let mut game = Game::new(screen_width(), screen_height());
    let mut animator = Animator::new();
    let mut last_screen_width = screen_width();
    let mut last_screen_height = screen_height();

    let mut i: f32 = 0.0;
    let mut fps: i32 = 0;

    loop {
        let now = now_ms();

        // A resize invalidates the derived geometry; rebuild the whole
        // game from the new viewport, entities included.
        let current_width = screen_width();
        let current_height = screen_height();
        if current_width != last_screen_width || current_height != last_screen_height {
            game = Game::new(current_width, current_height);
            last_screen_width = current_width;
            last_screen_height = current_height;
        }

        if game.restart_due(now) {
            game.reset();
        }

        let keys = KeyState::poll();
        game.update(&keys, now);
        animator.update(&game.hero, &keys);

        render::draw(&game, &animator, &settings, now);

        i += get_frame_time();
        if i >= 1.0 {
            fps = get_fps();
            i = 0.0;
        }
        draw_text(&format!("FPS: {:.0}", fps), 20.0, 60.0, 24.0, WHITE);

        next_frame().await;
    }
}
