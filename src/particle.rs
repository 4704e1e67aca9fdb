use macroquad::prelude::*;

const CONFETTI_COLORS: [u32; 6] = [0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0xFF00FF, 0x00FFFF];
const CONFETTI_GRAVITY: f32 = 0.1;
const BLOOD_GRAVITY: f32 = 0.2;
const BLOOD_ALPHA_DECAY: f32 = 0.01;

/// One piece of victory confetti. Removed once it falls off screen.
pub struct Confetti {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub color: Color,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Confetti {
    /// Burst from the viewport center with a random angle, speed, size,
    /// color and spin.
    pub fn burst(bounds: Vec2) -> Self {
        let angle = macroquad::rand::gen_range(0.0, std::f32::consts::TAU);
        let speed = macroquad::rand::gen_range(2.0, 7.0);
        let color_idx = macroquad::rand::gen_range(0, CONFETTI_COLORS.len());
        Self {
            x: bounds.x / 2.0,
            y: bounds.y / 2.0,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            size: macroquad::rand::gen_range(5.0, 15.0),
            color: Color::from_hex(CONFETTI_COLORS[color_idx]),
            rotation: macroquad::rand::gen_range(0.0, 360.0),
            rotation_speed: macroquad::rand::gen_range(-5.0, 5.0),
        }
    }

    pub fn integrate(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += CONFETTI_GRAVITY;
        self.rotation += self.rotation_speed;
    }

    pub fn off_screen(&self, bounds: Vec2) -> bool {
        self.y > bounds.y
    }
}

/// One drop of game-over blood. Fades out in place rather than being
/// removed; the pool lives until the game is rebuilt.
pub struct Blood {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub alpha: f32,
}

impl Blood {
    pub fn burst(origin: Vec2) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            vx: macroquad::rand::gen_range(-7.5, 7.5),
            vy: macroquad::rand::gen_range(-7.5, 7.5),
            size: macroquad::rand::gen_range(3.0, 8.0),
            alpha: 1.0,
        }
    }

    pub fn integrate(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += BLOOD_GRAVITY;
        self.alpha = (self.alpha - BLOOD_ALPHA_DECAY).max(0.0);
    }
}
