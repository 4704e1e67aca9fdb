use macroquad::prelude::*;

const PLATFORM_HEIGHT: f32 = 5.0;
/// Vertical gap between consecutive platform levels.
const LEVEL_SPACING: f32 = 125.0;
const GROUND_OFFSET: f32 = 100.0;
pub const LADDER_WIDTH: f32 = 40.0;
const LADDER_HEIGHT: f32 = 125.0;
/// Horizontal placement of each ladder, as a fraction of the viewport
/// width, indexed by the platform level the ladder leads up to.
const LADDER_COLUMNS: [f32; 5] = [0.2, 0.8, 0.3, 0.7, 0.4];
/// A ladder belongs to a platform when their tops are this close.
const LADDER_PAIR_TOLERANCE: f32 = 20.0;

/// Wall-mounted torch, placed in pairs flanking each ladder. Purely
/// decorative; the flame sways with a per-torch phase.
pub struct Torch {
    pub x: f32,
    pub y: f32,
    pub base_width: f32,
    pub base_height: f32,
    pub flame_offset: f32,
    flame_time: f32,
}

impl Torch {
    fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            base_width: 10.0,
            base_height: 20.0,
            flame_offset: 0.0,
            flame_time: macroquad::rand::gen_range(0.0, std::f32::consts::TAU),
        }
    }
}

/// Fixed level geometry, derived deterministically from the viewport
/// size. Platform 0 is the ground; y strictly decreases with the index.
pub struct Level {
    pub platforms: Vec<Rect>,
    pub ladders: Vec<Rect>,
    pub torches: Vec<Torch>,
}

impl Level {
    pub fn build(width: f32, height: f32) -> Self {
        let platforms: Vec<Rect> = (0..6)
            .map(|i| {
                Rect::new(
                    0.0,
                    height - GROUND_OFFSET - i as f32 * LEVEL_SPACING,
                    width,
                    PLATFORM_HEIGHT,
                )
            })
            .collect();

        // One ladder per platform gap, its top flush with the upper
        // platform of the pair.
        let ladders: Vec<Rect> = LADDER_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, col)| {
                Rect::new(
                    width * col,
                    height - GROUND_OFFSET - (i + 1) as f32 * LEVEL_SPACING,
                    LADDER_WIDTH,
                    LADDER_HEIGHT,
                )
            })
            .collect();

        let mut torches = Vec::new();
        for platform in &platforms {
            let nearby = ladders
                .iter()
                .find(|l| (l.y - platform.y).abs() < LADDER_PAIR_TOLERANCE);
            if let Some(ladder) = nearby {
                let torch_y = platform.y + 35.0;
                torches.push(Torch::new(ladder.x - 40.0, torch_y));
                torches.push(Torch::new(ladder.x + ladder.w + 40.0, torch_y));
            }
        }

        Self { platforms, ladders, torches }
    }

    pub fn update_torches(&mut self) {
        for torch in &mut self.torches {
            torch.flame_time += 0.1;
            torch.flame_offset = torch.flame_time.sin() * 3.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_y_strictly_decreases() {
        let level = Level::build(800.0, 800.0);
        assert_eq!(level.platforms.len(), 6);
        assert_eq!(level.platforms[0].y, 700.0);
        for pair in level.platforms.windows(2) {
            assert!(pair[1].y < pair[0].y);
        }
    }

    #[test]
    fn every_ladder_pairs_with_a_platform() {
        let level = Level::build(1024.0, 768.0);
        assert_eq!(level.ladders.len(), 5);
        for ladder in &level.ladders {
            assert!(level
                .platforms
                .iter()
                .any(|p| (ladder.y - p.y).abs() < LADDER_PAIR_TOLERANCE));
        }
    }

    #[test]
    fn ladder_spans_one_level_gap() {
        let level = Level::build(800.0, 800.0);
        let ladder = level.ladders[0];
        // ladder top flush with platform 1, foot at the ground platform
        assert_eq!(ladder.y, level.platforms[1].y);
        assert_eq!(ladder.y + ladder.h, level.platforms[0].y);
    }

    #[test]
    fn torches_flank_each_ladder() {
        let level = Level::build(800.0, 800.0);
        // one ladder per platform above ground, two torches each
        assert_eq!(level.torches.len(), level.ladders.len() * 2);
    }

    #[test]
    fn torch_flame_sways_within_range() {
        let mut level = Level::build(800.0, 800.0);
        for _ in 0..100 {
            level.update_torches();
            for torch in &level.torches {
                assert!(torch.flame_offset.abs() <= 3.0);
            }
        }
    }
}
