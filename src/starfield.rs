//! Twinkling star backdrop for the main menu
//!
//! Purely visual; never touches gameplay.

use rand::Rng;

/// Number of stars in the backdrop
pub const STAR_COUNT: usize = 150;

const MIN_BRIGHTNESS: f32 = 120.0;
const MAX_BRIGHTNESS: f32 = 255.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: u8,
    /// Unclamped brightness; use [`Star::shade`] for drawing
    pub brightness: f32,
    pub twinkle_speed: f32,
    /// +1 brightening, -1 dimming
    pub direction: f32,
}

impl Star {
    /// Grey level to draw with, always within [120, 255]
    pub fn shade(&self) -> u8 {
        self.brightness.clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS) as u8
    }

    fn twinkle(&mut self) {
        self.brightness += self.twinkle_speed * self.direction;
        if self.brightness > MAX_BRIGHTNESS || self.brightness < MIN_BRIGHTNESS {
            self.direction = -self.direction;
        }
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        let max_x = width.floor() as i32;
        let max_y = height.floor() as i32;
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.random_range(0..=max_x) as f32,
                y: rng.random_range(0..=max_y) as f32,
                size: rng.random_range(1..=3),
                brightness: rng.random_range(120..=255) as f32,
                twinkle_speed: rng.random_range(0.5..1.5),
                direction: if rng.random_bool(0.5) { 1.0 } else { -1.0 },
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Advance every star's brightness by one frame
    pub fn twinkle(&mut self) {
        for star in &mut self.stars {
            star.twinkle();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_stars_in_bounds() {
        let field = Starfield::new(800.0, 600.0, &mut Pcg32::seed_from_u64(5));
        assert_eq!(field.stars().len(), STAR_COUNT);
        for star in field.stars() {
            assert!(star.x >= 0.0 && star.x <= 800.0);
            assert!(star.y >= 0.0 && star.y <= 600.0);
            assert!((1..=3).contains(&star.size));
            assert!(star.twinkle_speed >= 0.5 && star.twinkle_speed < 1.5);
        }
    }

    #[test]
    fn test_twinkle_bounces() {
        let mut star = Star {
            x: 0.0,
            y: 0.0,
            size: 1,
            brightness: 254.5,
            twinkle_speed: 1.0,
            direction: 1.0,
        };
        star.twinkle();
        assert_eq!(star.direction, -1.0);
        assert_eq!(star.shade(), 255);
        star.twinkle();
        assert_eq!(star.brightness, 254.5);
    }

    #[test]
    fn test_shade_stays_in_range() {
        let mut field = Starfield::new(800.0, 600.0, &mut Pcg32::seed_from_u64(8));
        for _ in 0..1000 {
            field.twinkle();
        }
        for star in field.stars() {
            assert!(star.shade() >= 120);
        }
    }
}
