//! Collision detection between points and asteroid footprints
//!
//! Bullets and the player are treated as dimensionless points; asteroids as
//! fixed-size squares anchored at their top-left corner.

use glam::Vec2;

use super::player::Player;
use super::projectile::Bullet;
use super::spawner::Asteroid;

/// Axis-aligned square collision box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Top-left corner
    pub min: Vec2,
    pub size: f32,
}

impl Footprint {
    pub fn of(asteroid: &Asteroid, size: f32) -> Self {
        Self {
            min: asteroid.pos,
            size,
        }
    }

    /// Half-open containment: the left/top edges are inside, right/bottom are not
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x
            && p.x < self.min.x + self.size
            && p.y >= self.min.y
            && p.y < self.min.y + self.size
    }
}

/// Index of the first asteroid (in iteration order) containing the player's position
pub fn player_hit(player: &Player, asteroids: &[Asteroid], size: f32) -> Option<usize> {
    asteroids
        .iter()
        .position(|a| Footprint::of(a, size).contains_point(player.pos))
}

/// One bullet destroying one asteroid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kill {
    pub bullet_id: u32,
    pub asteroid_id: u32,
}

/// Entities to remove after a bullet/asteroid scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removals {
    pub kills: Vec<Kill>,
}

impl Removals {
    pub fn is_empty(&self) -> bool {
        self.kills.is_empty()
    }

    pub fn removes_bullet(&self, id: u32) -> bool {
        self.kills.iter().any(|k| k.bullet_id == id)
    }

    pub fn removes_asteroid(&self, id: u32) -> bool {
        self.kills.iter().any(|k| k.asteroid_id == id)
    }
}

/// Match bullets against asteroids without mutating either collection.
///
/// Bullets are visited in order; each takes the first asteroid (in iteration
/// order) whose footprint contains it. A bullet kills at most one asteroid and
/// an asteroid is claimed by at most one bullet.
pub fn find_bullet_hits(bullets: &[Bullet], asteroids: &[Asteroid], size: f32) -> Removals {
    let mut claimed = vec![false; asteroids.len()];
    let mut removals = Removals::default();

    for bullet in bullets {
        let hit = asteroids.iter().enumerate().find(|(i, a)| {
            !claimed[*i] && Footprint::of(a, size).contains_point(bullet.pos)
        });
        if let Some((i, asteroid)) = hit {
            claimed[i] = true;
            removals.kills.push(Kill {
                bullet_id: bullet.id,
                asteroid_id: asteroid.id,
            });
        }
    }

    removals
}

/// Scan, then filter both collections. Returns what was removed.
pub fn resolve_bullet_hits(
    bullets: &mut Vec<Bullet>,
    asteroids: &mut Vec<Asteroid>,
    size: f32,
) -> Removals {
    let removals = find_bullet_hits(bullets, asteroids, size);
    if !removals.is_empty() {
        bullets.retain(|b| !removals.removes_bullet(b.id));
        asteroids.retain(|a| !removals.removes_asteroid(a.id));
    }
    removals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn asteroid(id: u32, x: f32, y: f32) -> Asteroid {
        Asteroid {
            id,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            heading: 0.0,
            speed: 0.0,
        }
    }

    fn bullet(id: u32, x: f32, y: f32) -> Bullet {
        Bullet {
            id,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 4.0,
        }
    }

    #[test]
    fn test_footprint_half_open() {
        let fp = Footprint {
            min: Vec2::new(100.0, 100.0),
            size: 80.0,
        };
        assert!(fp.contains_point(Vec2::new(100.0, 100.0)));
        assert!(fp.contains_point(Vec2::new(179.9, 179.9)));
        assert!(!fp.contains_point(Vec2::new(180.0, 150.0)));
        assert!(!fp.contains_point(Vec2::new(150.0, 180.0)));
        assert!(!fp.contains_point(Vec2::new(99.9, 150.0)));
    }

    #[test]
    fn test_bullet_radius_ignored() {
        // Bullet centre 2 units outside the box; its radius would overlap
        let removals = find_bullet_hits(&[bullet(1, 98.0, 120.0)], &[asteroid(1, 100.0, 100.0)], 80.0);
        assert!(removals.is_empty());
    }

    #[test]
    fn test_coincident_bullet_and_asteroid_both_removed() {
        let mut bullets = vec![bullet(1, 140.0, 140.0), bullet(2, 500.0, 500.0)];
        let mut asteroids = vec![asteroid(10, 100.0, 100.0), asteroid(11, 300.0, 300.0)];

        let removals = resolve_bullet_hits(&mut bullets, &mut asteroids, 80.0);

        assert_eq!(removals.kills, vec![Kill { bullet_id: 1, asteroid_id: 10 }]);
        assert_eq!(bullets.iter().map(|b| b.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(asteroids.iter().map(|a| a.id).collect::<Vec<_>>(), vec![11]);
    }

    #[test]
    fn test_first_asteroid_in_order_wins() {
        // Bullet sits inside two overlapping asteroids; the earlier one is taken
        // even though the later one is closer to the bullet
        let mut bullets = vec![bullet(1, 150.0, 150.0)];
        let mut asteroids = vec![asteroid(10, 80.0, 80.0), asteroid(11, 140.0, 140.0)];

        let removals = resolve_bullet_hits(&mut bullets, &mut asteroids, 80.0);

        assert_eq!(removals.kills, vec![Kill { bullet_id: 1, asteroid_id: 10 }]);
        assert!(bullets.is_empty());
        assert_eq!(asteroids.len(), 1);
        assert_eq!(asteroids[0].id, 11);
    }

    #[test]
    fn test_one_kill_per_bullet_and_per_asteroid() {
        // Two bullets inside the same asteroid: only the first scores
        let mut bullets = vec![bullet(1, 110.0, 110.0), bullet(2, 120.0, 120.0)];
        let mut asteroids = vec![asteroid(10, 100.0, 100.0)];

        let removals = resolve_bullet_hits(&mut bullets, &mut asteroids, 80.0);

        assert_eq!(removals.kills.len(), 1);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].id, 2);
        assert!(asteroids.is_empty());
    }

    #[test]
    fn test_player_hit_reports_first_match() {
        let player = Player::new(&Tuning::default());
        let asteroids = [
            asteroid(1, 0.0, 0.0),
            asteroid(2, 350.0, 250.0),
            asteroid(3, 360.0, 260.0),
        ];
        assert_eq!(player_hit(&player, &asteroids, 80.0), Some(1));
        assert_eq!(player_hit(&player, &asteroids[..1], 80.0), None);
    }
}
