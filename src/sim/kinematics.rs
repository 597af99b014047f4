//! Position/velocity integration shared by every moving entity

use glam::Vec2;

/// Anything with a position and a per-tick velocity
pub trait Kinematic {
    fn pos(&self) -> Vec2;
    fn vel(&self) -> Vec2;
    fn set_pos(&mut self, pos: Vec2);

    /// Advance one tick: `pos += vel`
    #[inline]
    fn integrate(&mut self) {
        let next = step(self.pos(), self.vel());
        self.set_pos(next);
    }
}

/// One explicit Euler step with a unit timestep
#[inline]
pub fn step(pos: Vec2, vel: Vec2) -> Vec2 {
    pos + vel
}

/// Implement [`Kinematic`] for a struct with `pos` and `vel` fields
macro_rules! impl_kinematic {
    ($ty:ty) => {
        impl $crate::sim::kinematics::Kinematic for $ty {
            #[inline]
            fn pos(&self) -> glam::Vec2 {
                self.pos
            }
            #[inline]
            fn vel(&self) -> glam::Vec2 {
                self.vel
            }
            #[inline]
            fn set_pos(&mut self, pos: glam::Vec2) {
                self.pos = pos;
            }
        }
    };
}

pub(crate) use impl_kinematic;
