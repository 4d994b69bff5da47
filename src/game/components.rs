use glam::IVec2;
use rand::Rng;
use crate::math_utils::Rect;

/// Something that moves by a constant step every tick
pub trait Kinematic {
    fn rect_mut(&mut self) -> &mut Rect;
    fn velocity(&self) -> IVec2;

    fn advance(&mut self) {
        let velocity = self.velocity();
        self.rect_mut().translate(velocity);
    }
}

/// Recycling policy for entities that are never removed, only moved back into play
pub trait Respawn {
    fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ship {
    pub rect: Rect,
    pub velocity: IVec2
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Debris {
    pub rect: Rect
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Star {
    pub rect: Rect,
    pub speed: i32
}
