use glam::IVec2;

/// Axis aligned integer rectangle in screen coordinates, y grows downwards
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn translate(&mut self, offset: IVec2) {
        self.x += offset.x;
        self.y += offset.y;
    }

    /// Pushes the rectangle back so it lies fully inside `0..width` x `0..height`
    pub fn clamp_within(&mut self, width: i32, height: i32) {
        if self.x < 0 { self.x = 0; }
        if self.x + self.w > width { self.x = width - self.w; }
        if self.y < 0 { self.y = 0; }
        if self.y + self.h > height { self.y = height - self.h; }
    }
}

pub trait RectIntersectionQuery {
    fn has_intersection(&self, other: &Self) -> bool;
}

impl RectIntersectionQuery for Rect {
    /// Rectangles that merely touch along an edge do not intersect, and an empty
    /// rectangle never intersects anything
    fn has_intersection(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let x_overlap = self.x.max(other.x) < (self.x + self.w).min(other.x + other.w);
        let y_overlap = self.y.max(other.y) < (self.y + self.h).min(other.y + other.h);
        x_overlap && y_overlap
    }
}
