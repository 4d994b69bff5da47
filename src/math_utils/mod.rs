pub mod collision_queries;

pub use collision_queries::{Rect, RectIntersectionQuery};
