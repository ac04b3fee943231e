pub mod axis;
pub use self::axis::Axis;

pub mod direction;
pub use self::direction::Direction;
