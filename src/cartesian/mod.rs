mod point;
mod segment;
mod window;

pub use self::point::Point;
pub use self::segment::Segment;
pub use self::window::Window;
