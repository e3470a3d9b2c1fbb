//! Integer lattice primitives for walk simulation.
//!
//! [`Point`] is a plain `(x, y)` value on the 2D integer lattice and
//! [`Direction`] is the closed set of cardinal unit steps a walker can take.
//!
//! ```rust
//! use trek_lattice::{Direction, Point};
//!
//! let mut pos = Point::ORIGIN;
//! pos.accumulate(Direction::North.step());
//! pos.accumulate(Direction::East.step());
//! assert_eq!(pos, Point::new(1, 1));
//! ```

pub mod direction;
pub mod point;

pub use direction::Direction;
pub use point::Point;
