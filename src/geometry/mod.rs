pub mod coordinate;
pub mod triangle;

pub use coordinate::Coordinate;
pub use triangle::{EdgeDistance, EdgeSlot, Triangle};
