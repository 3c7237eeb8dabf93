pub mod input;
pub mod points;
pub mod troops;
pub mod units;

pub use input::*;
pub use points::*;
pub use troops::*;
pub use units::*;
