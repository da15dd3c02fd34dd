//! Synchronous address arithmetic.
//!
//! - [`add`] - offset an address by a signed integer with carry / borrow
//! - [`next`] and [`prev`] - adjacent sibling networks of the same prefix length

mod add;
mod adjacent;

pub use add::add;
pub use adjacent::{next, prev};
