// cargo watch -x 'fmt' -x 'test'

//! Arithmetic and lazy enumeration over IPv4 and IPv6 networks.
//!
//! - [`add`] offsets an address with byte wise carry / borrow
//! - [`next`] and [`prev`] find adjacent networks of the same size
//! - [`range`] and [`split`] produce lazy, cancellable [`NetSeq`] sequences
//!
//! Edge conditions never panic or error: out of range results are `None` and invalid
//! producer arguments give an empty sequence.

pub mod arith;
pub mod command;
pub mod config;
pub mod logging;
pub mod models;
pub mod output;
pub mod seq;

pub use arith::{add, next, prev};
pub use seq::{range, split, CancelToken, NetSeq, SeqState};
