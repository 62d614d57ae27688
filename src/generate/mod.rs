//! Sequences that produce values algorithmically, possibly without end.

mod count;
mod cycle;
mod range;
mod repeat;

pub use count::{count, Count};
pub use cycle::Cycle;
pub use range::{range, range_between, range_step, Range};
pub use repeat::{repeat, repeat_forever, repeat_n, Repeat};
