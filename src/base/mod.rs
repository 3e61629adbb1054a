//! Foundation types shared by every later stage: source positions and
//! string interning. Has no dependency on any other module in this crate.

mod interner;
mod line_index;
mod position;

pub use interner::{IStr, Interner};
pub use line_index::LineIndex;
pub use position::{Position, Span};
