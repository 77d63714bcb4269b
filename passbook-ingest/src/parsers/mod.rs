//! Statement line parsers.

pub mod accumulator;
pub mod anchor;

pub use accumulator::DescriptionAccumulator;
pub use anchor::{AnchorFields, AnchorPattern};
