//! Reusable UI widgets

mod range_input;

pub use range_input::{submitted, RangeInput};
