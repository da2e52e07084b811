pub mod bounds;
pub mod fields;
pub mod source;

// Re-export key types for convenience
pub use bounds::{Bounds, Extent};
pub use fields::Field;
pub use source::Dataset;
