pub mod fixtures;
pub mod registry;

pub use fixtures::*;
pub use registry::*;
