pub mod dataset;
pub mod error;
pub mod operations;
pub mod partition;

pub use dataset::*;
pub use error::*;
pub use operations::*;
pub use partition::*;
