pub mod detail;
pub mod types;

pub use detail::*;
pub use types::*;
