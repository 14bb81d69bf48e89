pub mod auth;
pub mod panel;
pub mod storage;

pub use auth::*;
pub use panel::*;
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};
