mod app;
mod bridge;
mod login;

pub use app::JarvisApp;
pub use bridge::{UiBridge, UiEvent};
