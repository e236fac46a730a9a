mod app;
mod media;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::{ShorelineApp, run};
pub use media::RfdPicker;
pub use message::Message;
pub use state::AppState;
