mod app;
pub use app::App;

mod message;
pub use message::*;

pub mod dialog;
pub mod form;

mod view_add_song;
mod view_song_row;
pub use view_song_row::{edit_dialog_actions, preview_dialog_actions, preview_lines};
