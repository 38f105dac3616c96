use super::{form::song_form, App, Message};
use crate::edit_cell::NewSongForm;
use iced::{
    widget::{column, text, Button},
    Element,
};

impl App {
    #[must_use]
    pub fn view_add_song<'a>(state: &'_ NewSongForm) -> Element<'a, Message> {
        let form = song_form(
            &state.form,
            &state.errors,
            Message::NewSongInputChanged,
            Message::AddSong,
        );
        let add_button = Button::new("Add song").on_press(Message::AddSong);

        column![text("New song").size(20), form, add_button]
            .spacing(12)
            .into()
    }
}
