use super::{
    dialog::{dialog, DialogActions},
    form::song_form,
    App, CellMessage, Message,
};
use crate::{
    edit_cell::SongEditCell,
    song::{Song, SongId},
};
use iced::{
    theme,
    widget::{column, row, text, Button, Column},
    Alignment, Element, Length,
};

/// What the preview dialog says about a song. A song with a link gets a single
/// `author - title` line followed by the link.
#[must_use]
pub fn preview_lines(cell: &SongEditCell, song: &Song) -> Vec<String> {
    let author = cell.display_author(song);
    let title = cell.display_title(song);
    match song.link() {
        Some(link) => vec![format!("{author} - {title}"), link.to_string()],
        None => vec![
            format!("Composer: {}", song.author),
            format!("Title: {}", song.title),
        ],
    }
}

#[must_use]
pub fn preview_dialog_actions(id: SongId) -> DialogActions {
    DialogActions::closing(CellMessage::ClosePreview.for_song(id), "Close")
}

/// The edit dialog's cancel button deletes the song; only the close button dismisses it.
#[must_use]
pub fn edit_dialog_actions(id: SongId) -> DialogActions {
    DialogActions {
        on_close: CellMessage::CloseEdit.for_song(id),
        on_submit: Some(CellMessage::Submit.for_song(id)),
        on_delete: Some(CellMessage::Delete.for_song(id)),
        cancel_text: "Delete",
        submit_text: "Save",
    }
}

impl App {
    #[must_use]
    pub fn view_song_row<'a>(index: usize, song: &Song, cell: &SongEditCell) -> Element<'a, Message> {
        let id = song.id;

        let preview_button = Button::new("Preview")
            .style(theme::Button::Positive)
            .on_press(CellMessage::OpenPreview.for_song(id));
        let edit_button = Button::new("Edit").on_press(CellMessage::OpenEdit.for_song(id));

        let line = row![
            text(cell.row_label(index, song)).width(Length::Fill),
            preview_button,
            edit_button,
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        let mut content: Column<'_, Message> = column![line].spacing(10);

        let preview = Column::with_children(
            preview_lines(cell, song)
                .into_iter()
                .map(|line| text(line).into())
                .collect(),
        )
        .spacing(6);
        if let Some(preview) = dialog(
            cell.is_showing_preview,
            "Preview",
            preview.into(),
            preview_dialog_actions(id),
        ) {
            content = content.push(preview);
        }

        let form = song_form(
            &cell.form,
            &cell.errors,
            move |change| CellMessage::InputChanged(change).for_song(id),
            CellMessage::Submit.for_song(id),
        );
        if let Some(edit) = dialog(cell.is_editing, "Edit", form, edit_dialog_actions(id)) {
            content = content.push(edit);
        }

        content.into()
    }
}
