use crate::{edit_cell::FieldChange, song::SongId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // song rows
    Cell { id: SongId, message: CellMessage },

    // add song form
    NewSongInputChanged(FieldChange),
    AddSong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellMessage {
    OpenPreview,
    ClosePreview,
    OpenEdit,
    CloseEdit,
    InputChanged(FieldChange),
    Submit,
    Delete,
}

impl CellMessage {
    #[must_use]
    pub fn for_song(self, id: SongId) -> Message {
        Message::Cell { id, message: self }
    }
}
