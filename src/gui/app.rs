use super::{CellMessage, Message};
use crate::{
    config::Config,
    edit_cell::{CellOptions, NewSongForm, SongEditCell, SubmitOutcome},
    song::SongId,
    store::SongList,
};
use iced::{
    widget::{column, container, scrollable, text, Column, Rule},
    Application, Command, Element, Length, Theme,
};

#[derive(Debug)]
pub struct App {
    songs: SongList,
    /// One per song, in the same order as `songs`
    cells: Vec<SongEditCell>,
    new_song: NewSongForm,
    options: CellOptions,
}

impl Application for App {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = Config;

    fn new(flags: Self::Flags) -> (Self, Command<Self::Message>) {
        (App::with_config(flags), Command::none())
    }

    fn title(&self) -> String {
        String::from("Songs")
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        self.handle(message);
        Command::none()
    }

    fn view(&self) -> Element<Self::Message> {
        let mut list: Column<'_, Message> = column![].spacing(16);
        if self.songs.is_empty() {
            list = list.push(text("No songs yet"));
        }
        for (index, song) in self.songs.songs().iter().enumerate() {
            if let Some(cell) = self.cell(song.id) {
                list = list.push(Self::view_song_row(index, song, cell));
            }
        }

        let content = column![list, Rule::horizontal(4), Self::view_add_song(&self.new_song)]
            .spacing(20)
            .max_width(800);

        scrollable(
            container(content)
                .width(Length::Fill)
                .padding(40)
                .center_x(),
        )
        .into()
    }
}

impl App {
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let mut app = Self {
            songs: SongList::new(config.songs),
            cells: Vec::new(),
            new_song: NewSongForm::default(),
            options: config.cell,
        };
        app.sync_cells();
        app
    }

    #[must_use]
    pub fn songs(&self) -> &SongList {
        &self.songs
    }

    #[must_use]
    pub fn cell(&self, id: SongId) -> Option<&SongEditCell> {
        self.cells.iter().find(|cell| cell.id() == id)
    }

    #[must_use]
    pub fn new_song(&self) -> &NewSongForm {
        &self.new_song
    }

    /// Applies one UI event. Events are handled one at a time, in the order they arrive.
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Cell { id, message } => self.handle_cell(id, message),
            Message::NewSongInputChanged(change) => {
                self.new_song.form.apply(change, self.options.absent_link);
            }
            Message::AddSong => {
                if self
                    .new_song
                    .submit(self.options.absent_link, &mut self.songs)
                    .is_some()
                {
                    self.sync_cells();
                }
            }
        }
    }

    fn handle_cell(&mut self, id: SongId, message: CellMessage) {
        let Some(cell) = self.cells.iter_mut().find(|cell| cell.id() == id) else {
            log::warn!("got {message:?} for song {id}, which has no row");
            return;
        };

        match message {
            CellMessage::OpenPreview => cell.open_preview(),
            CellMessage::ClosePreview => cell.close_preview(),
            CellMessage::OpenEdit => {
                if let Some(song) = self.songs.get(id) {
                    cell.open_edit(song);
                }
            }
            CellMessage::CloseEdit => cell.close_edit(),
            CellMessage::InputChanged(change) => cell.change_field(change),
            CellMessage::Submit => {
                if cell.submit_edit(&mut self.songs) == SubmitOutcome::Committed {
                    log::debug!("song {id} saved");
                }
            }
            CellMessage::Delete => {
                cell.confirm_delete(&mut self.songs);
                self.sync_cells();
            }
        }
    }

    /// Drops rows whose song is gone and mounts fresh rows for new songs.
    /// Surviving rows keep their state, drafts included.
    fn sync_cells(&mut self) {
        let options = self.options;
        let mut old = std::mem::take(&mut self.cells);
        self.cells = self
            .songs
            .songs()
            .iter()
            .map(|song| match old.iter().position(|cell| cell.id() == song.id) {
                Some(i) => old.swap_remove(i),
                None => SongEditCell::new(song, options),
            })
            .collect();
    }
}
