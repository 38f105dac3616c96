use crate::song::{NewSong, Song, SongEdit, SongId};

/// Commands the song list accepts. Every command is applied immediately and is assumed to succeed.
pub trait SongStore {
    fn add_song(&mut self, song: NewSong) -> SongId;
    fn edit_song(&mut self, edit: SongEdit);
    fn delete_song(&mut self, id: SongId);
}

/// The list of songs shown on the page, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SongList {
    songs: Vec<Song>,
    next_id: u32,
}

impl SongList {
    #[must_use]
    pub fn new(seed: Vec<NewSong>) -> Self {
        let mut list = Self::default();
        for song in seed {
            list.add_song(song);
        }
        list
    }

    #[must_use]
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    #[must_use]
    pub fn get(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl SongStore for SongList {
    fn add_song(&mut self, song: NewSong) -> SongId {
        self.next_id += 1;
        let id = SongId(self.next_id);
        log::info!("adding song {id}: {} - {}", song.author, song.title);
        self.songs.push(Song {
            id,
            author: song.author,
            title: song.title,
            link_on_youtube: song.link_on_youtube,
        });
        id
    }

    fn edit_song(&mut self, edit: SongEdit) {
        if let Some(song) = self.songs.iter_mut().find(|song| song.id == edit.id) {
            log::info!("editing song {}: {} - {}", edit.id, edit.author, edit.title);
            song.author = edit.author;
            song.title = edit.title;
            song.link_on_youtube = edit.link_on_youtube;
        } else {
            log::warn!("tried to edit song {}, but it isn't in the list", edit.id);
        }
    }

    fn delete_song(&mut self, id: SongId) {
        let before = self.songs.len();
        self.songs.retain(|song| song.id != id);
        if self.songs.len() == before {
            log::warn!("tried to delete song {id}, but it isn't in the list");
        } else {
            log::info!("deleted song {id}");
        }
    }
}
