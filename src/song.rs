use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SongId(pub u32);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub author: String,
    pub title: String,
    #[serde(rename = "linkOnYouTube", default)]
    pub link_on_youtube: Option<String>,
}

impl Song {
    /// The link, if there is one worth following. An empty string counts as no link.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link_on_youtube.as_deref().filter(|link| !link.is_empty())
    }
}

/// A song that hasn't been given an id by the store yet
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewSong {
    pub author: String,
    pub title: String,
    #[serde(rename = "linkOnYouTube", default)]
    pub link_on_youtube: Option<String>,
}

/// What gets handed to [`crate::store::SongStore::edit_song`] after a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEdit {
    pub id: SongId,
    pub author: String,
    pub title: String,
    pub link_on_youtube: Option<String>,
}

/// How "no link" is written down in form state and in committed edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkSentinel {
    /// No link is `None`
    #[default]
    Undefined,
    /// No link is `Some("")`
    Empty,
}

impl LinkSentinel {
    /// The value standing in for a missing link.
    ///
    /// ```
    /// use songlist::song::LinkSentinel;
    ///
    /// assert_eq!(LinkSentinel::Undefined.absent(), None);
    /// assert_eq!(LinkSentinel::Empty.absent(), Some(String::new()));
    /// ```
    #[must_use]
    pub fn absent(self) -> Option<String> {
        match self {
            Self::Undefined => None,
            Self::Empty => Some(String::new()),
        }
    }

    /// Maps a raw link onto this sentinel: empty or missing links become [`Self::absent`],
    /// anything else goes through `keep`.
    pub fn apply(self, link: Option<&str>, keep: impl FnOnce(&str) -> String) -> Option<String> {
        match link {
            Some(link) if !link.is_empty() => Some(keep(link)),
            _ => self.absent(),
        }
    }
}
