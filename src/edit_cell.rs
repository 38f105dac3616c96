//! The per-row edit workflow: preview and edit dialogs, the working copy of the form,
//! validation on submit and forwarding of confirmed changes to a [`SongStore`].

use crate::{
    song::{LinkSentinel, NewSong, Song, SongEdit, SongId},
    store::SongStore,
    utils::{trim_text, uc_first},
    validation::{validate, ValidationErrors},
};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, str::FromStr};
use thiserror::Error;

/// What happens to an unsaved draft when the edit dialog is opened again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPolicy {
    /// Closing the dialog keeps whatever was typed, and reopening shows it again
    #[default]
    KeepDraft,
    /// Every new edit session starts from the song as it is in the store
    ResetOnOpen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CellOptions {
    pub absent_link: LinkSentinel,
    pub capitalize_display: bool,
    pub draft_policy: DraftPolicy,
}

/// Names a form input, for callers that only know the input's `name` attribute.
/// See [`SongEditCell::change_field_by_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Author,
    Title,
    LinkOnYoutube,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(Self::Author),
            "title" => Ok(Self::Title),
            "linkOnYouTube" | "link_on_youtube" => Ok(Self::LinkOnYoutube),
            other => Err(FieldError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Author(String),
    Title(String),
    LinkOnYoutube(String),
}

impl FieldChange {
    #[must_use]
    pub fn new(field: Field, value: String) -> Self {
        match field {
            Field::Author => Self::Author(value),
            Field::Title => Self::Title(value),
            Field::LinkOnYoutube => Self::LinkOnYoutube(value),
        }
    }
}

/// Working copy of a song's fields while it is being edited (or added)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFormState {
    pub author: String,
    pub title: String,
    pub link_on_youtube: Option<String>,
}

impl EditFormState {
    #[must_use]
    pub fn from_song(song: &Song, sentinel: LinkSentinel) -> Self {
        Self {
            author: song.author.clone(),
            title: song.title.clone(),
            link_on_youtube: sentinel.apply(song.link_on_youtube.as_deref(), str::to_string),
        }
    }

    /// Replaces exactly one field. An empty link is stored as the absent sentinel.
    pub fn apply(&mut self, change: FieldChange, sentinel: LinkSentinel) {
        match change {
            FieldChange::Author(value) => self.author = value,
            FieldChange::Title(value) => self.title = value,
            FieldChange::LinkOnYoutube(value) => {
                self.link_on_youtube = sentinel.apply(Some(value.as_str()), str::to_string);
            }
        }
    }

    #[must_use]
    pub fn link(&self) -> &str {
        self.link_on_youtube.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        validate(
            self.author.trim(),
            self.title.trim(),
            self.link_on_youtube.as_deref(),
        )
    }

    /// Cleaned up values shown after a rejected submit: whitespace runs are squashed too
    #[must_use]
    pub fn normalized(&self, sentinel: LinkSentinel) -> Self {
        Self {
            author: trim_text(&self.author).into_owned(),
            title: trim_text(&self.title).into_owned(),
            link_on_youtube: sentinel.apply(
                self.link_on_youtube.as_deref().map(trim_text).as_deref(),
                str::to_string,
            ),
        }
    }

    /// The values that get written to the store: only the ends are trimmed
    #[must_use]
    pub fn committed(&self, sentinel: LinkSentinel) -> Self {
        Self {
            author: self.author.trim().to_string(),
            title: self.title.trim().to_string(),
            link_on_youtube: sentinel.apply(
                self.link_on_youtube.as_deref().map(str::trim),
                str::to_string,
            ),
        }
    }
}

impl From<EditFormState> for NewSong {
    fn from(form: EditFormState) -> Self {
        Self {
            author: form.author,
            title: form.title,
            link_on_youtube: form.link_on_youtube,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Committed,
    Rejected,
}

/// One row of the song list
#[derive(Debug, Clone)]
pub struct SongEditCell {
    id: SongId,
    options: CellOptions,
    pub form: EditFormState,
    pub errors: ValidationErrors,
    pub is_showing_preview: bool,
    pub is_editing: bool,
}

impl SongEditCell {
    #[must_use]
    pub fn new(song: &Song, options: CellOptions) -> Self {
        Self {
            id: song.id,
            options,
            form: EditFormState::from_song(song, options.absent_link),
            errors: ValidationErrors::default(),
            is_showing_preview: false,
            is_editing: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> SongId {
        self.id
    }

    #[must_use]
    pub fn options(&self) -> CellOptions {
        self.options
    }

    pub fn open_preview(&mut self) {
        self.is_showing_preview = true;
    }

    pub fn close_preview(&mut self) {
        self.is_showing_preview = false;
    }

    /// Opens the edit dialog. `song` is the current store copy, only read under
    /// [`DraftPolicy::ResetOnOpen`].
    pub fn open_edit(&mut self, song: &Song) {
        if self.options.draft_policy == DraftPolicy::ResetOnOpen {
            self.form = EditFormState::from_song(song, self.options.absent_link);
            self.errors = ValidationErrors::default();
        }
        self.is_editing = true;
    }

    /// Hides the edit dialog. Typed values and errors stay as they are.
    pub fn close_edit(&mut self) {
        self.is_editing = false;
    }

    pub fn change_field(&mut self, change: FieldChange) {
        self.form.apply(change, self.options.absent_link);
    }

    /// Like [`Self::change_field`], keyed by the form input's name
    ///
    /// # Errors
    /// If `name` isn't one of the song's fields. The form is left untouched.
    pub fn change_field_by_name(&mut self, name: &str, value: String) -> Result<(), FieldError> {
        let field = name.parse::<Field>().map_err(|err| {
            log::warn!("ignoring change to song {}: {err}", self.id);
            err
        })?;
        self.change_field(FieldChange::new(field, value));
        Ok(())
    }

    pub fn submit_edit(&mut self, store: &mut impl SongStore) -> SubmitOutcome {
        let sentinel = self.options.absent_link;
        let errors = self.form.validate();

        if !errors.is_empty() {
            log::debug!("song {} not saved: {errors:?}", self.id);
            self.errors = errors;
            self.form = self.form.normalized(sentinel);
            return SubmitOutcome::Rejected;
        }

        let committed = self.form.committed(sentinel);
        store.edit_song(SongEdit {
            id: self.id,
            author: committed.author.clone(),
            title: committed.title.clone(),
            link_on_youtube: committed.link_on_youtube.clone(),
        });

        self.form = committed;
        self.errors = ValidationErrors::default();
        self.is_editing = false;
        SubmitOutcome::Committed
    }

    /// Wired to the edit dialog's cancel button, which deletes rather than dismisses.
    pub fn confirm_delete(&mut self, store: &mut impl SongStore) {
        store.delete_song(self.id);
        self.is_editing = false;
    }

    #[must_use]
    pub fn display_author<'a>(&self, song: &'a Song) -> Cow<'a, str> {
        self.display(&song.author)
    }

    #[must_use]
    pub fn display_title<'a>(&self, song: &'a Song) -> Cow<'a, str> {
        self.display(&song.title)
    }

    fn display<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.capitalize_display {
            uc_first(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// e.g. `"1. Bach - Fugue"` for the first row
    #[must_use]
    pub fn row_label(&self, index: usize, song: &Song) -> String {
        format!(
            "{}. {} - {}",
            index + 1,
            self.display_author(song),
            self.display_title(song)
        )
    }
}

/// The add-song form at the bottom of the list. Validates and normalizes the same way a row does.
#[derive(Debug, Clone, Default)]
pub struct NewSongForm {
    pub form: EditFormState,
    pub errors: ValidationErrors,
}

impl NewSongForm {
    /// Adds the song if it is valid, then clears the form. Returns the new id.
    pub fn submit(&mut self, sentinel: LinkSentinel, store: &mut impl SongStore) -> Option<SongId> {
        let errors = self.form.validate();
        if !errors.is_empty() {
            self.errors = errors;
            self.form = self.form.normalized(sentinel);
            return None;
        }

        let id = store.add_song(self.form.committed(sentinel).into());
        *self = Self::default();
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingStore {
        added: Vec<NewSong>,
        edits: Vec<SongEdit>,
        deletes: Vec<SongId>,
    }

    impl SongStore for RecordingStore {
        fn add_song(&mut self, song: NewSong) -> SongId {
            self.added.push(song);
            SongId(u32::try_from(self.added.len()).unwrap() + 100)
        }

        fn edit_song(&mut self, edit: SongEdit) {
            self.edits.push(edit);
        }

        fn delete_song(&mut self, id: SongId) {
            self.deletes.push(id);
        }
    }

    fn bach() -> Song {
        Song {
            id: SongId(1),
            author: String::from(" bach "),
            title: String::from("Fugue"),
            link_on_youtube: None,
        }
    }

    fn editing(song: &Song, options: CellOptions) -> SongEditCell {
        let mut cell = SongEditCell::new(song, options);
        cell.open_edit(song);
        cell
    }

    #[test]
    fn empty_author_is_rejected() {
        let song = bach();
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::Author(String::new()));
        assert_eq!(cell.submit_edit(&mut store), SubmitOutcome::Rejected);

        assert!(!cell.errors.error_author.is_empty());
        assert!(cell.errors.error_title.is_empty());
        assert!(store.edits.is_empty());
        assert!(cell.is_editing);
    }

    #[test]
    fn whitespace_only_author_is_rejected() {
        let song = bach();
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::Author(String::from(" \t ")));
        cell.submit_edit(&mut store);

        assert!(!cell.errors.error_author.is_empty());
        assert_eq!(cell.form.author, "");
        assert!(store.edits.is_empty());
    }

    #[test]
    fn trimmed_title_is_committed() {
        let song = bach();
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::Title(String::from("  Fugue No.2  ")));
        assert_eq!(cell.submit_edit(&mut store), SubmitOutcome::Committed);

        assert_eq!(
            store.edits,
            vec![SongEdit {
                id: SongId(1),
                author: String::from("bach"),
                title: String::from("Fugue No.2"),
                link_on_youtube: None,
            }]
        );
        assert!(!cell.is_editing);
        assert!(cell.errors.is_empty());
        assert_eq!(cell.form.title, "Fugue No.2");
        assert_eq!(cell.form.author, "bach");
    }

    #[test]
    fn errors_are_replaced_not_merged() {
        let song = bach();
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::Author(String::new()));
        cell.submit_edit(&mut store);
        assert!(!cell.errors.error_author.is_empty());

        cell.change_field(FieldChange::Author(String::from("Bach")));
        cell.change_field(FieldChange::Title(String::new()));
        cell.submit_edit(&mut store);
        assert!(cell.errors.error_author.is_empty());
        assert!(!cell.errors.error_title.is_empty());

        cell.change_field(FieldChange::Title(String::from("Fugue")));
        cell.submit_edit(&mut store);
        assert!(cell.errors.is_empty());
        assert_eq!(store.edits.len(), 1);
    }

    #[test]
    fn resubmitting_trimmed_values_commits_the_same_values() {
        let song = Song {
            author: String::from("  Bach  "),
            ..bach()
        };
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.submit_edit(&mut store);
        cell.open_edit(&song);
        cell.submit_edit(&mut store);

        assert_eq!(store.edits.len(), 2);
        assert_eq!(store.edits[0], store.edits[1]);
        assert_eq!(store.edits[0].author, "Bach");
    }

    #[test]
    fn field_changes_do_not_clobber_each_other() {
        let song = bach();
        let mut cell = SongEditCell::new(&song, CellOptions::default());

        cell.change_field(FieldChange::Title(String::from("New")));
        cell.change_field(FieldChange::Author(String::from("X")));

        assert_eq!(cell.form.title, "New");
        assert_eq!(cell.form.author, "X");
        assert_eq!(cell.form.link_on_youtube, None);
    }

    #[test]
    fn unknown_field_names_are_rejected() {
        let song = bach();
        let mut cell = SongEditCell::new(&song, CellOptions::default());
        let before = cell.form.clone();

        assert_eq!(
            cell.change_field_by_name("year", String::from("1722")),
            Err(FieldError::UnknownField(String::from("year")))
        );
        assert_eq!(cell.form, before);

        cell.change_field_by_name("linkOnYouTube", String::from("https://youtu.be/x"))
            .unwrap();
        assert_eq!(cell.form.link(), "https://youtu.be/x");
    }

    #[test]
    fn delete_ignores_form_state() {
        let song = bach();
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::Author(String::new()));
        cell.change_field(FieldChange::LinkOnYoutube(String::from("garbage")));
        cell.submit_edit(&mut store);
        assert!(!cell.errors.is_empty());

        cell.confirm_delete(&mut store);
        assert_eq!(store.deletes, vec![SongId(1)]);
        assert!(store.edits.is_empty());
        assert!(!cell.is_editing);
    }

    #[test]
    fn invalid_link_keeps_its_text() {
        let song = bach();
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::Title(String::from("  Fugue   No.2 ")));
        cell.change_field(FieldChange::LinkOnYoutube(String::from("not-a-url")));
        cell.submit_edit(&mut store);

        assert!(cell.errors.error_author.is_empty());
        assert!(cell.errors.error_title.is_empty());
        assert!(!cell.errors.error_link.is_empty());
        assert_eq!(cell.form.author, "bach");
        assert_eq!(cell.form.title, "Fugue No.2");
        assert_eq!(cell.form.link_on_youtube.as_deref(), Some("not-a-url"));
        assert!(cell.is_editing);
        assert!(store.edits.is_empty());
    }

    #[test]
    fn rejected_submit_keeps_absent_link_absent() {
        let song = bach();
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::Author(String::new()));
        cell.submit_edit(&mut store);
        assert_eq!(cell.form.link_on_youtube, None);

        let options = CellOptions {
            absent_link: LinkSentinel::Empty,
            ..CellOptions::default()
        };
        let mut cell = editing(&song, options);
        cell.change_field(FieldChange::Author(String::new()));
        cell.submit_edit(&mut store);
        assert_eq!(cell.form.link_on_youtube.as_deref(), Some(""));
    }

    #[test]
    fn blank_link_becomes_absent_after_rejected_submit() {
        let song = bach();
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::Author(String::new()));
        cell.change_field(FieldChange::LinkOnYoutube(String::from("   ")));
        cell.submit_edit(&mut store);
        assert!(!cell.errors.error_link.is_empty());
        assert_eq!(cell.form.link_on_youtube, None);

        let options = CellOptions {
            absent_link: LinkSentinel::Empty,
            ..CellOptions::default()
        };
        let mut cell = editing(&song, options);
        cell.change_field(FieldChange::Author(String::new()));
        cell.change_field(FieldChange::LinkOnYoutube(String::from(" \t ")));
        cell.submit_edit(&mut store);
        assert_eq!(cell.form.link_on_youtube.as_deref(), Some(""));
    }

    #[test]
    fn link_with_newline_is_not_committed() {
        let song = bach();
        let mut store = RecordingStore::default();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::LinkOnYoutube(String::from("https://you\ntu.be/x")));
        assert_eq!(cell.submit_edit(&mut store), SubmitOutcome::Rejected);
        assert!(store.edits.is_empty());
        assert!(!cell.errors.error_link.is_empty());
        assert!(cell.is_editing);
    }

    #[test]
    fn empty_sentinel_commits_empty_string() {
        let song = bach();
        let mut store = RecordingStore::default();
        let options = CellOptions {
            absent_link: LinkSentinel::Empty,
            ..CellOptions::default()
        };
        let mut cell = editing(&song, options);

        cell.submit_edit(&mut store);
        assert_eq!(store.edits[0].link_on_youtube.as_deref(), Some(""));

        cell.open_edit(&song);
        cell.change_field(FieldChange::LinkOnYoutube(String::from(" https://youtu.be/x ")));
        cell.submit_edit(&mut store);
        assert_eq!(
            store.edits[1].link_on_youtube.as_deref(),
            Some("https://youtu.be/x")
        );

        cell.open_edit(&song);
        cell.change_field(FieldChange::LinkOnYoutube(String::new()));
        cell.submit_edit(&mut store);
        assert_eq!(store.edits[2].link_on_youtube.as_deref(), Some(""));
    }

    #[test]
    fn closing_keeps_the_draft() {
        let song = bach();
        let mut cell = editing(&song, CellOptions::default());

        cell.change_field(FieldChange::Title(String::from("Unsaved")));
        cell.close_edit();
        assert!(!cell.is_editing);

        cell.open_edit(&song);
        assert_eq!(cell.form.title, "Unsaved");
    }

    #[test]
    fn reset_on_open_starts_from_the_song() {
        let song = bach();
        let mut store = RecordingStore::default();
        let options = CellOptions {
            draft_policy: DraftPolicy::ResetOnOpen,
            ..CellOptions::default()
        };
        let mut cell = editing(&song, options);

        cell.change_field(FieldChange::Title(String::new()));
        cell.submit_edit(&mut store);
        assert!(!cell.errors.is_empty());
        cell.close_edit();

        cell.open_edit(&song);
        assert_eq!(cell.form.title, "Fugue");
        assert!(cell.errors.is_empty());
    }

    #[test]
    fn preview_and_edit_flags_are_independent() {
        let song = bach();
        let mut cell = SongEditCell::new(&song, CellOptions::default());
        assert!(!cell.is_showing_preview && !cell.is_editing);

        cell.open_preview();
        cell.open_edit(&song);
        assert!(cell.is_showing_preview && cell.is_editing);

        cell.close_preview();
        assert!(!cell.is_showing_preview && cell.is_editing);
    }

    #[test]
    fn labels_capitalize_only_when_asked() {
        let song = Song {
            author: String::from("bach"),
            title: String::from("fugue"),
            ..bach()
        };
        let plain = SongEditCell::new(&song, CellOptions::default());
        assert_eq!(plain.row_label(0, &song), "1. bach - fugue");

        let capitalized = SongEditCell::new(
            &song,
            CellOptions {
                capitalize_display: true,
                ..CellOptions::default()
            },
        );
        assert_eq!(capitalized.row_label(2, &song), "3. Bach - Fugue");
        assert_eq!(capitalized.form.author, "bach");
    }

    #[test]
    fn new_song_form_adds_and_clears() {
        let mut store = RecordingStore::default();
        let mut new_song = NewSongForm::default();

        new_song.form.author = String::from("  Vivaldi ");
        assert_eq!(new_song.submit(LinkSentinel::Undefined, &mut store), None);
        assert!(!new_song.errors.error_title.is_empty());
        assert_eq!(new_song.form.author, "Vivaldi");

        new_song.form.title = String::from("Winter ");
        assert_eq!(
            new_song.submit(LinkSentinel::Undefined, &mut store),
            Some(SongId(101))
        );
        assert_eq!(store.added[0].title, "Winter");
        assert_eq!(new_song.form, EditFormState::default());
        assert!(new_song.errors.is_empty());
    }
}
