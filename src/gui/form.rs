use super::Message;
use crate::{
    edit_cell::{EditFormState, FieldChange},
    validation::ValidationErrors,
};
use iced::{
    theme,
    widget::{column, text, Column, TextInput},
    Color, Element,
};

const ERROR_COLOR: Color = Color {
    r: 0.8,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};

fn field<'a>(input: TextInput<'a, Message>, error: &str) -> Column<'a, Message> {
    let mut field = column![input].spacing(4);
    if !error.is_empty() {
        field = field.push(text(error).size(14).style(theme::Text::Color(ERROR_COLOR)));
    }
    field
}

/// The three song inputs with their error messages underneath.
/// Every keystroke is reported through `on_change`, enter sends `on_submit`.
pub fn song_form<'a>(
    form: &EditFormState,
    errors: &ValidationErrors,
    on_change: impl Fn(FieldChange) -> Message + Copy + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let author_input = TextInput::new("Composer", &form.author)
        .on_input(move |s| on_change(FieldChange::Author(s)))
        .on_submit(on_submit.clone());
    let title_input = TextInput::new("Title", &form.title)
        .on_input(move |s| on_change(FieldChange::Title(s)))
        .on_submit(on_submit.clone());
    let link_input = TextInput::new("https://www.youtube.com/watch?v=...", form.link())
        .on_input(move |s| on_change(FieldChange::LinkOnYoutube(s)))
        .on_submit(on_submit);

    column![
        field(author_input, &errors.error_author),
        field(title_input, &errors.error_title),
        field(link_input, &errors.error_link),
    ]
    .spacing(12)
    .into()
}
