//! A titled panel shown in place while its owner says it is visible.

use super::Message;
use iced::{
    theme,
    widget::{column, container, horizontal_space, row, text, Button, Rule},
    Alignment, Element, Length,
};

/// The buttons a dialog offers and what each one sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogActions {
    pub on_close: Message,
    pub on_submit: Option<Message>,
    /// When set, the cancel button sends this instead of [`Self::on_close`]
    pub on_delete: Option<Message>,
    pub cancel_text: &'static str,
    pub submit_text: &'static str,
}

impl DialogActions {
    #[must_use]
    pub fn closing(on_close: Message, cancel_text: &'static str) -> Self {
        Self {
            on_close,
            on_submit: None,
            on_delete: None,
            cancel_text,
            submit_text: "",
        }
    }

    #[must_use]
    pub fn cancel_message(&self) -> Message {
        self.on_delete.clone().unwrap_or_else(|| self.on_close.clone())
    }
}

/// Returns `None` while hidden so callers can skip it entirely.
#[must_use]
pub fn dialog<'a>(
    visible: bool,
    title: &str,
    content: Element<'a, Message>,
    actions: DialogActions,
) -> Option<Element<'a, Message>> {
    if !visible {
        return None;
    }

    let header = row![
        text(title).size(20),
        horizontal_space(Length::Fill),
        Button::new("✕")
            .style(theme::Button::Text)
            .on_press(actions.on_close.clone()),
    ]
    .align_items(Alignment::Center);

    let cancel_style = if actions.on_delete.is_some() {
        theme::Button::Destructive
    } else {
        theme::Button::Secondary
    };
    let mut footer = row![
        horizontal_space(Length::Fill),
        Button::new(actions.cancel_text)
            .style(cancel_style)
            .on_press(actions.cancel_message()),
    ]
    .spacing(10);
    if let Some(on_submit) = actions.on_submit {
        footer = footer.push(Button::new(actions.submit_text).on_press(on_submit));
    }

    let panel = column![header, Rule::horizontal(4), content, Rule::horizontal(4), footer]
        .spacing(12);

    Some(
        container(panel)
            .width(Length::Fill)
            .padding(16)
            .style(theme::Container::Box)
            .into(),
    )
}
