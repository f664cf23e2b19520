use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::input::InputEvent;
use crate::state::Session;
use crate::Message;

/// The query field, search button and any validation notice
pub fn view(session: &Session) -> Element<'_, Message> {
    let input = text_input("Search for images…", &session.query)
        .on_input(|query| Message::Input(InputEvent::QueryChanged(query)))
        .on_submit(Message::Input(InputEvent::SubmitKey))
        .padding(10)
        .width(Length::Fixed(420.0));

    let label = if session.loading { "Searching…" } else { "Search" };
    let search = button(label)
        .on_press(Message::Input(InputEvent::SearchButton))
        .padding(10);

    let mut content = column![
        text("Image Search").size(48),
        row![input, search].spacing(10).align_y(Alignment::Center),
    ]
    .spacing(20)
    .padding(40)
    .align_x(Alignment::Center);

    if let Some(notice) = &session.notice {
        content = content.push(
            row![
                text(notice.as_str()).size(16),
                button("Dismiss")
                    .on_press(Message::Input(InputEvent::DismissNotice))
                    .style(button::text),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
