use iced::widget::{button, column, container, image, mouse_area, row, text};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::input::InputEvent;
use crate::state::data::{Direction, SearchResult};
use crate::Message;

/// Full-screen overlay for one result.
///
/// Layers, innermost first: the picture (its own mouse area, so clicking
/// it is captured and never reaches the backdrop), the arrow buttons,
/// then the backdrop mouse area that closes the lightbox.
pub fn view<'a>(
    result: &'a SearchResult,
    full: Option<&'a image::Handle>,
    total: usize,
) -> Element<'a, Message> {
    let picture: Element<Message> = match full {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("Loading…").size(20).into(),
    };

    let picture = mouse_area(picture).on_press(Message::Input(InputEvent::LightboxImageClicked));

    let caption = text(format!("{} ({}/{})", result.title, result.index + 1, total)).size(14);

    let centre = container(column![picture, caption].spacing(12).align_x(Alignment::Center))
        .padding(40)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let body = row![
        arrow("‹", Direction::Previous),
        centre,
        arrow("›", Direction::Next),
    ]
    .align_y(Alignment::Center)
    .padding(16);

    let backdrop = container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.88).into()),
            ..container::Style::default()
        });

    mouse_area(backdrop)
        .on_press(Message::Input(InputEvent::BackdropClicked))
        .into()
}

fn arrow(label: &str, direction: Direction) -> Element<'_, Message> {
    button(text(label).size(48))
        .on_press(Message::Input(InputEvent::NavArrowClicked(direction)))
        .style(button::text)
        .into()
}
