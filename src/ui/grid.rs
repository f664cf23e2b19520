use iced::widget::{container, image, mouse_area, scrollable, text, Column, Row};
use iced::{ContentFit, Element, Length};

use crate::input::InputEvent;
use crate::state::data::SearchResult;
use crate::state::gallery::Gallery;
use crate::ui::images::ImageCache;
use crate::Message;

const CELL_SPACING: f32 = 8.0;

/// Build the thumbnail grid, `columns` cells per row
pub fn view<'a>(
    gallery: &'a Gallery,
    images: &'a ImageCache,
    columns: usize,
    cell_size: f32,
) -> Element<'a, Message> {
    let rows = gallery.results().chunks(columns.max(1)).map(|chunk| {
        let cells = chunk.iter().map(|result| cell(result, images, cell_size));
        let row: Element<'a, Message> = Row::with_children(cells).spacing(CELL_SPACING).into();
        row
    });

    let grid = Column::with_children(rows)
        .spacing(CELL_SPACING)
        .padding(16);

    scrollable(
        container(grid)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

/// One clickable cell. The result index is the key back into the gallery.
fn cell<'a>(result: &'a SearchResult, images: &'a ImageCache, size: f32) -> Element<'a, Message> {
    let content: Element<Message> = match images.thumbnail(result.index) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        // Placeholder until the thumbnail arrives
        None => text("…").size(24).into(),
    };

    let framed = container(content)
        .width(size)
        .height(size)
        .center_x(size)
        .center_y(size)
        .style(container::rounded_box);

    mouse_area(framed)
        .on_press(Message::Input(InputEvent::CellClicked(result.index)))
        .into()
}
