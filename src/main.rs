use iced::keyboard::{self, key::Named, Key};
use iced::widget::stack;
use iced::{Element, Subscription, Task, Theme};
use reqwest::Client;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod input;
mod search;
mod state;
mod ui;

use config::Config;
use error::SearchError;
use input::{Effect, InputEvent};
use search::thumbnail::Thumbnail;
use state::data::{Direction, SearchResult};
use state::Session;
use ui::images::ImageCache;

/// Main application state
struct ImageSearch {
    /// Loaded configuration (API credentials, grid layout)
    config: Config,
    /// Results, lightbox position, query text and loading flag
    session: Session,
    /// Decoded thumbnails and the current full-size image
    images: ImageCache,
    /// Shared HTTP client for every request
    client: Client,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Keyboard, pointer or search-completion input for the dispatcher
    Input(InputEvent),
    /// A grid thumbnail finished downloading and decoding
    ThumbnailLoaded(usize, Result<Thumbnail, SearchError>),
    /// The full-size image for a lightbox index finished downloading
    FullImageLoaded(usize, Result<Vec<u8>, SearchError>),
}

impl ImageSearch {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // A broken config file should not keep the window from opening
        let config = Config::load().unwrap_or_else(|err| {
            warn!(error = %err, "falling back to default configuration");
            Config::default()
        });

        if !config.has_credentials() {
            warn!("no API key or search engine ID configured; searches will be rejected by the server");
        }

        info!(page_size = config.search.page_size, "image search initialized");

        (Self::with_config(config), Task::none())
    }

    fn with_config(config: Config) -> Self {
        let client = search::build_client().unwrap_or_else(|err| {
            warn!(error = %err, "using default HTTP client");
            Client::new()
        });

        ImageSearch {
            config,
            session: Session::new(),
            images: ImageCache::new(),
            client,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Input(event) => {
                let effects = input::dispatch(&mut self.session, &self.config.search, event);
                let tasks: Vec<Task<Message>> =
                    effects.into_iter().map(|effect| self.perform(effect)).collect();
                Task::batch(tasks)
            }
            Message::ThumbnailLoaded(index, Ok(thumbnail)) => {
                self.images.insert_thumbnail(index, thumbnail);
                Task::none()
            }
            Message::ThumbnailLoaded(index, Err(err)) => {
                warn!(index, error = %err, "thumbnail failed to load");
                Task::none()
            }
            Message::FullImageLoaded(index, Ok(bytes)) => {
                if !self.images.set_full(index, bytes, self.session.gallery.lightbox()) {
                    debug!(index, "discarding full-size image for a result no longer shown");
                }
                Task::none()
            }
            Message::FullImageLoaded(index, Err(err)) => {
                warn!(index, error = %err, "full-size image failed to load");
                Task::none()
            }
        }
    }

    /// Turn a dispatcher effect into work for the runtime
    fn perform(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Fetch { url } => Task::perform(
                search::fetch_page(self.client.clone(), url),
                |result| Message::Input(InputEvent::PageLoaded(result)),
            ),
            Effect::Alert(message) => {
                // Blocks until dismissed, like a browser alert
                let _ = rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title("Image Search")
                    .set_description(message)
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
                Task::none()
            }
            Effect::LoadThumbnails(results) => {
                let max_size = self.config.ui.thumbnail_size;
                Task::batch(results.into_iter().map(|result| self.load_thumbnail(result, max_size)))
            }
            Effect::LoadFullImage(result) => {
                self.images.clear_full();
                let index = result.index;
                Task::perform(
                    search::fetch_image(self.client.clone(), result.link),
                    move |bytes| Message::FullImageLoaded(index, bytes),
                )
            }
            Effect::ClearFullImage => {
                self.images.clear_full();
                Task::none()
            }
        }
    }

    fn load_thumbnail(&self, result: SearchResult, max_size: u32) -> Task<Message> {
        let index = result.index;
        Task::perform(
            search::thumbnail::load_thumbnail(self.client.clone(), result.thumbnail_link, max_size),
            move |thumbnail| Message::ThumbnailLoaded(index, thumbnail),
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let base = if ui::grid_visible(&self.session) {
            ui::grid::view(
                &self.session.gallery,
                &self.images,
                self.config.ui.columns,
                self.config.ui.thumbnail_size as f32,
            )
        } else {
            ui::search_bar::view(&self.session)
        };

        match self.session.gallery.current() {
            Some(result) if ui::lightbox_visible(&self.session) => {
                let overlay = ui::lightbox::view(
                    result,
                    self.images.full(result.index),
                    self.session.gallery.len(),
                );
                stack![base, overlay].into()
            }
            _ => base,
        }
    }

    /// Keys that reach the window without being captured by a widget
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, _modifiers| {
            let event = match key.as_ref() {
                Key::Named(Named::Enter) => InputEvent::SubmitKey,
                Key::Named(Named::ArrowLeft) => InputEvent::Arrow(Direction::Previous),
                Key::Named(Named::ArrowRight) => InputEvent::Arrow(Direction::Next),
                Key::Named(Named::Escape) => InputEvent::Escape,
                _ => return None,
            };
            Some(Message::Input(event))
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("image_search=info")),
        )
        .with_target(false)
        .init();

    iced::application("Image Search", ImageSearch::update, ImageSearch::view)
        .subscription(ImageSearch::subscription)
        .theme(ImageSearch::theme)
        .centered()
        .run_with(ImageSearch::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ApiItem;
    use crate::state::gallery::Lightbox;

    fn app_with_results(names: &[&str]) -> ImageSearch {
        let mut app = ImageSearch::with_config(Config::default());
        let items = names
            .iter()
            .map(|n| ApiItem::new(n, &format!("https://img/{}", n), &format!("https://thumb/{}", n)))
            .collect();
        let _ = app.update(Message::Input(InputEvent::PageLoaded(Ok(items))));
        app
    }

    #[tokio::test]
    async fn test_page_loaded_fills_gallery() {
        let app = app_with_results(&["a", "b", "c"]);

        assert_eq!(app.session.gallery.len(), 3);
        assert!(!app.session.loading);
        assert!(ui::grid_visible(&app.session));
    }

    #[tokio::test]
    async fn test_thumbnail_loaded_is_cached_by_index() {
        let mut app = app_with_results(&["a", "b"]);

        let thumbnail = Thumbnail {
            width: 1,
            height: 1,
            pixels: vec![255; 4],
        };
        let _ = app.update(Message::ThumbnailLoaded(1, Ok(thumbnail)));
        let _ = app.update(Message::ThumbnailLoaded(0, Err(SearchError::Request { status: 404 })));

        assert!(app.images.thumbnail(1).is_some());
        assert!(app.images.thumbnail(0).is_none());
    }

    #[tokio::test]
    async fn test_full_image_for_previous_index_is_ignored() {
        let mut app = app_with_results(&["a", "b", "c"]);

        let _ = app.update(Message::Input(InputEvent::CellClicked(0)));
        let _ = app.update(Message::Input(InputEvent::Arrow(Direction::Next)));
        assert_eq!(app.session.gallery.lightbox(), Lightbox::Open(1));

        let _ = app.update(Message::FullImageLoaded(0, Ok(vec![0; 16])));
        assert!(app.images.full(0).is_none());
        assert!(app.images.full(1).is_none());

        let _ = app.update(Message::FullImageLoaded(1, Ok(vec![0; 16])));
        assert!(app.images.full(1).is_some());
    }

    #[tokio::test]
    async fn test_escape_clears_full_image() {
        let mut app = app_with_results(&["a"]);

        let _ = app.update(Message::Input(InputEvent::CellClicked(0)));
        let _ = app.update(Message::FullImageLoaded(0, Ok(vec![0; 16])));
        assert!(app.images.full(0).is_some());

        let _ = app.update(Message::Input(InputEvent::Escape));
        assert_eq!(app.session.gallery.lightbox(), Lightbox::Closed);
        assert!(app.images.full(0).is_none());
    }
}
