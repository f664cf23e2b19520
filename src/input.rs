/// Input dispatch
///
/// Translates keyboard, pointer and network-completion events into
/// gallery operations. Each handler takes the session and one event and
/// returns the side effects the host must perform, in order.
use tracing::{info, warn};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::search;
use crate::state::data::{ApiItem, Direction, SearchResult};
use crate::state::gallery::Lightbox;
use crate::state::Session;

/// Events delivered to the dispatcher
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// The query field text changed
    QueryChanged(String),
    /// Enter/Return pressed
    SubmitKey,
    /// Search button clicked
    SearchButton,
    /// Left/Right arrow key
    Arrow(Direction),
    /// Escape key
    Escape,
    /// A grid cell was clicked
    CellClicked(usize),
    /// The lightbox background was clicked
    BackdropClicked,
    /// The lightbox image itself was clicked
    LightboxImageClicked,
    /// One of the lightbox navigation arrows was clicked
    NavArrowClicked(Direction),
    /// The validation notice was acknowledged
    DismissNotice,
    /// The outstanding search request finished
    PageLoaded(Result<Vec<ApiItem>, SearchError>),
}

/// Side effects requested by the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue the search request
    Fetch { url: url::Url },
    /// Show a blocking alert to the user
    Alert(String),
    /// Newly ingested results need their grid thumbnails
    LoadThumbnails(Vec<SearchResult>),
    /// The lightbox now shows this result; load its full-size image
    LoadFullImage(SearchResult),
    /// The lightbox closed; drop the full-size image
    ClearFullImage,
}

/// Apply one event to the session
pub fn dispatch(session: &mut Session, config: &SearchConfig, event: InputEvent) -> Vec<Effect> {
    match event {
        InputEvent::QueryChanged(query) => {
            session.query = query;
            Vec::new()
        }
        InputEvent::SubmitKey | InputEvent::SearchButton => submit_search(session, config),
        InputEvent::Arrow(direction) | InputEvent::NavArrowClicked(direction) => {
            step(session, direction)
        }
        InputEvent::Escape | InputEvent::BackdropClicked => close(session),
        InputEvent::CellClicked(index) => match session.gallery.open_at(index) {
            Some(result) => vec![Effect::LoadFullImage(result.clone())],
            None => Vec::new(),
        },
        // The image sits on top of the backdrop; clicking it must not close
        InputEvent::LightboxImageClicked => Vec::new(),
        InputEvent::DismissNotice => {
            session.notice = None;
            Vec::new()
        }
        InputEvent::PageLoaded(result) => page_loaded(session, result),
    }
}

/// Every submission path goes through the same gate: idle and empty
fn submit_search(session: &mut Session, config: &SearchConfig) -> Vec<Effect> {
    if !session.can_search() {
        return Vec::new();
    }

    match search::build_url(config, &session.query) {
        Ok(url) => {
            session.loading = true;
            session.notice = None;
            info!(query = %session.query, "searching");
            vec![Effect::Fetch { url }]
        }
        Err(SearchError::EmptyQuery) => {
            let message = SearchError::EmptyQuery.to_string();
            session.notice = Some(message.clone());
            vec![Effect::Alert(message)]
        }
        Err(err) => {
            warn!(error = %err, "could not build search request");
            Vec::new()
        }
    }
}

fn step(session: &mut Session, direction: Direction) -> Vec<Effect> {
    match session.gallery.step(direction) {
        Some(result) => vec![Effect::LoadFullImage(result.clone())],
        None => Vec::new(),
    }
}

fn close(session: &mut Session) -> Vec<Effect> {
    if session.gallery.lightbox() == Lightbox::Closed {
        return Vec::new();
    }

    session.gallery.close();
    vec![Effect::ClearFullImage]
}

/// Ingest first, then ask for rendering of exactly what was added
fn page_loaded(session: &mut Session, result: Result<Vec<ApiItem>, SearchError>) -> Vec<Effect> {
    session.loading = false;

    match result {
        Ok(items) => {
            let added = session.gallery.ingest_page(items);
            info!(count = added.len(), total = session.gallery.len(), "search results received");
            if added.is_empty() {
                Vec::new()
            } else {
                vec![Effect::LoadThumbnails(added)]
            }
        }
        Err(err) => {
            warn!(error = %err, "error fetching search results");
            Vec::new()
        }
    }
}
