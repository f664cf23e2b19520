use iced::widget::image::Handle;
use std::collections::HashMap;

use crate::search::thumbnail::Thumbnail;
use crate::state::gallery::Lightbox;

/// Decoded image handles for the grid and the lightbox
///
/// Thumbnails are keyed by result index. Only one full-size image is kept:
/// the one for the result the lightbox is currently showing.
#[derive(Debug, Default)]
pub struct ImageCache {
    thumbnails: HashMap<usize, Handle>,
    full: Option<(usize, Handle)>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_thumbnail(&mut self, index: usize, thumbnail: Thumbnail) {
        let handle = Handle::from_rgba(thumbnail.width, thumbnail.height, thumbnail.pixels);
        self.thumbnails.insert(index, handle);
    }

    pub fn thumbnail(&self, index: usize) -> Option<&Handle> {
        self.thumbnails.get(&index)
    }

    /// Store a downloaded full-size image if it still belongs on screen.
    ///
    /// Returns `false` (and drops the bytes) when the lightbox has moved on
    /// or closed since the download started.
    pub fn set_full(&mut self, index: usize, bytes: Vec<u8>, lightbox: Lightbox) -> bool {
        if lightbox != Lightbox::Open(index) {
            return false;
        }

        self.full = Some((index, Handle::from_bytes(bytes)));
        true
    }

    /// The full-size image for `index`, or `None` while it is still loading
    pub fn full(&self, index: usize) -> Option<&Handle> {
        match &self.full {
            Some((loaded, handle)) if *loaded == index => Some(handle),
            _ => None,
        }
    }

    /// Back to the placeholder
    pub fn clear_full(&mut self) {
        self.full = None;
    }
}
