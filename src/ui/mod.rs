/// Rendering module
///
/// Visibility of every surface is derived from the session alone,
/// never from what was shown last frame.

pub mod grid;
pub mod images;
pub mod lightbox;
pub mod search_bar;

use crate::state::gallery::Lightbox;
use crate::state::Session;

/// The search overlay shows until the first results arrive
pub fn search_visible(session: &Session) -> bool {
    session.gallery.is_empty()
}

/// The grid shows once there is anything in it
pub fn grid_visible(session: &Session) -> bool {
    !session.gallery.is_empty()
}

pub fn lightbox_visible(session: &Session) -> bool {
    matches!(session.gallery.lightbox(), Lightbox::Open(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ApiItem;

    #[test]
    fn test_visibility_follows_state() {
        let mut session = Session::new();
        assert!(search_visible(&session));
        assert!(!grid_visible(&session));
        assert!(!lightbox_visible(&session));

        session
            .gallery
            .ingest_page(vec![ApiItem::new("a", "https://img/a", "https://thumb/a")]);
        assert!(!search_visible(&session));
        assert!(grid_visible(&session));
        assert!(!lightbox_visible(&session));

        session.gallery.open_at(0);
        assert!(lightbox_visible(&session));

        // Closing twice cannot flip it back on
        session.gallery.close();
        session.gallery.close();
        assert!(!lightbox_visible(&session));
    }
}
