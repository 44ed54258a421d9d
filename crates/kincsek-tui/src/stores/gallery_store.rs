/// GalleryStore manages the ordered list of gallery image urls
use crate::actions::{Action, FieldId};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    pub images: Vec<String>,

    /// Url being typed for the next image
    pub url_input: String,

    pub selected_index: usize,
}

#[derive(Clone)]
pub struct GalleryStore {
    state: Arc<RwLock<GalleryState>>,
}

impl GalleryStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(GalleryState::default())),
        }
    }

    pub fn get_state(&self) -> GalleryState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        match action {
            Action::GalleryLoaded(images) => {
                state.images = images.clone();
                state.selected_index = state
                    .selected_index
                    .min(state.images.len().saturating_sub(1));
            }

            Action::UpdateInput(FieldId::GalleryUrl, url) => {
                state.url_input = url.clone();
            }

            Action::GalleryImageAdded(images) => {
                state.images = images.clone();
                state.selected_index = state.images.len().saturating_sub(1);
                state.url_input.clear();
            }

            Action::GalleryCommitted(images) => {
                state.images = images.clone();
                state.selected_index = state
                    .selected_index
                    .min(state.images.len().saturating_sub(1));
            }

            Action::SelectGalleryImage(index) => {
                state.selected_index = (*index).min(state.images.len().saturating_sub(1));
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kincsek_core::gallery;

    #[test]
    fn test_added_image_clears_input() {
        let store = GalleryStore::new();
        store.reduce(&Action::UpdateInput(
            FieldId::GalleryUrl,
            "https://example.com/a.jpg".to_string(),
        ));
        store.reduce(&Action::GalleryImageAdded(vec![
            "https://example.com/a.jpg".to_string(),
        ]));

        let state = store.get_state();
        assert_eq!(state.images, vec!["https://example.com/a.jpg".to_string()]);
        assert!(state.url_input.is_empty());
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_add_request_alone_changes_nothing() {
        let store = GalleryStore::new();
        store.reduce(&Action::UpdateInput(FieldId::GalleryUrl, "a.jpg".to_string()));
        store.reduce(&Action::AddGalleryImage);

        let state = store.get_state();
        assert!(state.images.is_empty());
        assert_eq!(state.url_input, "a.jpg");
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let store = GalleryStore::new();
        let original = vec!["1.jpg".to_string(), "2.jpg".to_string()];
        store.reduce(&Action::GalleryLoaded(original.clone()));

        let added = gallery::append_image(&original, "3.jpg").unwrap();
        store.reduce(&Action::GalleryImageAdded(added.clone()));
        assert_eq!(store.get_state().selected_index, 2);

        store.reduce(&Action::GalleryCommitted(gallery::remove_image(&added, 2)));

        let state = store.get_state();
        assert_eq!(state.images, original);
        assert_eq!(state.selected_index, 1);
    }
}
