use leptos::prelude::*;
use posts_client::{View, ViewState, ViewStateCell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) posts: RwSignal<ViewState>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self {
            posts: RwSignal::new(ViewState::new()),
        }
    }

    pub(crate) fn view(&self) -> Memo<View> {
        let posts = self.posts;
        Memo::new(move |_| posts.with(ViewState::view))
    }
}

impl ViewStateCell for AppState {
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.posts.try_update(f)
    }
}
