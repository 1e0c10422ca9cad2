use leptos::prelude::*;
use leptos::task::spawn_local;
use posts_client::{PostsApi, View, fetch_handle, load_once};

use crate::api::{GlooClient, POSTS_API_URL};
use crate::components::blog_posts::BlogPosts;
use crate::components::error_message::ErrorMessage;
use crate::state::AppState;

// Картинку отдаёт хостинг страницы вместе с остальной статикой; в крейте её нет.
const HERO_IMAGE_SRC: &str = "assets/data-fetching.png";

/// Запускает единственную загрузку; при размонтировании ответ отбрасывается.
fn load_posts(state: AppState) {
    let api = PostsApi::with_url(GlooClient, POSTS_API_URL);
    let (handle, registration) = fetch_handle();
    on_cleanup(move || handle.cancel());

    spawn_local(async move {
        load_once(&api, &state, registration).await;
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    load_posts(state);

    let current = state.view();
    let content = move || match current.get() {
        View::Error(message) => view! { <ErrorMessage text=message /> }.into_any(),
        View::Fetching => view! { <p id="loading-fallback">"Fetching posts..."</p> }.into_any(),
        View::Success(posts) => view! { <BlogPosts posts=posts /> }.into_any(),
        View::Initial => ().into_any(),
    };

    view! {
        <main>
            <img src=HERO_IMAGE_SRC alt="An abstract image depicting data fetching" />
            {content}
        </main>
    }
}
