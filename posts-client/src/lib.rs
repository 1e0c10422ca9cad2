//! Загрузка и отображение списка постов.
//!
//! Библиотека содержит всю логику, не зависящую от браузера:
//! - модели (`RawPost` с провода и `Post` для отображения);
//! - проверку формы ответа (`validate_posts`);
//! - загрузчик (`PostsApi`) поверх абстрактного транспорта `JsonGet`;
//! - состояние экрана (`ViewState`) и выводимое из него представление (`View`);
//! - единственную отменяемую загрузку на экран (`load_once`, `PostsController`).
//!
//! Браузерный транспорт и компоненты Leptos живут в `posts-wasm`.
#![warn(missing_docs)]

mod error;
mod fetcher;
mod lifecycle;
mod models;
mod state;
mod transport;
mod validate;

pub use error::{FetchError, FetchResult, TransportError, ValidationError};
pub use fetcher::{POSTS_URL, PostsApi};
pub use lifecycle::{
    FetchHandle, FetchRegistration, PostsController, ViewStateCell, fetch_handle, load_once,
};
pub use models::{Post, RawPost};
pub use state::{Phase, View, ViewState};
pub use transport::JsonGet;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestClient;
pub use validate::validate_posts;
