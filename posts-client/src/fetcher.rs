use crate::error::FetchResult;
use crate::models::Post;
use crate::transport::JsonGet;
use crate::validate::validate_posts;

/// Адрес списка постов по умолчанию.
pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

#[derive(Debug, Clone)]
/// Загрузчик списка постов поверх транспорта `C`.
pub struct PostsApi<C> {
    client: C,
    url: String,
}

impl<C: JsonGet> PostsApi<C> {
    /// Создаёт загрузчик, смотрящий на `POSTS_URL`.
    pub fn new(client: C) -> Self {
        Self::with_url(client, POSTS_URL)
    }

    /// Создаёт загрузчик с другим адресом списка.
    pub fn with_url(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Адрес, по которому идёт запрос.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Загружает посты: один GET, проверка формы, переименование `body` → `text`.
    ///
    /// Ошибка транспорта и ошибка формы возвращаются разными вариантами
    /// `FetchError`. Повторов и кеша нет.
    pub async fn fetch_posts(&self) -> FetchResult<Vec<Post>> {
        tracing::debug!(url = %self.url, "fetching posts");

        let value = self.client.get_json(&self.url).await.inspect_err(|err| {
            tracing::warn!(url = %self.url, error = %err, "posts request failed");
        })?;

        let raw = validate_posts(value).inspect_err(|err| {
            tracing::warn!(url = %self.url, error = %err, "posts response rejected");
        })?;

        let posts: Vec<Post> = raw.into_iter().map(Post::from).collect();
        tracing::debug!(count = posts.len(), "posts fetched");
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::error::{FetchError, TransportError, ValidationError};

    #[derive(Clone)]
    struct FakeClient {
        response: Result<Value, TransportError>,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl FakeClient {
        fn new(response: Result<Value, TransportError>) -> Self {
            Self {
                response,
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait(?Send)]
    impl JsonGet for FakeClient {
        async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
            self.requested
                .lock()
                .expect("requested mutex poisoned")
                .push(url.to_string());
            self.response.clone()
        }
    }

    #[tokio::test]
    async fn fetch_posts_requests_default_url_once() {
        let client = FakeClient::new(Ok(json!([])));
        let api = PostsApi::new(client.clone());

        api.fetch_posts().await.expect("fetch should succeed");

        let requested = client.requested.lock().expect("requested mutex poisoned");
        assert_eq!(requested.as_slice(), [POSTS_URL.to_string()]);
    }

    #[tokio::test]
    async fn fetch_posts_maps_every_element() {
        let input = json!([
            {"id": 1, "userId": 9, "title": "Hello", "body": "World"},
            {"id": 2, "userId": 4, "title": "Second", "body": "Text"},
            {"id": 3, "userId": 9, "title": "", "body": ""}
        ]);
        let api = PostsApi::new(FakeClient::new(Ok(input.clone())));

        let posts = api.fetch_posts().await.expect("fetch should succeed");

        let raw = input.as_array().expect("input is an array");
        assert_eq!(posts.len(), raw.len());
        for (post, raw) in posts.iter().zip(raw) {
            assert_eq!(Some(post.id), raw["id"].as_i64());
            assert_eq!(Some(post.title.as_str()), raw["title"].as_str());
            assert_eq!(Some(post.text.as_str()), raw["body"].as_str());
        }
    }

    #[tokio::test]
    async fn fetch_posts_keeps_transport_error_distinct() {
        let api = PostsApi::new(FakeClient::new(Err(TransportError::Network(
            "connection refused".to_string(),
        ))));

        let err = api.fetch_posts().await.expect_err("fetch must fail");
        assert_eq!(
            err,
            FetchError::Transport(TransportError::Network("connection refused".to_string()))
        );
    }

    #[tokio::test]
    async fn fetch_posts_reports_validation_error() {
        let api = PostsApi::new(FakeClient::new(Ok(json!([{"id": 1, "userId": 1, "body": "b"}]))));

        let err = api.fetch_posts().await.expect_err("fetch must fail");
        assert!(matches!(
            err,
            FetchError::Validation(ValidationError::Element { index: 0, .. })
        ));
    }

    #[tokio::test]
    async fn with_url_overrides_target() {
        let client = FakeClient::new(Ok(json!([])));
        let api = PostsApi::with_url(client.clone(), "http://127.0.0.1:3000/posts");
        assert_eq!(api.url(), "http://127.0.0.1:3000/posts");

        api.fetch_posts().await.expect("fetch should succeed");
        let requested = client.requested.lock().expect("requested mutex poisoned");
        assert_eq!(requested.as_slice(), ["http://127.0.0.1:3000/posts".to_string()]);
    }
}
