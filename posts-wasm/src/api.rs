use async_trait::async_trait;
use gloo_net::http::Request;
use posts_client::{JsonGet, TransportError};
use serde_json::Value;

pub(crate) const POSTS_API_URL: &str = match option_env!("POSTS_API_URL") {
    Some(value) => value,
    None => posts_client::POSTS_URL,
};

/// Транспорт `JsonGet` поверх `fetch` браузера.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GlooClient;

#[async_trait(?Send)]
impl JsonGet for GlooClient {
    async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::from_status(status, body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| TransportError::Decode(err.to_string()))
    }
}
