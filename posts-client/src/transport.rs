use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

/// HTTP GET, возвращающий разобранное JSON-тело.
///
/// Любой статус вне 2xx и любая сетевая ошибка возвращаются как `TransportError`.
/// Трейт объявлен без `Send`, чтобы его могли реализовать браузерные клиенты.
#[async_trait(?Send)]
pub trait JsonGet {
    /// Выполняет GET по `url` и разбирает тело ответа как JSON.
    async fn get_json(&self, url: &str) -> Result<Value, TransportError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use reqwest_client::ReqwestClient;

#[cfg(not(target_arch = "wasm32"))]
mod reqwest_client {
    use std::time::Duration;

    use async_trait::async_trait;
    use reqwest::Client;
    use serde_json::Value;

    use super::JsonGet;
    use crate::error::TransportError;

    const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

    #[derive(Debug, Clone)]
    /// Транспорт `JsonGet` поверх `reqwest` для нативных сборок.
    pub struct ReqwestClient {
        client: Client,
    }

    impl ReqwestClient {
        /// Создаёт клиент с таймаутами подключения и запроса.
        pub fn new() -> Result<Self, TransportError> {
            let client = Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(|err| TransportError::Network(err.to_string()))?;

            Ok(Self { client })
        }
    }

    #[async_trait(?Send)]
    impl JsonGet for ReqwestClient {
        async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|err| TransportError::Network(err.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(TransportError::from_status(status.as_u16(), body));
            }

            response.json::<Value>().await.map_err(|err| {
                if err.is_decode() {
                    TransportError::Decode(err.to_string())
                } else {
                    TransportError::Network(err.to_string())
                }
            })
        }
    }
}
