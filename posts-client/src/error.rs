use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки транспорта: сеть, HTTP-статус или тело, не являющееся JSON.
pub enum TransportError {
    /// Запрос не удалось отправить или получить ответ.
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил статусом вне диапазона 2xx.
    #[error("http error {status}: {message}")]
    Status {
        /// Код HTTP-статуса.
        status: u16,
        /// Текст ошибки из тела ответа или описание статуса.
        message: String,
    },

    /// Тело ответа не удалось разобрать как JSON.
    #[error("decode error: {0}")]
    Decode(String),
}

impl TransportError {
    /// Строит ошибку статуса; пустое тело заменяется описанием класса статуса.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            status_fallback(status)
        } else {
            body
        };
        Self::Status { status, message }
    }
}

fn status_fallback(status: u16) -> String {
    match status {
        400 => "Некорректный запрос".to_string(),
        401 | 403 => "Доступ запрещён".to_string(),
        404 => "Ресурс не найден".to_string(),
        429 => "Слишком много запросов".to_string(),
        500..=599 => "Ошибка сервера".to_string(),
        _ => format!("HTTP ошибка {status}"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ответ не совпадает с ожидаемой формой «массив `RawPost`».
pub enum ValidationError {
    /// Корень ответа не является массивом.
    #[error("invalid response: expected an array of posts, found {found}")]
    NotAnArray {
        /// Тип JSON-значения, пришедшего вместо массива.
        found: &'static str,
    },

    /// Элемент массива не совпадает с формой поста.
    #[error("invalid response: post at index {index}: {reason}")]
    Element {
        /// Позиция элемента в массиве.
        index: usize,
        /// Описание несовпадения.
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибка загрузки списка постов.
pub enum FetchError {
    /// Ошибка транспорта.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Ответ не прошёл проверку формы.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Результат загрузки постов.
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_keeps_non_blank_body() {
        let err = TransportError::from_status(502, "upstream is down");
        assert_eq!(
            err,
            TransportError::Status {
                status: 502,
                message: "upstream is down".to_string()
            }
        );
    }

    #[test]
    fn from_status_uses_fallback_for_blank_body() {
        let err = TransportError::from_status(404, "  ");
        assert_eq!(err.to_string(), "http error 404: Ресурс не найден");

        let err = TransportError::from_status(418, "");
        assert_eq!(err.to_string(), "http error 418: HTTP ошибка 418");
    }

    #[test]
    fn fetch_error_message_is_inner_message() {
        let err = FetchError::from(ValidationError::NotAnArray { found: "object" });
        assert_eq!(
            err.to_string(),
            "invalid response: expected an array of posts, found object"
        );
    }
}
