use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Пост в том виде, в каком он приходит по сети.
pub struct RawPost {
    /// Идентификатор поста.
    pub id: i64,
    /// Идентификатор автора; дальше не используется.
    pub user_id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст поста.
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Пост для отображения.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст поста (`RawPost::body`).
    pub text: String,
}

impl From<RawPost> for Post {
    fn from(value: RawPost) -> Self {
        Self {
            id: value.id,
            title: value.title,
            text: value.body,
        }
    }
}
