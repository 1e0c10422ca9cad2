use crate::error::FetchResult;
use crate::models::Post;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Состояние экрана списка постов на время одного просмотра страницы.
///
/// Три независимых поля; что именно показывать, решает `view()`.
pub struct ViewState {
    /// Загруженные посты.
    pub posts: Vec<Post>,
    /// Запрос в полёте.
    pub is_fetching: bool,
    /// Текст ошибки загрузки.
    pub error: Option<String>,
    started: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Что показать на экране.
pub enum View {
    /// Ничего: загрузка не начиналась или список пуст.
    Initial,
    /// Индикатор загрузки.
    Fetching,
    /// Список постов (всегда непустой).
    Success(Vec<Post>),
    /// Сообщение об ошибке.
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Фаза жизненного цикла загрузки.
pub enum Phase {
    /// Загрузка ещё не запускалась.
    Idle,
    /// Запрос в полёте.
    Fetching,
    /// Загрузка завершилась (успехом или ошибкой).
    Done,
}

impl ViewState {
    /// Начальное состояние: ничего не загружено, ошибок нет.
    pub fn new() -> Self {
        Self::default()
    }

    /// Текущая фаза.
    pub fn phase(&self) -> Phase {
        if self.is_fetching {
            Phase::Fetching
        } else if self.started {
            Phase::Done
        } else {
            Phase::Idle
        }
    }

    /// Переводит состояние в загрузку.
    ///
    /// Загрузка запускается один раз: повторный вызов ничего не меняет и
    /// возвращает `false`.
    pub fn start(&mut self) -> bool {
        if self.phase() != Phase::Idle {
            return false;
        }
        self.started = true;
        self.is_fetching = true;
        true
    }

    /// Применяет результат загрузки и снимает флаг `is_fetching`.
    ///
    /// Результат принимается только в фазе `Fetching`; иначе вызов ничего не
    /// меняет и возвращает `false`.
    pub fn finish(&mut self, result: FetchResult<Vec<Post>>) -> bool {
        if self.phase() != Phase::Fetching {
            return false;
        }
        match result {
            Ok(posts) => self.posts = posts,
            Err(err) => self.error = Some(err.to_string()),
        }
        self.is_fetching = false;
        true
    }

    /// Выводит представление из полей.
    ///
    /// Приоритет: ошибка, затем загрузка, затем непустой список, иначе ничего.
    pub fn view(&self) -> View {
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            return View::Error(error.to_string());
        }
        if self.is_fetching {
            return View::Fetching;
        }
        if !self.posts.is_empty() {
            return View::Success(self.posts.clone());
        }
        View::Initial
    }
}
