use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use crate::fetcher::PostsApi;
use crate::state::ViewState;
use crate::transport::JsonGet;

/// Ячейка, в которой живёт `ViewState` экрана (сигнал, `RefCell` и т.п.).
pub trait ViewStateCell {
    /// Выполняет `f` над состоянием; `None`, если ячейка уже недоступна.
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R>;
}

impl ViewStateCell for RefCell<ViewState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: ViewStateCell + ?Sized> ViewStateCell for Rc<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        (**self).update_state(f)
    }
}

#[derive(Debug, Clone)]
/// Ручка отмены загрузки, привязанная к времени жизни экрана.
pub struct FetchHandle {
    abort: AbortHandle,
}

impl FetchHandle {
    /// Отменяет загрузку; результат незавершённого запроса будет отброшен.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// Была ли загрузка отменена.
    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted()
    }
}

#[derive(Debug)]
/// Парная к `FetchHandle` регистрация, которую потребляет `load_once`.
pub struct FetchRegistration {
    abort: AbortHandle,
    registration: AbortRegistration,
}

/// Создаёт связанную пару: ручку отмены и регистрацию для `load_once`.
pub fn fetch_handle() -> (FetchHandle, FetchRegistration) {
    let (abort, registration) = AbortHandle::new_pair();
    (
        FetchHandle {
            abort: abort.clone(),
        },
        FetchRegistration {
            abort,
            registration,
        },
    )
}

/// Единственная загрузка списка постов для одного экрана.
///
/// `start` → запрос → `finish`. Если ручка отменена до старта, состояние не
/// трогается; если во время запроса, ответ отбрасывается. Возвращает `true`,
/// когда результат применён к состоянию.
pub async fn load_once<C, S>(
    api: &PostsApi<C>,
    state: &S,
    registration: FetchRegistration,
) -> bool
where
    C: JsonGet,
    S: ViewStateCell + ?Sized,
{
    if registration.abort.is_aborted() {
        tracing::debug!("posts view torn down before fetch started");
        return false;
    }
    if !state.update_state(ViewState::start).unwrap_or(false) {
        return false;
    }

    match Abortable::new(api.fetch_posts(), registration.registration).await {
        Ok(result) => {
            let applied = state
                .update_state(|view_state| view_state.finish(result))
                .unwrap_or(false);
            tracing::debug!(applied, "posts lifecycle finished");
            applied
        }
        Err(_) => {
            tracing::debug!("posts fetch cancelled, result discarded");
            false
        }
    }
}

/// Владелец одного `ViewState`, прогоняющий `load_once` для нативных клиентов.
///
/// `handle()` можно забрать до `run` и вызвать `cancel` при разрушении экрана:
/// тогда ответ не применяется к состоянию.
#[derive(Debug)]
pub struct PostsController {
    state: RefCell<ViewState>,
    handle: FetchHandle,
    registration: Option<FetchRegistration>,
}

impl PostsController {
    /// Создаёт контроллер в начальном состоянии.
    pub fn new() -> Self {
        let (handle, registration) = fetch_handle();
        Self {
            state: RefCell::new(ViewState::new()),
            handle,
            registration: Some(registration),
        }
    }

    /// Снимок текущего состояния.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Ручка отмены текущей загрузки.
    pub fn handle(&self) -> FetchHandle {
        self.handle.clone()
    }

    /// Отменяет загрузку, если она ещё не завершилась.
    pub fn teardown(&self) {
        self.handle.cancel();
    }

    /// Запускает загрузку и применяет её результат.
    ///
    /// Возвращает `true`, если результат был применён. Повторный вызов и
    /// вызов после отмены ничего не делают.
    pub async fn run<C: JsonGet>(&mut self, api: &PostsApi<C>) -> bool {
        let Some(registration) = self.registration.take() else {
            return false;
        };
        load_once(api, &self.state, registration).await
    }
}

impl Default for PostsController {
    fn default() -> Self {
        Self::new()
    }
}
