use std::future::Future;

use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::services::chat::ChatTranscript;

pub type AppSignal = Signal<AppState>;

#[cfg(target_arch = "wasm32")]
const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// The single visible toast. Each notice gets a fresh id so a stale
/// dismiss timer cannot clear a newer one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn push(&mut self, kind: NoticeKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notice { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub open: bool,
    pub transcript: ChatTranscript,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub notices: NoticeState,
    pub chat: ChatState,
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let mut state = self.state;
        let mut guard = state.write();
        f(&mut *guard)
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(NoticeKind::Error, message.into());
    }

    fn notify(&self, kind: NoticeKind, message: String) {
        let id = self.update(|state| state.notices.push(kind, message));
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let actions = *self;
        spawn_detached(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            actions.dismiss_notice(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}

    pub fn dismiss_notice(&self, id: u64) {
        self.update(|state| state.notices.dismiss(id));
    }

    pub fn toggle_chat(&self) {
        self.update(|state| state.chat.open = !state.chat.open);
    }

    pub fn close_chat(&self) {
        self.update(|state| state.chat.open = false);
    }

    pub fn send_chat_message(&self, text: &str) -> bool {
        self.update(|state| state.chat.transcript.send(text))
    }
}

/// Runs `task` on the root scope so unmounting the caller does not cancel it.
pub fn spawn_detached(task: impl Future<Output = ()> + 'static) {
    let _task = spawn_forever(task);
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    let state = use_app_state();
    AppActions { state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    thread_local! {
        static UNMOUNT_GATE: RefCell<Option<oneshot::Receiver<()>>> = const { RefCell::new(None) };
        static WORK_GATE: RefCell<Option<oneshot::Receiver<()>>> = const { RefCell::new(None) };
        static WORK_DONE: Cell<bool> = const { Cell::new(false) };
    }

    #[component]
    fn Host() -> Element {
        let mut show = use_signal(|| true);
        use_hook(move || {
            let gate = UNMOUNT_GATE.with(|slot| slot.borrow_mut().take());
            spawn(async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                show.set(false);
            });
        });

        rsx! {
            if show() {
                Worker {}
            }
        }
    }

    #[component]
    fn Worker() -> Element {
        use_hook(|| {
            let gate = WORK_GATE.with(|slot| slot.borrow_mut().take());
            spawn_detached(async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                WORK_DONE.with(|done| done.set(true));
            });
        });

        rsx! { "working" }
    }

    /// Polls ready tasks once, then applies pending renders.
    fn drive(dom: &mut VirtualDom) {
        block_on(async {
            let work = dom.wait_for_work();
            futures::pin_mut!(work);
            let _ = futures::poll!(work);
        });
        let _ = dom.render_immediate_to_vec();
    }

    #[test]
    fn detached_work_finishes_after_its_component_unmounts() {
        let (unmount_tx, unmount_rx) = oneshot::channel();
        let (work_tx, work_rx) = oneshot::channel();
        UNMOUNT_GATE.with(|slot| *slot.borrow_mut() = Some(unmount_rx));
        WORK_GATE.with(|slot| *slot.borrow_mut() = Some(work_rx));
        WORK_DONE.with(|done| done.set(false));

        let mut dom = VirtualDom::new(Host);
        dom.rebuild_in_place();

        unmount_tx.send(()).expect("host listening");
        drive(&mut dom);
        assert!(!WORK_DONE.with(Cell::get));

        work_tx.send(()).expect("worker task alive");
        drive(&mut dom);
        assert!(WORK_DONE.with(Cell::get));
    }

    #[test]
    fn newer_notice_survives_stale_dismiss() {
        let mut notices = NoticeState::default();
        let first = notices.push(NoticeKind::Error, "Please add your name and email".into());
        let second = notices.push(NoticeKind::Success, "Request received.".into());

        notices.dismiss(first);
        assert_eq!(notices.current.as_ref().map(|n| n.id), Some(second));

        notices.dismiss(second);
        assert!(notices.current.is_none());
    }

    #[test]
    fn notice_ids_increase() {
        let mut notices = NoticeState::default();
        let a = notices.push(NoticeKind::Success, "a".into());
        let b = notices.push(NoticeKind::Success, "b".into());
        assert!(b > a);
        assert_eq!(notices.current.as_ref().map(|n| n.message.as_str()), Some("b"));
    }

    #[test]
    fn chat_starts_closed_with_greeting() {
        let state = AppState::default();
        assert!(!state.chat.open);
        assert_eq!(state.chat.transcript.len(), 1);
    }
}
