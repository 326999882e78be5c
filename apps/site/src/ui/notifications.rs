use crate::state::{use_app_actions, use_app_state, NoticeKind};
use dioxus::prelude::*;

impl NoticeKind {
    fn accent_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("border-emerald-500 bg-emerald-50", "text-emerald-700"),
            Self::Error => ("border-red-500 bg-red-50", "text-red-700"),
        }
    }
}

#[component]
pub fn Toast(kind: NoticeKind, message: String, on_close: EventHandler<MouseEvent>) -> Element {
    let (container_class, accent_text) = kind.accent_classes();

    rsx! {
        div { class: format!("pointer-events-auto rounded-lg border-l-4 p-4 shadow-lg {}", container_class),
            role: "status",
            div { class: "flex items-start justify-between gap-4",
                p { class: format!("text-sm font-medium {}", accent_text), "{message}" }
                button {
                    class: "rounded bg-slate-200 px-2 py-1 text-[11px] text-slate-600 transition hover:bg-slate-300",
                    onclick: move |evt| on_close.call(evt),
                    "Dismiss"
                }
            }
        }
    }
}

/// Top-center toast stack; shows the current notice if any.
#[component]
pub fn NotificationCenter() -> Element {
    let actions = use_app_actions();
    let notice = use_app_state().read().notices.current.clone();

    let Some(notice) = notice else {
        return rsx! { Fragment {} };
    };

    let id = notice.id;

    rsx! {
        div { class: "pointer-events-none fixed left-1/2 top-4 z-50 flex w-80 -translate-x-1/2 flex-col gap-3",
            Toast {
                key: "{id}",
                kind: notice.kind,
                message: notice.message,
                on_close: move |_| actions.dismiss_notice(id),
            }
        }
    }
}
