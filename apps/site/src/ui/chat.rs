use dioxus::prelude::*;

use crate::models::ChatRole;
use crate::state::{use_app_actions, use_app_state};

#[component]
pub fn ChatWidget() -> Element {
    let actions = use_app_actions();
    let chat = use_app_state().read().chat.clone();
    let mut input = use_signal(String::new);

    let on_send = move |evt: FormEvent| {
        evt.prevent_default();
        let text = input.read().clone();
        if actions.send_chat_message(&text) {
            input.set(String::new());
        }
    };

    rsx! {
        div {
            if chat.open {
                div { class: "fixed bottom-24 left-6 md:left-auto md:right-8 w-[320px] p-3 rounded-xl shadow-lg z-[200] bg-white border",
                    div { class: "flex items-center justify-between mb-2",
                        p { class: "font-medium text-black", "FundWise assistant" }
                        button {
                            class: "btn-secondary px-3 py-1",
                            onclick: move |_| actions.close_chat(),
                            "Close"
                        }
                    }
                    div { class: "h-56 overflow-y-auto space-y-2 pr-1",
                        for (idx, message) in chat.transcript.messages().iter().enumerate() {
                            div {
                                key: "{idx}",
                                class: message_class(message.role),
                                span { class: "font-medium mr-1", {message.role.label()} }
                                "{message.content}"
                            }
                        }
                    }
                    form { class: "mt-2 flex gap-2", onsubmit: on_send,
                        input {
                            class: "flex-1 rounded border border-slate-300 px-2 py-1 text-sm",
                            name: "chatInput",
                            placeholder: "Type a message...",
                            "data-testid": "chat-input",
                            value: "{input}",
                            oninput: move |evt| input.set(evt.value()),
                        }
                        button { class: "btn-primary", r#type: "submit", "aria-label": "Send message", "Send" }
                    }
                }
            }
            button {
                class: "fixed bottom-6 left-6 md:left-auto md:right-8 btn-primary z-[200]",
                "data-testid": "chat-toggle",
                onclick: move |_| actions.toggle_chat(),
                if chat.open { "Hide chat" } else { "Chat" }
            }
        }
    }
}

fn message_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::Bot => "text-sm text-slate-500",
        ChatRole::User => "text-sm text-black",
    }
}
