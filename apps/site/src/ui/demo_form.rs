use dioxus::prelude::*;

use crate::hooks::demo_form::use_demo_form;
use crate::models::DemoField;

#[component]
pub fn DemoForm() -> Element {
    let form = use_demo_form();
    let fields = form.fields.read().clone();
    let submitting = *form.submitting.read();

    rsx! {
        form {
            class: "product-card space-y-4",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                form.submit();
            },
            FieldRow {
                label: "Full name",
                name: "name",
                placeholder: "Jane Doe",
                value: fields.name,
                on_change: move |value| form.set_field(DemoField::Name, value),
            }
            FieldRow {
                label: "Work email",
                name: "email",
                input_type: "email",
                placeholder: "jane@company.com",
                value: fields.email,
                on_change: move |value| form.set_field(DemoField::Email, value),
            }
            FieldRow {
                label: "Company",
                name: "company",
                placeholder: "Acme Inc",
                value: fields.company,
                on_change: move |value| form.set_field(DemoField::Company, value),
            }
            div {
                label { class: "block text-sm mb-1", "What would you like to automate?" }
                textarea {
                    class: "w-full rounded border border-slate-300 p-2",
                    name: "notes",
                    placeholder: "Share your top 1-2 workflows...",
                    value: "{fields.notes}",
                    oninput: move |evt| form.set_field(DemoField::Notes, evt.value()),
                }
            }
            div { class: "flex items-center justify-between",
                p { class: "text-xs text-slate-400", "No spam. We'll only contact you about your demo." }
                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: submitting,
                    if submitting { "Submitting..." } else { "Request demo" }
                }
            }
        }
    }
}

#[component]
fn FieldRow(
    label: &'static str,
    name: &'static str,
    #[props(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    value: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { class: "block text-sm mb-1", "{label}" }
            input {
                class: "w-full rounded border border-slate-300 p-2",
                name,
                r#type: input_type,
                placeholder,
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}
