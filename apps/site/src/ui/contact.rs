use dioxus::prelude::*;

use crate::fixtures::content::{CONTACT_EMAIL, SUPPORT_EMAIL};
use crate::hooks::seo::use_seo;
use crate::ui::demo_form::DemoForm;
use crate::ui::primitives::Card;

#[component]
pub fn ContactPage() -> Element {
    use_seo(
        "FundWise — Contact",
        "Talk to the FundWise team or request a demo.",
    );

    rsx! {
        main { class: "section",
            div { class: "container grid md:grid-cols-2 gap-8 items-start",
                div {
                    h1 { class: "text-4xl font-bold", "Contact" }
                    p { class: "mt-2 text-slate-500", "We usually reply within one business day." }
                    Card { class: "mt-6",
                        p { class: "text-sm text-slate-500", "Sales" }
                        a { class: "font-medium text-black", href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                        p { class: "mt-4 text-sm text-slate-500", "Support" }
                        a { class: "font-medium text-black", href: "mailto:{SUPPORT_EMAIL}", "{SUPPORT_EMAIL}" }
                    }
                }
                DemoForm {}
            }
        }
    }
}
