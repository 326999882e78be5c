use dioxus::prelude::*;

use crate::fixtures::content::BLOG_POSTS;
use crate::hooks::seo::use_seo;
use crate::ui::primitives::{Badge, Card};

#[component]
pub fn BlogPage() -> Element {
    use_seo(
        "FundWise — Insights",
        "Guides and playbooks on workflow automation.",
    );

    rsx! {
        main { class: "section",
            div { class: "container",
                h1 { class: "text-4xl font-bold mb-6", "Insights" }
                div { class: "grid md:grid-cols-3 gap-6",
                    for post in BLOG_POSTS.iter() {
                        Card { key: "{post.slug}",
                            div { class: "flex items-center justify-between",
                                Badge { label: post.tag, outline: true }
                                span { class: "text-xs text-slate-400", "{post.date}" }
                            }
                            h3 { class: "mt-3 font-semibold text-black", "{post.title}" }
                            p { class: "mt-2 text-slate-500", "{post.excerpt}" }
                        }
                    }
                }
            }
        }
    }
}
