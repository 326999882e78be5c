use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::fixtures::content::{
    ACCENT_ILLUSTRATION, FAQ, FEATURES, FEATURE_ILLUSTRATION, HERO_ILLUSTRATION, HERO_STATS,
    TESTIMONIALS, USE_CASES,
};
use crate::hooks::seo::use_seo;
use crate::ui::demo_form::DemoForm;
use crate::ui::primitives::{carousel_window, Accordion, Card, TabList};
use crate::Route;

pub const DEMO_ANCHOR: &str = "demo";
const VISIBLE_TESTIMONIALS: usize = 3;

#[component]
pub fn LandingPage() -> Element {
    use_seo(
        "FundWise — Workflow automation platform",
        "FundWise helps teams automate workflows and reduce manual work.",
    );

    rsx! {
        main {
            Hero {}
            FeatureGrid {}
            UseCaseTabs {}
            Testimonials {}
            section { class: "section section-muted",
                div { class: "container",
                    h3 { class: "text-xl font-semibold mb-4", "FAQs" }
                    Accordion { items: FAQ.iter().map(|entry| (entry.question, entry.answer)).collect::<Vec<_>>() }
                }
            }
            section { class: "section",
                div { class: "container",
                    div { class: "cta-band flex items-center justify-between gap-4",
                        div {
                            h3 { class: "text-2xl font-semibold", "Ready to see FundWise?" }
                            p { class: "opacity-90", "Request a personalized demo tailored to your workflows." }
                        }
                        button { class: "btn-primary", onclick: move |_| scroll_to(DEMO_ANCHOR), "Request a demo" }
                    }
                }
            }
            section { id: DEMO_ANCHOR, class: "section section-muted",
                div { class: "container",
                    div { class: "grid md:grid-cols-2 gap-8 items-start",
                        div {
                            h3 { class: "text-2xl font-semibold mb-2", "Request a demo" }
                            p { class: "text-slate-500", "Tell us a bit about your team. We'll respond within 24 hours." }
                        }
                        DemoForm {}
                    }
                }
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    let navigator = use_navigator();

    rsx! {
        section { class: "hero-section",
            div { class: "hero-content items-center",
                div { class: "order-2 md:order-1",
                    h1 { class: "hero-title", "FundWise" }
                    p { class: "hero-subtitle max-w-2xl mx-auto",
                        "A modern workflow automation platform that helps you orchestrate processes, cut manual work, and move faster."
                    }
                    div { class: "mt-6 flex flex-col sm:flex-row gap-3 justify-center",
                        button { class: "btn-primary", onclick: move |_| scroll_to(DEMO_ANCHOR), "Request a demo" }
                        button {
                            class: "btn-secondary",
                            onclick: move |_| {
                                navigator.push(Route::Pricing {});
                            },
                            "View pricing"
                        }
                    }
                    div { class: "mt-8 grid grid-cols-2 sm:grid-cols-4 gap-2 text-sm text-slate-500",
                        for stat in HERO_STATS.iter() {
                            div { key: "{stat}", class: "product-card p-3 text-center", "{stat}" }
                        }
                    }
                }
                div { class: "order-1 md:order-2",
                    Illustration { src: HERO_ILLUSTRATION, alt: "Abstract black & white" }
                }
            }
        }
    }
}

#[component]
fn FeatureGrid() -> Element {
    rsx! {
        section { id: "features", class: "section",
            div { class: "container",
                div { class: "mb-8 text-center",
                    h2 { class: "text-3xl md:text-4xl font-bold tracking-tight", "Everything you need to automate" }
                    p { class: "mt-2 text-slate-500", "Build workflows in minutes, connect your stack, and let AI suggest improvements." }
                }
                div { class: "ai-grid",
                    for feature in FEATURES.iter() {
                        Card { key: "{feature.id}",
                            div { class: "flex flex-row items-center gap-3",
                                div { class: "w-10 h-10 rounded-xl bg-white grid place-items-center border",
                                    {feature.icon.glyph()}
                                }
                                h4 { class: "font-semibold text-black", "{feature.title}" }
                            }
                            p { class: "mt-3 text-slate-500", "{feature.description}" }
                        }
                    }
                }
                div { class: "mt-8 grid md:grid-cols-3 gap-6",
                    div { class: "md:col-span-1",
                        Illustration { src: FEATURE_ILLUSTRATION, alt: "Geometric cubes" }
                    }
                    Card { class: "md:col-span-2",
                        h4 { class: "font-semibold text-black", "Visual builder + monitoring" }
                        p { class: "text-slate-500", "Design flows, set SLAs, and view health in one place." }
                        ul { class: "mt-3 list-disc pl-4 space-y-2",
                            li { "Drag-and-drop steps, instant preview" }
                            li { "Integrations with CRMs, ERPs, sheets, chat" }
                            li { "AI suggestions for bottlenecks and errors" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UseCaseTabs() -> Element {
    let mut selected = use_signal(|| 0usize);
    let current = USE_CASES.get(*selected.read()).or(USE_CASES.first());

    rsx! {
        section { class: "section section-muted",
            div { class: "container",
                h3 { class: "text-xl font-semibold mb-4", "Use cases" }
                TabList {
                    labels: USE_CASES.iter().map(|case| case.title).collect::<Vec<_>>(),
                    selected: *selected.read(),
                    on_select: move |idx| selected.set(idx),
                }
                if let Some(case) = current {
                    div { id: "use-case-{case.key}", class: "mt-4 grid md:grid-cols-2 gap-6",
                        Card {
                            h4 { class: "font-semibold text-black", "{case.title} playbook" }
                            p { class: "text-slate-500", "Examples of automations teams ship in days." }
                            ul { class: "mt-3 list-disc pl-4 space-y-2",
                                for bullet in case.bullets.iter() {
                                    li { key: "{bullet}", "{bullet}" }
                                }
                            }
                        }
                        Illustration { src: ACCENT_ILLUSTRATION, alt: "Abstract lattice" }
                    }
                }
            }
        }
    }
}

#[component]
fn Testimonials() -> Element {
    let mut start = use_signal(|| 0usize);
    let window = carousel_window(TESTIMONIALS.len(), *start.read(), VISIBLE_TESTIMONIALS);
    let can_prev = window.start > 0;
    let can_next = window.end < TESTIMONIALS.len();

    rsx! {
        section { class: "section",
            div { class: "container",
                div { class: "mb-6",
                    h3 { class: "text-xl font-semibold", "Trusted by operators" }
                    p { class: "text-slate-500", "What leaders say about FundWise" }
                }
                div { class: "grid gap-4 md:grid-cols-3",
                    for testimonial in TESTIMONIALS[window.clone()].iter() {
                        Card { key: "{testimonial.name}", class: "h-full flex flex-col",
                            p { class: "italic", "“{testimonial.quote}”" }
                            div { class: "mt-4",
                                p { class: "font-medium text-black", "{testimonial.name}" }
                                p { class: "text-sm text-slate-500", "{testimonial.role}" }
                            }
                        }
                    }
                }
                div { class: "mt-4 flex justify-end gap-2",
                    button {
                        class: "btn-secondary px-3 py-1",
                        disabled: !can_prev,
                        "aria-label": "Previous slide",
                        onclick: move |_| {
                            let current = *start.read();
                            start.set(current.saturating_sub(1));
                        },
                        "‹"
                    }
                    button {
                        class: "btn-secondary px-3 py-1",
                        disabled: !can_next,
                        "aria-label": "Next slide",
                        onclick: move |_| {
                            let current = *start.read();
                            let next = carousel_window(TESTIMONIALS.len(), current + 1, VISIBLE_TESTIMONIALS);
                            start.set(next.start);
                        },
                        "›"
                    }
                }
            }
        }
    }
}

#[component]
fn Illustration(src: &'static str, alt: &'static str) -> Element {
    rsx! {
        div { class: "illustration-frame aspect-[16/10]",
            img { class: "illustration-img", src, alt }
        }
    }
}

/// Smooth-scrolls the element with `id` to the top of the viewport.
pub fn scroll_to(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!(%id, "scrolling is browser-only");
}
