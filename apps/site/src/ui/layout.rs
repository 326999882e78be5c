use dioxus::prelude::*;
use dioxus_router::prelude::*;
use time::OffsetDateTime;

use crate::fixtures::content::NAV_LINKS;
use crate::hooks::ping::use_backend_ping;
use crate::ui::chat::ChatWidget;
use crate::ui::notifications::NotificationCenter;
use crate::Route;

/// Frame shared by every page.
#[component]
pub fn Shell() -> Element {
    use_backend_ping();

    rsx! {
        div { class: "min-h-screen bg-[var(--bw-page)] text-[var(--bw-ink)]",
            Header {}
            Outlet::<Route> {}
            Footer {}
            ChatWidget {}
            NotificationCenter {}
        }
    }
}

#[component]
pub fn Header() -> Element {
    let current = use_route::<Route>();

    rsx! {
        header { class: "nav-header flex items-center justify-between",
            div { class: "flex items-center gap-3 pl-2",
                Link { to: Route::Landing {}, class: "flex items-center gap-2",
                    Logo {}
                    span { class: "font-semibold text-black", "FundWise" }
                }
                nav { class: "hidden md:flex items-center gap-1",
                    for link in NAV_LINKS.iter() {
                        Link {
                            key: "{link.to}",
                            to: Route::resolve(link.to),
                            class: nav_link_class(Route::resolve(link.to) == current),
                            "{link.label}"
                        }
                    }
                }
            }
            div { class: "flex items-center gap-2 pr-2",
                Link { to: Route::Pricing {}, class: "hidden sm:inline-flex btn-secondary", "View pricing" }
                Link { to: Route::Contact {}, class: "btn-primary", "Request a demo" }
            }
        }
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "nav-link bg-black/5 text-black"
    } else {
        "nav-link"
    }
}

#[component]
fn Logo() -> Element {
    rsx! {
        div { class: "w-8 h-8 rounded-full bg-white border grid place-items-center",
            span { class: "text-black font-bold", "F" }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let year = OffsetDateTime::now_utc().year();

    rsx! {
        footer { class: "mt-20 border-t border-[var(--border-light)]",
            div { class: "container py-10 grid grid-cols-2 md:grid-cols-4 gap-8",
                div { class: "col-span-2",
                    div { class: "flex items-center gap-2 mb-3",
                        Logo {}
                        span { class: "font-semibold", "FundWise" }
                    }
                    p { class: "text-sm text-slate-500 max-w-md",
                        "Automate workflows, reduce manual work, and scale efficiently with FundWise."
                    }
                }
                div {
                    h4 { class: "font-semibold mb-3", "Product" }
                    ul { class: "space-y-2 text-slate-500",
                        li { Link { to: Route::Features {}, "Features" } }
                        li { Link { to: Route::Pricing {}, "Pricing" } }
                        li { Link { to: Route::Dashboard {}, "Dashboard" } }
                    }
                }
                div {
                    h4 { class: "font-semibold mb-3", "Company" }
                    ul { class: "space-y-2 text-slate-500",
                        li { Link { to: Route::Blog {}, "Insights" } }
                        li { Link { to: Route::Contact {}, "Contact" } }
                        li {
                            a { href: "https://emergent.sh", target: "_blank", rel: "noreferrer", "Careers" }
                        }
                    }
                }
            }
            hr { class: "border-[var(--border-light)]" }
            div { class: "container py-6 flex flex-col md:flex-row items-center justify-between gap-4",
                p { class: "text-sm text-slate-400", "© {year} FundWise. All rights reserved." }
                div { class: "flex items-center gap-4 text-sm text-slate-500",
                    Link { to: Route::resolve("/privacy"), "Privacy" }
                    Link { to: Route::resolve("/terms"), "Terms" }
                }
            }
        }
    }
}
