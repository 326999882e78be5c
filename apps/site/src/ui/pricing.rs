use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::fixtures::content::PRICING;
use crate::hooks::seo::use_seo;
use crate::models::{BillingCycle, PricingPlan};
use crate::ui::primitives::{Badge, Card, Switch};
use crate::Route;

#[component]
pub fn PricingPage() -> Element {
    use_seo(
        "FundWise — Pricing",
        "Simple, transparent pricing for teams of every size.",
    );
    let mut cycle = use_signal(BillingCycle::default);
    let current = *cycle.read();

    rsx! {
        main { class: "section",
            div { class: "container",
                div { class: "text-center mb-8",
                    h1 { class: "text-4xl font-bold", "Pricing" }
                    p { class: "text-slate-500 mt-2", "Choose a plan that scales with you." }
                    div { class: "mt-4 inline-flex items-center gap-3",
                        span { class: cycle_label_class(!current.is_annual()), "Monthly" }
                        Switch {
                            checked: current.is_annual(),
                            on_toggle: move |_| {
                                let next = cycle.read().toggled();
                                cycle.set(next);
                            },
                        }
                        span { class: cycle_label_class(current.is_annual()), "Annual" }
                        Badge { label: "Save 20%", outline: true }
                    }
                }
                div { class: "grid md:grid-cols-3 gap-6",
                    for plan in PRICING.iter() {
                        PlanCard { key: "{plan.plan}", plan: *plan, cycle: current }
                    }
                }
            }
        }
    }
}

#[component]
fn PlanCard(plan: PricingPlan, cycle: BillingCycle) -> Element {
    let price = plan.display_price(cycle);

    rsx! {
        Card { class: plan_card_class(plan.popular),
            div { class: "flex items-center justify-between",
                h3 { class: "font-semibold text-black", "{plan.plan}" }
                if plan.popular {
                    Badge { label: "Popular" }
                }
            }
            div { class: "text-3xl font-bold mt-2",
                {match price {
                    Some(amount) => rsx! {
                        span { "${amount}" }
                        span { class: "text-sm text-slate-500", "/mo" }
                    },
                    None => rsx! { "Custom pricing" },
                }}
            }
            ul { class: "mt-4 space-y-2 text-slate-500",
                for feature in plan.features.iter() {
                    li { key: "{feature}", "• {feature}" }
                }
            }
            div { class: "mt-6",
                if plan.contact {
                    Link { to: Route::Contact {}, class: "btn-secondary w-full", "Contact sales" }
                } else {
                    Link { to: Route::Contact {}, class: "btn-primary w-full", "Start free trial" }
                }
            }
        }
    }
}

fn cycle_label_class(active: bool) -> &'static str {
    if active {
        "text-sm text-black font-medium"
    } else {
        "text-sm text-slate-500"
    }
}

fn plan_card_class(popular: bool) -> &'static str {
    if popular {
        "border-black shadow-lg"
    } else {
        ""
    }
}
