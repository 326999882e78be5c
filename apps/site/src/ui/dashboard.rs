use dioxus::prelude::*;

use crate::hooks::seo::use_seo;
use crate::services::dashboard::WorkflowBoard;
use crate::ui::primitives::{Card, Progress, Switch};

/// Workflow builder mock. Toggles are local and reset on every visit.
#[component]
pub fn DashboardPage() -> Element {
    use_seo(
        "FundWise — Dashboard",
        "Create, monitor and optimize workflows.",
    );
    let mut board = use_signal(WorkflowBoard::default);
    let snapshot = board.read().clone();

    rsx! {
        main { class: "section",
            div { class: "container",
                div { class: "mb-6",
                    h2 { class: "text-3xl md:text-4xl font-bold", "Workflow builder" }
                    p { class: "text-slate-500",
                        "Create steps, toggle checks and monitor health. "
                        "{snapshot.enabled_count()} of {snapshot.steps().len()} steps active."
                    }
                }
                div { class: "grid md:grid-cols-5 gap-6",
                    div { class: "md:col-span-2 space-y-3",
                        for step in snapshot.steps().iter() {
                            Card { key: "{step.id}",
                                div { class: "flex items-center justify-between",
                                    div {
                                        p { class: "font-medium text-black", "{step.name}" }
                                        div { class: "flex items-center gap-2 mt-2",
                                            Switch {
                                                checked: step.enabled,
                                                on_toggle: {
                                                    let id = step.id;
                                                    move |_| {
                                                        board.write().toggle(id);
                                                    }
                                                },
                                            }
                                            span { class: "text-sm text-slate-500", {step.status_label()} }
                                        }
                                    }
                                    div { class: "w-24",
                                        Progress { value: step.health }
                                        p { class: "text-xs text-slate-400 mt-1", "Health" }
                                    }
                                }
                            }
                        }
                    }
                    Card { class: "md:col-span-3 h-full",
                        h3 { class: "font-semibold text-black", "Flow preview" }
                        p { class: "text-sm text-slate-500", "Dotted connections indicate enabled paths." }
                        div { class: "mt-4 grid grid-cols-3 gap-6",
                            for (idx, step) in snapshot.steps().iter().enumerate() {
                                div { key: "{step.id}", class: preview_tile_class(step.enabled),
                                    p { class: "font-medium", "Step {idx + 1}" }
                                    p { class: "text-slate-500 text-sm", "{step.name}" }
                                }
                            }
                        }
                        div { class: "mt-6 text-slate-400 text-sm", "Drag-and-drop builder and metrics coming soon." }
                    }
                }
            }
        }
    }
}

fn preview_tile_class(enabled: bool) -> &'static str {
    if enabled {
        "p-4 rounded-xl border bg-white"
    } else {
        "p-4 rounded-xl border bg-[#fafafa] text-slate-400"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_step_changes_its_label_and_preview_tile() {
        let mut board = WorkflowBoard::default();
        let before: Vec<_> = board
            .steps()
            .iter()
            .map(|step| (step.status_label(), preview_tile_class(step.enabled)))
            .collect();

        board.toggle(3);

        for (step, (label, tile)) in board.steps().iter().zip(&before) {
            let now = (step.status_label(), preview_tile_class(step.enabled));
            if step.id == 3 {
                assert_eq!(now, ("Enabled", "p-4 rounded-xl border bg-white"));
                assert_ne!(&now, &(*label, *tile));
            } else {
                assert_eq!(&now, &(*label, *tile));
            }
        }
    }
}
