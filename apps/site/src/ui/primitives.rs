use std::ops::Range;

use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] class: &'static str, children: Element) -> Element {
    rsx! {
        div { class: format!("product-card rounded-xl border border-slate-200 bg-white p-5 {class}"),
            {children}
        }
    }
}

#[component]
pub fn Badge(label: &'static str, #[props(default)] outline: bool) -> Element {
    let class = if outline {
        "rounded-full border border-black px-2 py-0.5 text-xs text-black"
    } else {
        "rounded-full bg-black px-2 py-0.5 text-xs text-white"
    };
    rsx! { span { class, "{label}" } }
}

#[component]
pub fn Switch(checked: bool, on_toggle: EventHandler<()>) -> Element {
    let track = if checked { "bg-black" } else { "bg-slate-300" };
    let knob = if checked { "translate-x-5" } else { "translate-x-0" };
    rsx! {
        button {
            r#type: "button",
            role: "switch",
            "aria-checked": "{checked}",
            class: format!("relative inline-flex h-5 w-10 items-center rounded-full transition {track}"),
            onclick: move |_| on_toggle.call(()),
            span { class: format!("inline-block h-4 w-4 rounded-full bg-white shadow transition {knob}") }
        }
    }
}

#[component]
pub fn Progress(value: u8) -> Element {
    let width = value.min(100);
    rsx! {
        div { class: "h-2 w-full overflow-hidden rounded-full bg-slate-200",
            div { class: "h-full bg-black", style: "width: {width}%" }
        }
    }
}

#[component]
pub fn TabList(labels: Vec<&'static str>, selected: usize, on_select: EventHandler<usize>) -> Element {
    rsx! {
        div { class: "flex overflow-x-auto gap-1 rounded-lg bg-slate-100 p-1",
            for (idx, label) in labels.into_iter().enumerate() {
                button {
                    key: "{idx}",
                    r#type: "button",
                    class: tab_class(idx == selected),
                    onclick: move |_| on_select.call(idx),
                    "{label}"
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "rounded-md bg-white px-3 py-1 text-sm font-medium text-black shadow"
    } else {
        "rounded-md px-3 py-1 text-sm text-slate-500"
    }
}

/// Single-open, collapsible accordion.
#[component]
pub fn Accordion(items: Vec<(&'static str, &'static str)>) -> Element {
    let mut open = use_signal(|| None::<usize>);

    rsx! {
        div { class: "divide-y divide-slate-200",
            for (idx, (title, body)) in items.into_iter().enumerate() {
                div { key: "item-{idx}", class: "py-3",
                    button {
                        r#type: "button",
                        class: "flex w-full items-center justify-between text-left font-medium",
                        onclick: move |_| {
                            let next = toggle_open(*open.read(), idx);
                            open.set(next);
                        },
                        span { "{title}" }
                        span { {marker(*open.read() == Some(idx))} }
                    }
                    if *open.read() == Some(idx) {
                        p { class: "mt-2 text-slate-600", "{body}" }
                    }
                }
            }
        }
    }
}

fn marker(expanded: bool) -> &'static str {
    if expanded {
        "−"
    } else {
        "+"
    }
}

fn toggle_open(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Slides shown by a non-looping carousel starting at `start`.
pub fn carousel_window(len: usize, start: usize, visible: usize) -> Range<usize> {
    let visible = visible.max(1).min(len);
    let start = start.min(len - visible);
    start..start + visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accordion_allows_one_open_item_and_collapses() {
        assert_eq!(toggle_open(None, 1), Some(1));
        assert_eq!(toggle_open(Some(1), 2), Some(2));
        assert_eq!(toggle_open(Some(2), 2), None);
    }

    #[test]
    fn carousel_window_clamps_to_bounds() {
        assert_eq!(carousel_window(5, 0, 3), 0..3);
        assert_eq!(carousel_window(5, 4, 3), 2..5);
        assert_eq!(carousel_window(2, 0, 3), 0..2);
        assert_eq!(carousel_window(0, 3, 3), 0..0);
    }
}
